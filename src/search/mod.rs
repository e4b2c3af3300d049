//! Search: move ordering, pruning heuristics, evaluation, and the
//! transposition table.

pub mod context;
pub mod eval;
pub mod ordering;
pub mod pesto;
pub mod picker;
pub mod search;
pub mod see;
pub mod tt;
