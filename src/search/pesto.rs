//! Tapered material and piece-square values, tuned by the Stockfish 11 team.
//!
//! Source tables are laid out with a1 at index 0 and the *white* side read
//! directly; `eval.rs` mirrors white squares instead (`sq ^ 56`) and reads
//! black directly, so every table here is pre-mirrored once at compile time
//! to match that convention.

pub type Pst = ([i32; 64], [i32; 64]);

pub const PAWN_VAL: (i32, i32) = (128, 213);
pub const KNIGHT_VAL: (i32, i32) = (781, 854);
pub const BISHOP_VAL: (i32, i32) = (825, 915);
pub const ROOK_VAL: (i32, i32) = (1276, 1380);
pub const QUEEN_VAL: (i32, i32) = (2538, 2682);
pub const KING_VAL: (i32, i32) = (0, 0);

const fn mirror(t: [i32; 64]) -> [i32; 64] {
    let mut out = [0i32; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = t[i ^ 56];
        i += 1;
    }
    out
}

#[rustfmt::skip]
const PAWN_MG_RAW: [i32; 64] = [
    0,0,0,0,0,0,0,0,
    9,13,13,13,13,13,13,9,
    -2,-5,-5,-5,-5,-5,-5,-2,
    -7,-9,-9,-9,-9,-9,-9,-7,
    -7,-9,-9,-9,-9,-9,-9,-7,
    13,10,10,10,10,10,10,13,
    29,34,34,34,34,34,34,29,
    0,0,0,0,0,0,0,0,
];
#[rustfmt::skip]
const PAWN_EG_RAW: [i32; 64] = [
    0,0,0,0,0,0,0,0,
    15,15,15,15,15,15,15,15,
    5,5,5,5,5,5,5,5,
    -5,-5,-5,-5,-5,-5,-5,-5,
    -10,-10,-10,-10,-10,-10,-10,-10,
    -14,-14,-14,-14,-14,-14,-14,-14,
    25,25,25,25,25,25,25,25,
    0,0,0,0,0,0,0,0,
];

#[rustfmt::skip]
const KNIGHT_MG_RAW: [i32; 64] = [
    -204,-111,-88,-77,-77,-88,-111,-204,
    -98,-48,-34,-15,-15,-34,-48,-98,
    -72,-17,-4,10,10,-4,-17,-72,
    -55,-1,22,38,38,22,-1,-55,
    -55,11,38,55,55,38,11,-55,
    -72,1,18,30,30,18,1,-72,
    -98,-40,-27,-15,-15,-27,-40,-98,
    -204,-111,-88,-77,-77,-88,-111,-204,
];
#[rustfmt::skip]
const KNIGHT_EG_RAW: [i32; 64] = [
    -100,-80,-60,-50,-50,-60,-80,-100,
    -80,-60,-40,-30,-30,-40,-60,-80,
    -60,-40,-20,-10,-10,-20,-40,-60,
    -50,-30,-10,0,0,-10,-30,-50,
    -50,-30,-10,0,0,-10,-30,-50,
    -60,-40,-20,-10,-10,-20,-40,-60,
    -80,-60,-40,-30,-30,-40,-60,-80,
    -100,-80,-60,-50,-50,-60,-80,-100,
];

#[rustfmt::skip]
const BISHOP_MG_RAW: [i32; 64] = [
    -52,-15,-20,-13,-13,-20,-15,-52,
    -15,1,8,10,10,8,1,-15,
    -20,8,18,24,24,18,8,-20,
    -13,10,24,33,33,24,10,-13,
    -13,10,24,33,33,24,10,-13,
    -20,8,18,24,24,18,8,-20,
    -15,1,8,10,10,8,1,-15,
    -52,-15,-20,-13,-13,-20,-15,-52,
];
#[rustfmt::skip]
const BISHOP_EG_RAW: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -40,-20,-10,0,0,-10,-20,-40,
    -30,-10,0,10,10,0,-10,-30,
    -20,0,10,20,20,10,0,-20,
    -20,0,10,20,20,10,0,-20,
    -30,-10,0,10,10,0,-10,-30,
    -40,-20,-10,0,0,-10,-20,-40,
    -50,-40,-30,-20,-20,-30,-40,-50,
];

#[rustfmt::skip]
const ROOK_MG_RAW: [i32; 64] = [
    -31,-21,-18,-12,-12,-18,-21,-31,
    -21,-13,-10,-1,-1,-10,-13,-21,
    -21,-13,-10,-1,-1,-10,-13,-21,
    -21,-13,-10,-1,-1,-10,-13,-21,
    -21,-13,-10,-1,-1,-10,-13,-21,
    -21,-13,-10,-1,-1,-10,-13,-21,
    1,10,13,18,18,13,10,1,
    -2,-2,-2,5,5,-2,-2,-2,
];
#[rustfmt::skip]
const ROOK_EG_RAW: [i32; 64] = [
    -10,0,5,10,10,5,0,-10,
    -10,0,5,10,10,5,0,-10,
    -10,0,5,10,10,5,0,-10,
    -10,0,5,10,10,5,0,-10,
    -10,0,5,10,10,5,0,-10,
    -10,0,5,10,10,5,0,-10,
    -10,0,5,10,10,5,0,-10,
    -10,0,5,10,10,5,0,-10,
];

#[rustfmt::skip]
const QUEEN_MG_RAW: [i32; 64] = [
    3,-2,-1,0,0,-1,-2,3,
    -2,4,5,6,6,5,4,-2,
    -1,5,7,8,8,7,5,-1,
    0,6,8,10,10,8,6,0,
    0,6,8,10,10,8,6,0,
    -1,5,7,8,8,7,5,-1,
    -2,4,5,6,6,5,4,-2,
    3,-2,-1,0,0,-1,-2,3,
];
#[rustfmt::skip]
const QUEEN_EG_RAW: [i32; 64] = [
    -50,-40,-30,-20,-20,-30,-40,-50,
    -40,-20,-10,0,0,-10,-20,-40,
    -30,-10,0,10,10,0,-10,-30,
    -20,0,10,20,20,10,0,-20,
    -20,0,10,20,20,10,0,-20,
    -30,-10,0,10,10,0,-10,-30,
    -40,-20,-10,0,0,-10,-20,-40,
    -50,-40,-30,-20,-20,-30,-40,-50,
];

#[rustfmt::skip]
const KING_MG_RAW: [i32; 64] = [
    271,327,271,198,198,271,327,271,
    278,303,256,195,195,256,303,278,
    195,252,169,120,120,169,252,195,
    169,190,131,78,78,131,190,169,
    169,190,131,78,78,131,190,169,
    195,252,169,120,120,169,252,195,
    278,303,256,195,195,256,303,278,
    271,327,271,198,198,271,327,271,
];
#[rustfmt::skip]
const KING_EG_RAW: [i32; 64] = [
    0,50,80,100,100,80,50,0,
    50,100,130,150,150,130,100,50,
    80,130,160,180,180,160,130,80,
    100,150,180,200,200,180,150,100,
    100,150,180,200,200,180,150,100,
    80,130,160,180,180,160,130,80,
    50,100,130,150,150,130,100,50,
    0,50,80,100,100,80,50,0,
];

pub const PAWN_TABLE: Pst = (mirror(PAWN_MG_RAW), mirror(PAWN_EG_RAW));
pub const KNIGHT_TABLE: Pst = (mirror(KNIGHT_MG_RAW), mirror(KNIGHT_EG_RAW));
pub const BISHOP_TABLE: Pst = (mirror(BISHOP_MG_RAW), mirror(BISHOP_EG_RAW));
pub const ROOK_TABLE: Pst = (mirror(ROOK_MG_RAW), mirror(ROOK_EG_RAW));
pub const QUEEN_TABLE: Pst = (mirror(QUEEN_MG_RAW), mirror(QUEEN_EG_RAW));
pub const KING_TABLE: Pst = (mirror(KING_MG_RAW), mirror(KING_EG_RAW));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_table_has_no_promotion_rank_bonus() {
        // Pawns never live on rank 1 or rank 8; both rows stay zeroed.
        for file in 0..8 {
            assert_eq!(PAWN_TABLE.0[file], 0);
            assert_eq!(PAWN_TABLE.0[56 + file], 0);
        }
    }

    #[test]
    fn king_endgame_table_favors_the_center() {
        // d4/e4/d5/e5 in a1=0 indexing are squares 27, 28, 35, 36.
        let center_eg = KING_TABLE.1[27].max(KING_TABLE.1[28]);
        assert!(center_eg > KING_TABLE.1[0]);
    }

    #[test]
    fn mirroring_is_self_inverse() {
        let original = PAWN_MG_RAW;
        let twice = mirror(mirror(original));
        assert_eq!(original, twice);
    }
}
