//! Thin command-line shell over the engine core: FEN in, perft counts or a
//! fixed-depth search result out. Not a UCI front end — see the crate's
//! design notes for why that state machine is deliberately not here.

use harrier::board::Board;
use harrier::logger::init_logging;
use harrier::moves::magic::loader::load_magic_tables;
use harrier::moves::perft::{perft_count_with_breakdown, PerftCounters};
use harrier::search::search::search;
use std::env;
use std::str::FromStr;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn main() {
    init_logging("logs/harrier.log", "info");

    let args: Vec<String> = env::args().collect();
    let mut fen = START_FEN.to_string();
    let mut depth: u32 = 5;
    let mut mode = "perft";

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "perft" | "search" => mode = Box::leak(args[i].clone().into_boxed_str()),
            "--fen" => {
                if let Some(v) = args.get(i + 1) {
                    fen = v.clone();
                    i += 1;
                }
            }
            "--depth" => {
                if let Some(v) = args.get(i + 1) {
                    depth = v.parse().unwrap_or(depth);
                    i += 1;
                }
            }
            other => eprintln!("ignoring unrecognized argument: {}", other),
        }
        i += 1;
    }

    let tables = load_magic_tables();
    let mut board = match Board::from_str(&fen) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("invalid FEN `{}`: {}", fen, e);
            std::process::exit(1);
        }
    };

    match mode {
        "perft" => {
            let mut counters = PerftCounters::zero();
            perft_count_with_breakdown(&mut board, &tables, depth, &mut counters);
            println!("nodes {}", counters.nodes);
            println!("captures {}", counters.captures);
            println!("en_passant {}", counters.ep_captures);
            println!("castles {}", counters.castles);
            println!("promotions {}", counters.promotions);
            println!("checks {}", counters.checks);
            println!("checkmates {}", counters.checkmates);
        }
        "search" => {
            // search() already emits the info/bestmove lines on stdout.
            let _ = search(&mut board, &tables, depth as i32, None);
        }
        other => eprintln!("unknown mode `{}`, expected `perft` or `search`", other),
    }
}
