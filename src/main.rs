//! Imperium -- replay driver.
//!
//! Reads a JSON action log from a file argument (or stdin), replays it on
//! the classic map, and prints a state summary plus the current
//! legal-action set as JSON.

use std::io::Read;
use std::sync::Arc;

use imperium::board::nation::ALL_NATIONS;
use imperium::board::standard::standard_map;
use imperium::engine::Game;
use imperium::protocol::{decode_log, encode_action};

fn main() {
    env_logger::init();

    let input = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("cannot read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("cannot read stdin: {}", e);
                std::process::exit(1);
            }
            buf
        }
    };

    let log = match decode_log(&input) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("malformed action log: {}", e);
            std::process::exit(1);
        }
    };

    let game = match Game::from_log(Arc::new(standard_map()), &log) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("replay failed: {}", e);
            std::process::exit(1);
        }
    };

    let state = game.state();
    println!("replayed {} actions", state.log.len());
    println!("acting: {} ({})", state.current_nation, state.current_player);
    for nation in ALL_NATIONS {
        if let Ok(n) = state.nation(nation) {
            println!(
                "{}: treasury {}, tax chart {}, power {}, controller {}",
                nation,
                n.treasury,
                n.tax_chart_position,
                n.power_points,
                n.controller.as_deref().unwrap_or("-"),
            );
        }
    }
    match &state.winner {
        Some(winner) => println!("winner: {}", winner),
        None => {
            println!("legal actions:");
            for action in game.available_actions() {
                match encode_action(action) {
                    Ok(json) => println!("  {}", json),
                    Err(e) => eprintln!("  <encoding error: {}>", e),
                }
            }
        }
    }
}
