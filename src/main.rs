// Terminal front end: two players, one board, turns until someone
// reaches their goal row or forfeits.

use std::env;
use std::process::ExitCode;

use log::info;

use quoridor_engine::agent::{HumanPlayer, MinimaxPlayer, Player};
use quoridor_engine::agent::ai::DEFAULT_DEPTH;
use quoridor_engine::game_repr::GameState;

const PLAYER_NAMES: [&str; 2] = ["A", "B"];

fn make_player(kind: &str, name: &str, depth: u8) -> Result<Box<dyn Player>, String> {
    match kind {
        "human" => Ok(Box::new(HumanPlayer::new(name))),
        "ai" => Ok(Box::new(MinimaxPlayer::with_depth(name, depth))),
        other => Err(format!("unknown player kind '{}', expected human or ai", other)),
    }
}

fn parse_args() -> Result<[Box<dyn Player>; 2], String> {
    let mut kinds = ["human".to_string(), "ai".to_string()];
    let mut depth = DEFAULT_DEPTH;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or(format!("{} needs a value", flag));
        match arg.as_str() {
            "--p1" => kinds[0] = value("--p1")?,
            "--p2" => kinds[1] = value("--p2")?,
            "--depth" => {
                depth = value("--depth")?
                    .parse()
                    .map_err(|_| "--depth needs a number".to_string())?
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok([
        make_player(&kinds[0], PLAYER_NAMES[0], depth)?,
        make_player(&kinds[1], PLAYER_NAMES[1], depth)?,
    ])
}

fn main() -> ExitCode {
    env_logger::init();

    let mut players = match parse_args() {
        Ok(players) => players,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("usage: quoridor_engine [--p1 human|ai] [--p2 human|ai] [--depth N]");
            return ExitCode::FAILURE;
        }
    };

    let mut state = GameState::new();
    println!("{}", state);

    while !state.is_over() {
        let side = state.current_player();
        let Some(mv) = players[side].next_move(&state) else {
            println!("{} forfeits. {} wins!", PLAYER_NAMES[side], PLAYER_NAMES[1 - side]);
            return ExitCode::SUCCESS;
        };
        match state.apply(&mv) {
            Ok(()) => {
                info!("{} plays {}", PLAYER_NAMES[side], mv);
                println!("{}", state);
            }
            Err(err) => println!("Invalid move: {}", err),
        }
    }

    println!("{} wins!", PLAYER_NAMES[state.winner()]);
    ExitCode::SUCCESS
}
