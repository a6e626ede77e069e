use clap::Parser;
use jungle_chess::game::{Game, Status};
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
struct Arguments {
    #[clap(short, long, default_value_t = 1)]
    games: u32,

    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    let arguments = Arguments::parse();
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    let mut random = match arguments.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    for index in 0..arguments.games {
        let mut game = Game::opening();
        let mut plies = 0u32;

        while game.status() == Status::Ongoing {
            let moves = game.legal_moves();
            if moves.is_empty() {
                warn!("game {index}: {} has no legal moves, abandoning", game.turn());
                break;
            }

            let mv = moves[random.random_range(0..moves.len())];
            game.make_move(mv).expect("legal move must apply");
            plies += 1;
        }

        info!("game {index}: {:?} ({}) after {plies} plies", game.status(), game.end_reason());
        println!("{game}");
    }
}
