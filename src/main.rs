use chrono::Local;
use clap::Parser;
use env_logger::Target;
use jungle_chess::display_format::DisplayFormat;
use jungle_chess::game::{Game, Status};
use jungle_chess::location::Move;
use jungle_chess::piece::Side;
use log::LevelFilter;
use std::io;
use std::io::Write;

#[derive(Parser)]
struct Arguments {
    /// Starting position as a placement string
    #[clap(short, long)]
    fen: Option<String>,

    /// Give green the first move (used together with --fen)
    #[clap(long)]
    green_first: bool,

    /// Draw pieces with letters instead of animal glyphs
    #[clap(long)]
    ascii: bool,

    /// Disable terminal text effects
    #[clap(long)]
    plain: bool,
}

fn main() {
    let arguments = Arguments::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            writeln!(
                buf,
                "{style}[{}] [{:5}]{style:#} {}",
                Local::now().format("%T%.3f"),
                record.level(),
                record.args(),
                style = buf.default_level_style(record.level()),
            )
        })
        .target(Target::Stderr)
        .init();

    DisplayFormat::set_default_unicode(!arguments.ascii);
    DisplayFormat::set_default_effects(!arguments.plain);

    let turn = if arguments.green_first { Side::Green } else { Side::Red };
    let mut game = match &arguments.fen {
        Some(fen) => match Game::from_fen(fen, turn) {
            Some(game) => game,
            None => {
                eprintln!("invalid placement string '{fen}'");
                return;
            }
        },
        None => Game::opening(),
    };

    loop {
        println!("{}", game.display(DisplayFormat::pretty()));

        if game.status() != Status::Ongoing {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
            break;
        }
        let input = input.trim().to_ascii_lowercase();

        if input == "moves" {
            for mv in game.legal_moves() {
                print!("{mv} ");
            }
            println!();
            continue;
        }

        match input.parse::<Move>() {
            Ok(mv) => {
                if let Err(error) = game.make_move(mv) {
                    println!("{error}");
                }
            }
            Err(()) => println!("expected a move such as 'a2a3', or 'moves'"),
        }
    }
}
