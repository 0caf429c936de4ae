use std::env;
use std::io;
use std::path::PathBuf;

use floorwalk::engine::Console;
use floorwalk::{Adventure, GameError, load_bundled_world, load_world_from_file};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let world = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_world_from_file(&path)?,
        None => load_bundled_world()?,
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let mut adventure = Adventure::new(world);
    adventure.play(&mut console)
}
