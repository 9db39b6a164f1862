use ant_farm::prelude::*;
use clap::Parser;
use env_logger::Env;
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().filter_or("ANT_FARM_LOG", "warn"));

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }
    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock(), rng).with_prompt(args.show_prompt());

    match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(FarmError::from)?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }

    Ok(())
}
