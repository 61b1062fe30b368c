use hangman::cli::{Cli, CliInterface, parse_cli};
use hangman::tui::TuiInterface;
use hangman::{GameError, SaveStore, WordSource, game_loop, logging};
use std::io;
use std::process::ExitCode;

fn run(cli: &Cli) -> Result<(), GameError> {
    let words = match &cli.words_path {
        Some(path) => WordSource::from_file(path)?,
        None => WordSource::embedded()?,
    };
    log::info!("loaded {} candidate words", words.len());

    let store = SaveStore::new(&cli.save_dir);
    let mut rng = rand::rng();

    if cli.tui {
        let mut interface = TuiInterface::new()?;
        game_loop(&words, &store, &mut interface, &mut rng)
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&words, &store, &mut interface, &mut rng)
    }
}

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(logging::default_filter(cli.tui));
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
