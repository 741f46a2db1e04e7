use checkmark::cli::commands::Cli;
use checkmark::io::config_io::{ConfigError, ConfigStore};
use clap::Parser;

fn main() {
    let _cli = Cli::parse();

    let store = match ConfigStore::default_location() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = checkmark::tui::run(&store) {
        // A failed save loses the session's edits; say so
        match e.downcast_ref::<ConfigError>() {
            Some(ce) if !ce.is_startup() => {
                eprintln!("error: {} (changes were not saved)", e)
            }
            _ => eprintln!("error: {}", e),
        }
        std::process::exit(1);
    }
}
