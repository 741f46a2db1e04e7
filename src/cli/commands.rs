use clap::Parser;

/// Running with no arguments opens the task list
#[derive(Parser, Debug)]
#[command(
    name = "checkmark",
    about = concat!("\u{2713} checkmark v", env!("CARGO_PKG_VERSION"), " - a tiny to-do list for your terminal"),
    version
)]
pub struct Cli {}
