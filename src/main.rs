use clap::Parser;
use dirsort::cli::{self, Cli};
use dirsort::output::OutputFormatter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::run(&cli) {
        OutputFormatter::error(&e);
        std::process::exit(1);
    }
}
