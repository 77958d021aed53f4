//! CLI entry point for the domino shuffling animation

use clap::Parser;
use domino_shuffle::io::cli::{Cli, Shuffler};

fn main() -> domino_shuffle::Result<()> {
    let cli = Cli::parse();
    let shuffler = Shuffler::new(cli);
    shuffler.run()
}
