use clap::Parser;

use kinasedb::cli::{Cli, Commands};
use kinasedb::commands;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildDb(args) => {
            commands::db::command(args);
        }
        Commands::Browse(args) => {
            commands::browse::command(args);
        }
        Commands::Search(cmd) => {
            commands::search::command(cmd);
        }
    }
}
