use clap::Parser;
use dotenvy::dotenv;
use sea_tablegen_cli::{handle_error, run_generate_command, Cli};

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    run_generate_command(cli).unwrap_or_else(handle_error);
}
