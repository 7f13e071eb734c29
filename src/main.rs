use bauxplan::cli::{output, Cli, Commands};
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve(args) => bauxplan::cli::solve::run(&args),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
