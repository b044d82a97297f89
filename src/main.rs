use clap::Parser;
use tidydown::Console;
use tidydown::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    let console = Console::new(cli.debug);

    if let Err(e) = cli::run(&cli) {
        console.error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
