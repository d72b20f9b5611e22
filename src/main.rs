use clap::Parser;

mod cli;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        startpage::renderer::cli::print_error(&err);
        std::process::exit(1);
    }
}
