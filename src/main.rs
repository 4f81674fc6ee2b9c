// Module declarations
mod builder;
mod cli;
mod config;
mod directory;
mod front_matter;
mod markdown;
mod template;
mod utils;

fn main() {
    if let Err(e) = cli::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
