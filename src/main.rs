use contact_deck::prelude::run_app;
use env_logger::Env;
use std::process::exit;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(err) = run_app() {
        eprintln!("{}", err);
        exit(1);
    }
}
