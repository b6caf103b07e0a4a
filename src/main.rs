mod cast;
mod config;
mod error;
mod library;
mod logging;
mod runtime;
mod ui;

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("wavecast: {e}");
        std::process::exit(1);
    }
}
