mod app;
mod audio;
mod config;
mod error;
mod library;
mod logging;
mod player;
mod runtime;
mod store;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
