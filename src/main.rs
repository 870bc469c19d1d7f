mod app;
mod audio;
mod catalog;
mod config;
mod error;
mod logging;
mod runtime;
mod session;
mod storage;
mod ui;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
