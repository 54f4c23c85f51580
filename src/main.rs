mod app;
mod catalog;
mod config;
mod render;
mod runtime;
mod scheduler;
mod session;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
