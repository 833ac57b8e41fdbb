use anyhow::Result;
use clap::Parser;
use std::io;

// Use library instead of local modules
use fitness_registry::config::Config;
use fitness_registry::menu::Menu;
use fitness_registry::{logging, FitnessRegistry};

fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.verbose)?;

    let registry = if config.demo {
        tracing::info!("starting with demo club");
        FitnessRegistry::with_demo_data()
    } else {
        FitnessRegistry::new()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(registry, stdin.lock(), stdout.lock(), config.limits());
    menu.run()
}
