mod cli;

use clap::Parser;
use cli::args::Cli;
use cli::dispatch::handle;
use clickddl_rs::logger::setup_logger;
use clickddl_rs::Config;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref(), cli.env.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    setup_logger(&config.logging.level, cli.verbose);
    handle(cli, config);
}
