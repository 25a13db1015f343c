use crate::{app::App, cli::Args, config::Config, error::Result, ledger::Ledger};

mod app;
mod cli;
mod config;
mod error;
mod ledger;
mod pie_chart;
mod profile;
mod stats;
mod theme;
mod utils;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::get_args();

    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(args)?;

    let transactions = match &config.data {
        Some(path) => Ledger::load(path)?,
        None => {
            log::info!("No ledger file configured, showing sample data");
            Ledger::sample()
        }
    };

    if args.summary {
        stats::print_summary(&transactions);
        return Ok(());
    }

    App::new(config, transactions).run()
}
