use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Ledger file (TOML) with the transactions to chart
    #[clap(short, long)]
    pub data: Option<PathBuf>,

    /// Config file, defaults to ~/.config/expense-viz/config.toml
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Print the expense breakdown to the terminal instead of opening a window
    #[clap(long)]
    pub summary: bool,

    #[clap(long)]
    pub width: Option<f32>,

    #[clap(long)]
    pub height: Option<f32>,
}

pub fn get_args() -> Args {
    Args::parse()
}
