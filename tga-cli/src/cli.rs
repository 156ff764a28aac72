//! Command-line arguments.

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tg-analytics")]
#[command(about = "Telegram channel analytics: bot, HTTP API and collector", long_about = None)]
#[command(version)]
pub struct Cli {
    /// What to run.
    #[arg(long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Channel to collect in collector mode; defaults to CHANNEL_USERNAME.
    #[arg(long)]
    pub channel: Option<String>,

    /// Posts to collect in collector mode.
    #[arg(long, default_value_t = 100)]
    pub limit: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Bot,
    Api,
    Collector,
    All,
}
