use std::{io, path::PathBuf};

mod input;
mod menu;
mod session;
mod terminal;

use clap::ArgAction;
use courses::Config;
use session::Session;
use terminal::Palette;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML file overriding the course code heuristic
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self
            .config
            .as_deref()
            .map(Config::load)
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or_default();
        tracing::debug!(?config, "starting session");

        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(stdin.lock(), stdout.lock(), config)
            .with_palette(Palette::detect())
            .run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
