use crate::{applet::Applet, config::Config};
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// The actuator configuration in RON notation.
    #[clap(short, long, default_value_t)]
    config: Config,

    #[clap(subcommand)]
    applet: Applet,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.execute(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_and_uci_arguments_are_parsed() {
        let args = ["cli", "plan", "--fen", "1n2k3/P7/8/8/8/8/8/4K3 w - - 0 1", "a7b8q"];
        assert!(Cli::try_parse_from(args).is_ok());

        let args = ["cli", "reset", "--target", "4k3/8/8/8/8/8/8/4K3 w - - 0 1", "8/8/8/8/8/8/8/8 w - - 0 1"];
        assert!(Cli::try_parse_from(args).is_ok());
    }

    #[test]
    fn malformed_uci_move_is_rejected() {
        assert!(Cli::try_parse_from(["cli", "play", "e2"]).is_err());
    }

    #[test]
    fn config_is_parsed_from_ron() {
        let args = ["cli", "--config", "(protocol: (pulse: \"0s\"))", "encode", "-5"];
        assert!(Cli::try_parse_from(args).is_ok());
    }
}
