use crate::applet::{report, transmitter};
use crate::config::Config;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::Board;
use lib::dispatch::Dispatcher;
use lib::plan::rearrange;
use shakmaty as sm;
use tracing::{info, instrument};

/// Rearranges the physical board into another position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Reset {
    /// The position to rearrange into, in FEN notation, defaults to the starting position.
    #[clap(short, long)]
    target: Option<sm::fen::Fen>,

    /// The position currently on the physical board, in FEN notation.
    fen: sm::fen::Fen,
}

impl Reset {
    #[instrument(level = "trace", skip(self, config), err)]
    pub fn execute(self, config: &Config) -> Result<(), Anyhow> {
        let current = Board::from(&self.fen.0.board);
        let expected = match &self.target {
            Some(fen) => Board::from(&fen.0.board),
            None => Board::default(),
        };

        let actions = rearrange(&current, &expected);
        info!(%current, %expected, actions = actions.len());

        let mut tx = transmitter(config)?;
        Dispatcher::new(&mut tx, config.protocol.encoder()?, config.layout)
            .dispatch(&actions)
            .context("failed to rearrange the board")?;

        if let Some(probe) = tx.gpio().probe() {
            report(probe, config.protocol.width);
        }

        Ok(())
    }
}
