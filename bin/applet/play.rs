use crate::applet::{position, report, transmitter};
use crate::config::Config;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Move};
use lib::dispatch::Dispatcher;
use lib::plan::decompose;
use shakmaty as sm;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Plays a sequence of moves on the physical board.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The position the first move is played in, in FEN notation.
    #[clap(short, long)]
    fen: Option<sm::fen::Fen>,

    /// The moves in UCI notation.
    #[clap(required = true)]
    moves: Vec<sm::uci::Uci>,
}

impl Play {
    #[instrument(level = "trace", skip(self, config), err)]
    pub fn execute(self, config: &Config) -> Result<(), Anyhow> {
        let mut chess = position(self.fen)?;
        let mut tx = transmitter(config)?;
        let mut dispatcher = Dispatcher::new(&mut tx, config.protocol.encoder()?, config.layout);
        let budget = config.protocol.budget();

        for uci in self.moves {
            let m = uci
                .to_move(&chess)
                .with_context(|| format!("illegal move `{}`", uci))?;

            let board = Board::from(sm::Position::board(&chess));
            let actions = decompose(Move::try_from(m.clone())?, &board)
                .with_context(|| format!("failed to decompose `{}`", uci))?;

            let timer = Instant::now();
            dispatcher
                .dispatch(&actions)
                .with_context(|| format!("failed to dispatch `{}`", uci))?;

            let elapsed = timer.elapsed();
            if elapsed > budget {
                warn!(%uci, ?elapsed, ?budget, "dispatch ran over budget");
            }

            info!(%uci, %actions, ?elapsed, "played");
            sm::Position::play_unchecked(&mut chess, &m);
        }

        if let Some(probe) = tx.gpio().probe() {
            report(probe, config.protocol.width);
        }

        Ok(())
    }
}
