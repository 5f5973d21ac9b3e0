use crate::{applet::position, config::Config};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Move};
use lib::dispatch::Dispatcher;
use lib::plan::decompose;
use lib::wire::{Probe, Transmitter};
use shakmaty as sm;
use std::time::Duration;
use tracing::instrument;

/// Prints the actions and commands a move decomposes into, without driving the pins.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Plan {
    /// The position the move is played in, in FEN notation.
    #[clap(short, long)]
    fen: Option<sm::fen::Fen>,

    /// The move in UCI notation.
    uci: sm::uci::Uci,
}

impl Plan {
    #[instrument(level = "trace", skip(self, config), err)]
    pub fn execute(self, config: &Config) -> Result<(), Anyhow> {
        let chess = position(self.fen)?;
        let m = self.uci.to_move(&chess).context("illegal move")?;
        let board = Board::from(sm::Position::board(&chess));
        let actions = decompose(Move::try_from(m)?, &board)?;

        let mut tx = Transmitter::new(Probe::new(), Duration::ZERO);
        let encoder = config.protocol.encoder()?;
        Dispatcher::new(&mut tx, encoder, config.layout).dispatch(&actions)?;

        let commands = tx.gpio().commands(encoder.width() as usize);
        for (a, c) in actions.iter().zip(commands) {
            println!("{}\t{}", a, c);
        }

        Ok(())
    }
}
