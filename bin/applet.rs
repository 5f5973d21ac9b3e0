use crate::{backend::Backend, config::Config};
use anyhow::{Context, Error as Anyhow};
use clap::Subcommand;
use derive_more::From;
use lib::wire::{Probe, Transmitter};
use shakmaty as sm;

mod encode;
mod plan;
mod play;
mod reset;

#[derive(From, Subcommand)]
pub enum Applet {
    Encode(encode::Encode),
    Plan(plan::Plan),
    Play(play::Play),
    Reset(reset::Reset),
}

impl Applet {
    pub fn execute(self, config: &Config) -> Result<(), Anyhow> {
        match self {
            Applet::Encode(a) => a.execute(config),
            Applet::Plan(a) => a.execute(config),
            Applet::Play(a) => a.execute(config),
            Applet::Reset(a) => a.execute(config),
        }
    }
}

/// The position described by `fen`, or the starting position.
fn position(fen: Option<sm::fen::Fen>) -> Result<sm::Chess, Anyhow> {
    match fen {
        None => Ok(sm::Chess::default()),
        Some(fen) => Ok(sm::Setup::from(fen)
            .position(sm::CastlingMode::Standard)
            .context("illegal position")?),
    }
}

/// Opens the configured pin driver and drives both lines low.
fn transmitter(config: &Config) -> Result<Transmitter<Backend>, Anyhow> {
    let gpio = Backend::open(&config.gpio).context("failed to open the pin driver")?;
    let mut tx = Transmitter::new(gpio, config.protocol.pulse);
    tx.idle().context("failed to drive the lines low")?;
    Ok(tx)
}

/// Prints what the simulated receiver got, one command per line.
fn report(probe: &Probe, width: u32) {
    for c in probe.commands(width as usize) {
        let (whence, whither) = c.values();
        println!("{} {} {}", c, whence, whither);
    }
}
