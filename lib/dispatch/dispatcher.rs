use crate::dispatch::Layout;
use crate::plan::Action;
use crate::wire::{CommandFrame, Encoder, EncodingOverflow, Gpio, Transmitter};
use derive_more::{Display, Error, From};
use std::io;
use tracing::{info, instrument, warn};

/// The reason why transmission stopped part way through a sequence of [`Action`]s.
#[derive(Debug, Display, Error)]
#[display(
    fmt = "failed to transmit `{}` after {} successful actions",
    action,
    "last_completed.map_or(0, |i| i + 1)"
)]
pub struct DispatchAborted {
    /// The index of the last [`Action`] transmitted in full, if any.
    pub last_completed: Option<usize>,

    /// The [`Action`] that failed to transmit.
    pub action: Action,

    /// The underlying failure.
    pub source: io::Error,
}

/// The reason why dispatching a sequence of [`Action`]s failed.
#[derive(Debug, Display, Error, From)]
pub enum DispatchError {
    /// Nothing was transmitted.
    #[display(fmt = "failed to encode command")]
    Encoding(EncodingOverflow),

    #[display(fmt = "{}", _0)]
    Aborted(DispatchAborted),
}

/// Turns [`Action`]s into commands and transmits them to the actuator.
#[derive(Debug)]
pub struct Dispatcher<'a, G> {
    transmitter: &'a mut Transmitter<G>,
    encoder: Encoder,
    layout: Layout,
}

impl<'a, G: Gpio> Dispatcher<'a, G> {
    /// Constructs a [`Dispatcher`] that borrows the [`Transmitter`] for as long as it lives.
    pub fn new(transmitter: &'a mut Transmitter<G>, encoder: Encoder, layout: Layout) -> Self {
        Dispatcher {
            transmitter,
            encoder,
            layout,
        }
    }

    /// The [`CommandFrame`] that carries out an [`Action`].
    pub fn command(&self, action: &Action) -> Result<CommandFrame, EncodingOverflow> {
        let (whence, whither) = self.layout.coordinates(action);
        Ok(CommandFrame(
            self.encoder.encode(whence)?,
            self.encoder.encode(whither)?,
        ))
    }

    /// Transmits the commands for a sequence of [`Action`]s in order.
    ///
    /// Every action is encoded before anything is transmitted,
    /// so that a value out of range never leaves the actuator half way through a move.
    #[instrument(level = "debug", skip(self, actions), err, fields(actions = actions.len()))]
    pub fn dispatch(&mut self, actions: &[Action]) -> Result<(), DispatchError> {
        let commands = actions
            .iter()
            .map(|a| self.command(a))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, (&action, command)) in actions.iter().zip(&commands).enumerate() {
            if let Err(source) = self.transmitter.send(command) {
                warn!(index = i, %action, %source, "transmission aborted");
                return Err(DispatchAborted {
                    last_completed: i.checked_sub(1),
                    action,
                    source,
                }
                .into());
            }

            info!(index = i, %action, "dispatched");
        }

        Ok(())
    }
}
