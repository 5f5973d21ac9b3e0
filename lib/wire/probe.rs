use crate::wire::{CommandFrame, Frame, Gpio, Level, Line};
use bitvec::prelude::{BitSlice, BitVec, Msb0};
use std::io;
use tracing::trace;

/// A simulated receiver.
///
/// Like the actuator firmware, it samples the data line on every falling edge of the clock.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Probe {
    data: Level,
    clock: Level,
    bits: BitVec<u64, Msb0>,
}

impl Probe {
    /// Constructs a [`Probe`] with both lines low.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current level of a [`Line`].
    pub fn level(&self, line: Line) -> Level {
        match line {
            Line::Data => self.data,
            Line::Clock => self.clock,
        }
    }

    /// The bits sampled so far.
    pub fn bits(&self) -> &BitSlice<u64, Msb0> {
        &self.bits
    }

    /// The complete commands sampled so far, assuming frames `width` bits wide.
    pub fn commands(&self, width: usize) -> Vec<CommandFrame> {
        self.bits
            .chunks_exact(2 * width.max(1))
            .map(|c| {
                let (whence, whither) = c.split_at(width.max(1));
                CommandFrame(Frame::from(whence), Frame::from(whither))
            })
            .collect()
    }
}

impl Gpio for Probe {
    fn set_line(&mut self, line: Line, level: Level) -> io::Result<()> {
        trace!(%line, %level);

        match line {
            Line::Data => self.data = level,
            Line::Clock => {
                if (self.clock, level) == (Level::High, Level::Low) {
                    self.bits.push(self.data == Level::High);
                }

                self.clock = level;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn probe_samples_data_on_falling_clock_edge(bits: Vec<bool>) {
        let mut probe = Probe::new();

        for &b in &bits {
            probe.set_line(Line::Data, b.into())?;
            probe.set_line(Line::Clock, Level::High)?;
            probe.set_line(Line::Clock, Level::Low)?;
        }

        assert_eq!(probe.bits().iter().by_vals().collect::<Vec<_>>(), bits);
    }

    #[proptest]
    fn probe_ignores_data_changes_while_clock_is_stable(bits: Vec<bool>) {
        let mut probe = Probe::new();

        for &b in &bits {
            probe.set_line(Line::Data, b.into())?;
            probe.set_line(Line::Clock, Level::Low)?;
        }

        assert!(probe.bits().is_empty());
    }

    #[test]
    fn probe_splits_bits_into_commands() {
        let mut probe = Probe::new();

        for b in [false, true, true, true, true, false, true] {
            probe.set_line(Line::Data, b.into()).unwrap();
            probe.set_line(Line::Clock, Level::High).unwrap();
            probe.set_line(Line::Clock, Level::Low).unwrap();
        }

        let commands = probe.commands(3);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].values(), (3, -2));
        assert_eq!(probe.commands(4), vec![]);
    }
}
