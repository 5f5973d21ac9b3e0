use crate::wire::{CommandFrame, Frame, Gpio, Level, Line};
use std::{io, thread, time::Duration};
use tracing::instrument;

/// Transmits frames bit by bit over a pair of data and clock lines.
///
/// Each bit is signaled by a clock pulse, the receiver samples the data line on the falling edge.
/// There is no acknowledgment, so nothing is ever retransmitted.
#[derive(Debug)]
pub struct Transmitter<G> {
    gpio: G,
    pulse: Duration,
}

impl<G: Gpio> Transmitter<G> {
    /// Constructs a [`Transmitter`] that holds each clock level for `pulse`.
    pub fn new(gpio: G, pulse: Duration) -> Self {
        Transmitter { gpio, pulse }
    }

    /// How long each clock level is held.
    pub fn pulse(&self) -> Duration {
        self.pulse
    }

    /// The underlying pin driver.
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Drives both lines low, which is what the receiver expects between commands.
    #[instrument(level = "trace", skip(self), err)]
    pub fn idle(&mut self) -> io::Result<()> {
        self.gpio.set_line(Line::Clock, Level::Low)?;
        self.gpio.set_line(Line::Data, Level::Low)?;
        Ok(())
    }

    /// Transmits a single bit.
    pub fn send_bit(&mut self, bit: bool) -> io::Result<()> {
        self.gpio.set_line(Line::Data, bit.into())?;
        self.gpio.set_line(Line::Clock, Level::High)?;
        self.wait();
        self.gpio.set_line(Line::Clock, Level::Low)?;
        self.wait();
        Ok(())
    }

    /// Transmits every bit of a [`Frame`], most significant first.
    #[instrument(level = "trace", skip(self), err, fields(%frame))]
    pub fn send_frame(&mut self, frame: &Frame) -> io::Result<()> {
        for bit in frame.bits() {
            self.send_bit(bit)?;
        }

        Ok(())
    }

    /// Transmits a [`CommandFrame`].
    #[instrument(level = "trace", skip(self), err, fields(%command))]
    pub fn send(&mut self, command: &CommandFrame) -> io::Result<()> {
        self.send_frame(command.whence())?;
        self.send_frame(command.whither())?;
        Ok(())
    }

    fn wait(&self) {
        if !self.pulse.is_zero() {
            thread::sleep(self.pulse);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{Encoder, MockGpio, Probe};
    use mockall::{predicate::eq, Sequence};
    use std::time::Instant;
    use test_strategy::proptest;

    #[proptest]
    fn send_bit_sets_data_then_pulses_clock(b: bool) {
        let mut gpio = MockGpio::new();
        let mut seq = Sequence::new();

        for (line, level) in [
            (Line::Data, Level::from(b)),
            (Line::Clock, Level::High),
            (Line::Clock, Level::Low),
        ] {
            gpio.expect_set_line()
                .with(eq(line), eq(level))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }

        let mut tx = Transmitter::new(gpio, Duration::ZERO);
        assert_eq!(tx.send_bit(b).ok(), Some(()));
    }

    #[proptest]
    fn send_bit_propagates_driver_failure(b: bool) {
        let mut gpio = MockGpio::new();
        gpio.expect_set_line()
            .times(1)
            .returning(|_, _| Err(io::ErrorKind::BrokenPipe.into()));

        let mut tx = Transmitter::new(gpio, Duration::ZERO);
        assert_eq!(
            tx.send_bit(b).map_err(|e| e.kind()),
            Err(io::ErrorKind::BrokenPipe)
        );
    }

    #[proptest]
    fn send_frame_pulses_the_clock_once_per_bit(v: i32) {
        let frame = Encoder::default().encode(v.into())?;

        let mut gpio = MockGpio::new();
        gpio.expect_set_line()
            .times(3 * frame.width())
            .returning(|_, _| Ok(()));

        let mut tx = Transmitter::new(gpio, Duration::ZERO);
        assert_eq!(tx.send_frame(&frame).ok(), Some(()));
    }

    #[proptest]
    fn receiver_recovers_the_command(a: i32, b: i32) {
        let encoder = Encoder::default();
        let command = CommandFrame(encoder.encode(a.into())?, encoder.encode(b.into())?);

        let mut tx = Transmitter::new(Probe::new(), Duration::ZERO);
        tx.send(&command)?;

        assert_eq!(tx.gpio().commands(32), vec![command]);
    }

    #[test]
    fn idle_drives_both_lines_low() {
        let mut tx = Transmitter::new(Probe::new(), Duration::ZERO);
        tx.send_bit(true).unwrap();
        tx.gpio.set_line(Line::Clock, Level::High).unwrap();
        tx.idle().unwrap();

        assert_eq!(tx.gpio().level(Line::Clock), Level::Low);
        assert_eq!(tx.gpio().level(Line::Data), Level::Low);
    }

    #[test]
    fn frame_takes_two_pulses_per_bit() {
        let pulse = Duration::from_millis(2);
        let frame = Encoder::new(4).unwrap().encode(5).unwrap();
        let mut tx = Transmitter::new(Probe::new(), pulse);

        let start = Instant::now();
        tx.send_frame(&frame).unwrap();

        assert!(start.elapsed() >= 2 * 4 * pulse);
        assert_eq!(tx.pulse(), pulse);
    }
}
