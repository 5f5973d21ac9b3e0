use derive_more::Display;
use std::io;

/// The output lines wired to the actuator.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Line {
    #[display(fmt = "data")]
    Data,
    #[display(fmt = "clock")]
    Clock,
}

/// The logic level of a [`Line`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Level {
    #[display(fmt = "low")]
    Low,
    #[display(fmt = "high")]
    High,
}

impl Default for Level {
    fn default() -> Self {
        Level::Low
    }
}

impl From<bool> for Level {
    fn from(b: bool) -> Self {
        if b {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Trait for pin drivers that can set the level of an output [`Line`].
#[cfg_attr(test, mockall::automock)]
pub trait Gpio {
    /// Drives `line` to `level`.
    fn set_line(&mut self, line: Line, level: Level) -> io::Result<()>;
}

impl<G: Gpio + ?Sized> Gpio for &mut G {
    fn set_line(&mut self, line: Line, level: Level) -> io::Result<()> {
        (**self).set_line(line, level)
    }
}

impl<G: Gpio + ?Sized> Gpio for Box<G> {
    fn set_line(&mut self, line: Line, level: Level) -> io::Result<()> {
        (**self).set_line(line, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use proptest::prelude::*;
    use test_strategy::proptest;

    #[proptest]
    fn level_is_high_for_set_bits(b: bool) {
        assert_eq!(Level::from(b) == Level::High, b);
    }

    #[proptest]
    fn mutable_reference_forwards_to_driver(#[strategy(any::<bool>().prop_map_into())] l: Level) {
        let mut gpio = MockGpio::new();
        gpio.expect_set_line()
            .with(eq(Line::Clock), eq(l))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut by_ref = &mut gpio;
        assert_eq!(Gpio::set_line(&mut by_ref, Line::Clock, l).ok(), Some(()));
    }
}
