use bitvec::prelude::{BitSlice, BitVec, Msb0};
use derive_more::{Constructor, Display};
use std::fmt;

/// A fixed width two's complement integer, most significant bit first.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Frame(BitVec<u64, Msb0>);

impl Frame {
    /// How many bits this frame contains.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// The bits in transmission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().by_vals()
    }

    /// The signed integer this frame encodes.
    pub fn value(&self) -> i64 {
        let raw = self.bits().fold(0u64, |acc, b| acc << 1 | u64::from(b));

        match self.width() {
            w @ 1..=63 if self.0[0] => (raw | (u64::MAX << w)) as i64,
            _ => raw as i64,
        }
    }
}

impl From<&BitSlice<u64, Msb0>> for Frame {
    fn from(bits: &BitSlice<u64, Msb0>) -> Self {
        Frame(bits.to_bitvec())
    }
}

impl FromIterator<bool> for Frame {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Frame(iter.into_iter().collect())
    }
}

/// Prints the frame as a string of `0`s and `1`s.
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bits() {
            f.write_str(if b { "1" } else { "0" })?;
        }

        Ok(())
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self)
    }
}

/// The atomic unit sent to the actuator: a pair of coordinates.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Constructor)]
#[display(fmt = "{}{}", _0, _1)]
pub struct CommandFrame(pub Frame, pub Frame);

impl CommandFrame {
    /// The coordinate the piece is picked up from.
    pub fn whence(&self) -> &Frame {
        &self.0
    }

    /// The coordinate the piece is put down at.
    pub fn whither(&self) -> &Frame {
        &self.1
    }

    /// How many bits this command contains.
    pub fn width(&self) -> usize {
        self.0.width() + self.1.width()
    }

    /// The bits in transmission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bits().chain(self.1.bits())
    }

    /// The pair of signed coordinates this command encodes.
    pub fn values(&self) -> (i64, i64) {
        (self.0.value(), self.1.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{collection::vec, prelude::*};
    use test_strategy::proptest;

    #[proptest]
    fn frame_is_printed_one_character_per_bit(
        #[strategy(vec(any::<bool>(), 1..=64))] bits: Vec<bool>,
    ) {
        let frame: Frame = bits.iter().copied().collect();
        let s = frame.to_string();
        assert_eq!(s.len(), bits.len());
        assert!(s.chars().all(|c| c == '0' || c == '1'));
    }

    #[proptest]
    fn frame_value_is_sign_extended(#[strategy(1..64usize)] w: usize) {
        let ones: Frame = std::iter::repeat(true).take(w).collect();
        assert_eq!(ones.value(), -1);
    }

    #[test]
    fn frame_value_is_read_most_significant_bit_first() {
        let frame: Frame = [false, true, true, false, false].into_iter().collect();
        assert_eq!(frame.value(), 12);
        assert_eq!(frame.to_string(), "01100");
    }

    #[test]
    fn full_width_frame_is_not_sign_extended() {
        let frame: Frame = std::iter::once(true)
            .chain(std::iter::repeat(false).take(63))
            .collect();

        assert_eq!(frame.value(), i64::MIN);
    }

    #[proptest]
    fn command_frame_concatenates_both_frames(a: Vec<bool>, b: Vec<bool>) {
        let cmd = CommandFrame::new(a.iter().copied().collect(), b.iter().copied().collect());
        assert_eq!(cmd.width(), a.len() + b.len());
        assert_eq!(cmd.bits().collect::<Vec<_>>(), [a, b].concat());
        assert_eq!(cmd.to_string(), [cmd.whence().to_string(), cmd.whither().to_string()].concat());
    }
}
