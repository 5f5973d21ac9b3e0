use crate::wire::Frame;
use derive_more::{Display, Error};
use std::ops::RangeInclusive;

/// The reason why constructing an [`Encoder`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "frame width must be between 1 and 64, got {}", _0)]
pub struct InvalidWidth(#[error(not(source))] pub u32);

/// The reason why encoding a value failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "value `{}` does not fit in {} bits", value, width)]
pub struct EncodingOverflow {
    pub value: i64,
    pub width: u32,
}

/// Encodes signed integers into fixed width [`Frame`]s.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Encoder {
    width: u32,
}

impl Encoder {
    /// The frame width expected by the actuator firmware.
    pub const DEFAULT_WIDTH: u32 = 32;

    /// Constructs an [`Encoder`] for frames `width` bits wide.
    pub fn new(width: u32) -> Result<Self, InvalidWidth> {
        if (1..=64).contains(&width) {
            Ok(Encoder { width })
        } else {
            Err(InvalidWidth(width))
        }
    }

    /// The width of the frames produced.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The values representable in [`Self::width`] bits.
    pub fn range(&self) -> RangeInclusive<i64> {
        let half = 1i128 << (self.width - 1);
        (-half as i64)..=((half - 1) as i64)
    }

    /// Encodes `value` in two's complement.
    pub fn encode(&self, value: i64) -> Result<Frame, EncodingOverflow> {
        if !self.range().contains(&value) {
            return Err(EncodingOverflow {
                value,
                width: self.width,
            });
        }

        // Truncating the 64 bit two's complement is the same as adding 2^W to negative values.
        let raw = value as u64;
        Ok((0..self.width).rev().map(|i| raw >> i & 1 == 1).collect())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            width: Self::DEFAULT_WIDTH,
        }
    }
}
