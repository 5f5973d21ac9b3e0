use crate::plan::MAX_ACTIONS_PER_MOVE;
use crate::wire::{Encoder, InvalidWidth};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing and framing parameters shared with the actuator firmware.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Protocol {
    /// How long each clock level is held.
    #[serde(with = "humantime_serde")]
    pub pulse: Duration,

    /// The width of each frame in bits.
    pub width: u32,
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol {
            pulse: Duration::from_millis(50),
            width: Encoder::DEFAULT_WIDTH,
        }
    }
}

impl Protocol {
    /// An [`Encoder`] for frames of [`Self::width`].
    pub fn encoder(&self) -> Result<Encoder, InvalidWidth> {
        Encoder::new(self.width)
    }

    /// How long transmitting a single command takes, saturating at [`Duration::MAX`].
    pub fn command_duration(&self) -> Duration {
        self.pulse.saturating_mul(4).saturating_mul(self.width)
    }

    /// An upper bound on how long dispatching the actions of a single chess move takes.
    pub fn budget(&self) -> Duration {
        self.command_duration()
            .saturating_mul(MAX_ACTIONS_PER_MOVE as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_protocol_matches_firmware() {
        let p = Protocol::default();
        assert_eq!(p.pulse, Duration::from_millis(50));
        assert_eq!(p.width, 32);
        assert_eq!(p.encoder(), Ok(Encoder::default()));
    }

    #[test]
    fn command_takes_four_pulses_per_bit_pair() {
        let p = Protocol::default();
        assert_eq!(p.command_duration(), Duration::from_millis(6400));
        assert_eq!(p.budget(), Duration::from_millis(25600));
    }

    #[test]
    fn budget_saturates_instead_of_overflowing() {
        let p = Protocol {
            pulse: Duration::MAX / 2,
            width: 64,
        };

        assert_eq!(p.command_duration(), Duration::MAX);
        assert_eq!(p.budget(), Duration::MAX);
    }

    #[test]
    fn protocol_is_deserializable() {
        assert_eq!(
            ron::de::from_str("(pulse: \"5ms\", width: 16)"),
            Ok(Protocol {
                pulse: Duration::from_millis(5),
                width: 16,
            })
        );

        assert_eq!(ron::de::from_str("()"), Ok(Protocol::default()));
    }

    #[test]
    fn protocol_rejects_unknown_fields() {
        assert!(ron::de::from_str::<Protocol>("(baud: 9600)").is_err());
    }

    #[test]
    fn invalid_width_is_reported_by_encoder() {
        let p = Protocol {
            width: 0,
            ..Protocol::default()
        };

        assert_eq!(p.encoder(), Err(InvalidWidth(0)));
    }
}
