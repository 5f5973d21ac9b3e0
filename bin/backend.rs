use crate::config::GpioConfig;
use derive_more::From;
use lib::wire::{Gpio, Level, Line, Probe, Sysfs};
use std::io;

/// The pin driver selected by the configuration.
#[derive(Debug, From)]
pub enum Backend {
    Sysfs(Sysfs),
    Probe(Probe),
}

impl Backend {
    /// Opens the pin driver described by a [`GpioConfig`].
    pub fn open(config: &GpioConfig) -> io::Result<Self> {
        match config {
            GpioConfig::Sysfs { root, data, clock } => Ok(Sysfs::open(root, *data, *clock)?.into()),
            GpioConfig::Probe => Ok(Probe::new().into()),
        }
    }

    /// The simulated receiver, if this is a dry run.
    pub fn probe(&self) -> Option<&Probe> {
        match self {
            Backend::Probe(p) => Some(p),
            Backend::Sysfs(_) => None,
        }
    }
}

impl Gpio for Backend {
    fn set_line(&mut self, line: Line, level: Level) -> io::Result<()> {
        match self {
            Backend::Sysfs(g) => g.set_line(line, level),
            Backend::Probe(g) => g.set_line(line, level),
        }
    }
}
