use derive_more::{Display, Error, From};
use lib::dispatch::{Layout, Protocol};
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, str::FromStr};

/// The reason why parsing the configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

/// Which pin driver to use.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum GpioConfig {
    /// Drive the pins through the Linux sysfs interface.
    Sysfs {
        #[serde(default = "GpioConfig::default_root")]
        root: PathBuf,
        #[serde(default = "GpioConfig::default_data")]
        data: u32,
        #[serde(default = "GpioConfig::default_clock")]
        clock: u32,
    },

    /// Dry run against a simulated receiver.
    Probe,
}

impl GpioConfig {
    fn default_root() -> PathBuf {
        "/sys/class/gpio".into()
    }

    fn default_data() -> u32 {
        22
    }

    fn default_clock() -> u32 {
        27
    }
}

impl Default for GpioConfig {
    fn default() -> Self {
        GpioConfig::Probe
    }
}

/// Runtime configuration for the actuator.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub gpio: GpioConfig,
    pub protocol: Protocol,
    pub layout: Layout,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
