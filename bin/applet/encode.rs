use crate::config::Config;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::wire::Encoder;
use tracing::instrument;

/// Prints the frame an integer is transmitted as.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Encode {
    /// The frame width in bits, overrides the configured one.
    #[clap(short, long)]
    width: Option<u32>,

    /// The value to encode.
    #[clap(allow_hyphen_values = true)]
    value: i64,
}

impl Encode {
    #[instrument(level = "trace", skip(self, config), err)]
    pub fn execute(self, config: &Config) -> Result<(), Anyhow> {
        let encoder = Encoder::new(self.width.unwrap_or(config.protocol.width))?;
        println!("{}", encoder.encode(self.value)?);
        Ok(())
    }
}
