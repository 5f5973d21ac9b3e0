use crate::wire::{Gpio, Level, Line};
use derive_more::DebugCustom;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// A pin driver based on the Linux [sysfs GPIO interface].
///
/// The pins must have already been exported and configured as outputs.
///
/// [sysfs GPIO interface]: https://www.kernel.org/doc/Documentation/gpio/sysfs.txt
#[derive(DebugCustom)]
#[debug(fmt = "Sysfs({})", "root.display()")]
pub struct Sysfs {
    root: PathBuf,
    data: File,
    clock: File,
}

impl Sysfs {
    /// Opens the value files of the `data` and `clock` pins under `root`.
    #[instrument(level = "trace", err)]
    pub fn open(root: &Path, data: u32, clock: u32) -> io::Result<Self> {
        let open = |pin: u32| {
            OpenOptions::new()
                .write(true)
                .open(root.join(format!("gpio{}", pin)).join("value"))
        };

        Ok(Sysfs {
            root: root.to_path_buf(),
            data: open(data)?,
            clock: open(clock)?,
        })
    }
}

impl Gpio for Sysfs {
    fn set_line(&mut self, line: Line, level: Level) -> io::Result<()> {
        let file = match line {
            Line::Data => &mut self.data,
            Line::Clock => &mut self.clock,
        };

        file.seek(SeekFrom::Start(0))?;
        file.write_all(match level {
            Level::High => b"1",
            Level::Low => b"0",
        })?;

        file.flush()
    }
}
