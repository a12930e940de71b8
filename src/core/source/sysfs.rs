use std::fs;
use std::path::PathBuf;

use crate::core::{Error, Source};

/// An IIO channel exposed by the kernel as a sysfs pseudo-file holding one
/// ASCII-decimal integer, e.g. `/sys/bus/iio/devices/iio:device0/in_voltage13_raw`.
pub struct SysfsSource {
    path: PathBuf,
}

impl SysfsSource {
    pub fn new(path: impl Into<PathBuf>) -> SysfsSource {
        SysfsSource { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Source for SysfsSource {
    fn fetch(&mut self) -> Result<String, Error> {
        // Open, consume and close within the one call, so no descriptor
        // survives an iteration even when the driver vanishes mid-poll.
        fs::read_to_string(&self.path).map_err(|source| Error::Open {
            path: self.path.clone(),
            source,
        })
    }
}
