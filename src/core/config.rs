use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::{Scale, DEFAULT_POLL_INTERVAL, DEFAULT_RESOLUTION, DEFAULT_VREF};

/// The channel the shipped binary polls.
pub const DEFAULT_DEVICE_PATH: &str = "/sys/bus/iio/devices/iio:device0/in_voltage13_raw";

/// Everything needed to instantiate one polled channel: the sysfs path, the
/// transfer-function constants and the poll cadence. Defaults match the
/// shipped binary; supplying other values is how further channels or test
/// doubles get instantiated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub path: PathBuf,
    pub vref: f64,
    pub resolution: u32,
    pub interval_ms: u64,
}

impl Default for ChannelConfig {
    fn default() -> ChannelConfig {
        ChannelConfig {
            path: PathBuf::from(DEFAULT_DEVICE_PATH),
            vref: DEFAULT_VREF,
            resolution: DEFAULT_RESOLUTION,
            interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }
}

impl ChannelConfig {
    pub fn scale(&self) -> Scale {
        Scale::new(self.vref, self.resolution)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
