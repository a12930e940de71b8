use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use crate::core::{Error, Reason, Sample, Scale, Source};

/// The unconverted integer code reported by the converter. Signed, as IIO
/// exposes differential channels with negative codes.
#[derive(Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Hash, Debug, Default)]
pub struct RawReading(pub i32);

impl From<i32> for RawReading {
    fn from(value: i32) -> Self {
        RawReading(value)
    }
}

impl Deref for RawReading {
    type Target = i32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RawReading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single ADC channel: a backing [`Source`] of integer readings plus the
/// [`Scale`] converting them to volts.
///
/// The channel retains the last good reading. Before the first successful
/// [`AdcChannel::read`] that reading is 0, so [`AdcChannel::voltage`] yields
/// 0.0 — indistinguishable from a genuine zero reading.
///
/// ```rust
/// use iiopoll::prelude::*;
///
/// let source = EmulatedSource::new().then_value(32767);
/// let mut channel = AdcChannel::new(source, Scale::default());
///
/// assert_eq!(channel.voltage(), 0.0);
/// channel.read().expect("scripted reading");
/// assert!((channel.voltage() - 1.65).abs() < 1e-4);
/// ```
///
/// A failed read, whether the source could not be opened or its content was
/// not a decimal integer, leaves the retained reading untouched.
pub struct AdcChannel<S>
where
    S: Source,
{
    source: S,
    scale: Scale,
    reading: RawReading,
}

impl<S> AdcChannel<S>
where
    S: Source,
{
    /// Performs no I/O; the source is first touched by [`AdcChannel::read`].
    pub fn new(source: S, scale: Scale) -> AdcChannel<S> {
        AdcChannel {
            source,
            scale,
            reading: RawReading::default(),
        }
    }

    /// Fetches one reading from the source and retains it.
    ///
    /// The first whitespace-delimited token of the content must be an
    /// ASCII-decimal integer. Empty or malformed content is an
    /// [`Error::InvalidReading`]; the previous reading stays in place.
    pub fn read(&mut self) -> Result<RawReading, Error> {
        let content = self.source.fetch()?;

        let token = content.split_whitespace().next().ok_or(Reason::Empty)?;
        let raw = token
            .parse::<i32>()
            .map_err(|_| Reason::NotDecimal(token.to_owned()))?;

        self.reading = RawReading(raw);
        debug!("Retained reading {raw}");

        Ok(self.reading)
    }

    /// The last retained reading converted to volts. Pure; no I/O.
    pub fn voltage(&self) -> f64 {
        self.scale.to_volts(self.reading)
    }

    /// The last retained reading.
    pub fn raw_value(&self) -> RawReading {
        self.reading
    }

    /// One poll: [`AdcChannel::read`] plus the voltage conversion.
    pub fn sample(&mut self) -> Result<Sample, Error> {
        let raw = self.read()?;

        Ok(Sample {
            raw,
            volts: self.voltage(),
        })
    }
}
