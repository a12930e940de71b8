use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

use crate::core::{Error, Source};

/// One scripted outcome of an [`EmulatedSource`] fetch.
#[derive(Debug, Clone)]
pub enum EmulatedReading {
    /// The file content the kernel would have exposed, verbatim.
    Content(String),
    /// The device could not be opened at all.
    Offline,
}

/// A scripted stand-in for a sysfs channel, used to test behaviour without a
/// device present. Outcomes are consumed front-to-back; once the script is
/// exhausted every further fetch reads as offline.
///
/// ```rust
/// use iiopoll::prelude::*;
///
/// let source = EmulatedSource::new()
///     .then_value(4096)
///     .then_offline()
///     .then_content("512\n");
///
/// let mut channel = AdcChannel::new(source, Scale::default());
/// assert_eq!(channel.read().unwrap(), RawReading(4096));
/// assert!(channel.read().is_err());
/// assert_eq!(channel.read().unwrap(), RawReading(512));
/// ```
#[derive(Debug, Default)]
pub struct EmulatedSource {
    script: VecDeque<EmulatedReading>,
}

impl EmulatedSource {
    pub fn new() -> EmulatedSource {
        EmulatedSource::default()
    }

    /// Scripts a well-formed reading, newline-terminated as sysfs delivers it.
    pub fn then_value(self, raw: i32) -> EmulatedSource {
        self.then_content(format!("{raw}\n"))
    }

    pub fn then_content(mut self, content: impl Into<String>) -> EmulatedSource {
        self.script.push_back(EmulatedReading::Content(content.into()));
        self
    }

    pub fn then_offline(mut self) -> EmulatedSource {
        self.script.push_back(EmulatedReading::Offline);
        self
    }

    fn offline() -> Error {
        Error::Open {
            path: PathBuf::from("emulated"),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
    }
}

impl Source for EmulatedSource {
    fn fetch(&mut self) -> Result<String, Error> {
        match self.script.pop_front() {
            Some(EmulatedReading::Content(content)) => Ok(content),
            Some(EmulatedReading::Offline) | None => Err(EmulatedSource::offline()),
        }
    }
}
