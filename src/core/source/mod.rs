pub mod emulated;
pub mod sysfs;

pub use emulated::*;
pub use sysfs::*;

use crate::core::Error;

/// Where a channel's backing content comes from.
///
/// The real implementation is [`SysfsSource`]; [`EmulatedSource`] allows
/// behaviour to be exercised without a device present.
pub trait Source {
    /// Acquires the backing content for one reading. The acquisition is
    /// scoped: any handle involved is released before this returns, on every
    /// exit path.
    fn fetch(&mut self) -> Result<String, Error>;
}
