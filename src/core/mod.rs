pub mod channel;
pub mod config;
pub mod error;
pub mod monitor;
pub mod report;
pub mod scale;
pub mod source;

pub use channel::*;
pub use config::*;
pub use error::*;
pub use monitor::*;
pub use report::*;
pub use scale::*;
pub use source::*;
