pub mod core;


pub mod prelude {
    pub use crate::core::*;
}
