pub mod attrs;
pub use attrs::*;

pub mod error;
pub use error::*;
