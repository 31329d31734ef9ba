pub mod logging;

pub mod error;
pub use error::*;

pub mod style;
pub use style::*;

pub mod entry;
pub use entry::*;

pub mod attr;
pub use attr::*;

pub mod list;
pub use list::*;

pub mod master;
pub use master::*;

pub mod handler;
pub use handler::*;

pub mod matcher;

pub mod show;
pub use show::*;
