pub mod com;
pub use com::*;

pub mod ext_com;
pub use ext_com::*;
pub mod ext_com_token;

pub mod ext_com_type;
pub use ext_com_type::*;

pub mod large_com;
pub use large_com::*;

pub mod rd;
pub use rd::*;
