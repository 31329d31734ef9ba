pub mod direct;
pub use direct::Direct;

pub mod regex;
pub use regex::BgpRegex;

pub mod clist;
pub use clist::*;
