pub mod token;

pub mod files;
pub use files::{command_parse, load_config_file};

pub mod configs;
pub use configs::{Args, ConfigOp};

pub mod paths;
pub use paths::{config_path, path_from_command};

pub mod clist;
pub use clist::ClistConfig;
