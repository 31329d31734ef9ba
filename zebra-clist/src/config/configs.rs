use std::collections::VecDeque;

use strum_macros::{Display, EnumString};

use crate::policy::Direct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, Display)]
pub enum ConfigOp {
    #[strum(serialize = "set")]
    Set,
    #[strum(serialize = "delete")]
    Delete,
}

#[derive(Debug, Default)]
pub struct Args(pub VecDeque<String>);

macro_rules! arg_parse_type {
    ($self:expr, $typ:ty) => {
        let item = $self.0.pop_front()?;
        match item.parse::<$typ>() {
            Ok(arg) => {
                return Some(arg);
            }
            Err(_) => {
                $self.0.push_front(item);
                return None;
            }
        }
    };
}

impl Args {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn string(&mut self) -> Option<String> {
        self.0.pop_front()
    }

    pub fn direct(&mut self) -> Option<Direct> {
        arg_parse_type!(self, Direct);
    }

    /// Remaining words joined by a single space.
    pub fn rest(&mut self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.drain(..).collect::<Vec<_>>().join(" "))
    }
}

impl From<Vec<String>> for Args {
    fn from(v: Vec<String>) -> Self {
        Args(v.into())
    }
}
