use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Permit or deny tag of a community-list entry. The integer values are
/// shared with callers and stay stable.
#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direct {
    #[strum(serialize = "deny")]
    Deny = 0,
    #[strum(serialize = "permit")]
    Permit = 1,
}

impl Direct {
    pub fn is_permit(&self) -> bool {
        *self == Direct::Permit
    }
}
