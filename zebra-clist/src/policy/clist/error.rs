use num_enum::{IntoPrimitive, TryFromPrimitive};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClistError {
    #[error("Can't find community-list")]
    NotFound,
    #[error("Malformed community-list value")]
    MalformedValue,
    #[error("Community name conflict, previously defined as standard community")]
    StandardConflict,
    #[error("Community name conflict, previously defined as expanded community")]
    ExpandedConflict,
}

impl ClistError {
    pub fn code(&self) -> i32 {
        ClistStatus::from(*self).into()
    }
}

/// Numeric result of set and unset. Values are stable.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
pub enum ClistStatus {
    Ok = 0,
    NotFound = -1,
    MalformedValue = -2,
    StandardConflict = -3,
    ExpandedConflict = -4,
}

impl From<ClistError> for ClistStatus {
    fn from(err: ClistError) -> Self {
        match err {
            ClistError::NotFound => ClistStatus::NotFound,
            ClistError::MalformedValue => ClistStatus::MalformedValue,
            ClistError::StandardConflict => ClistStatus::StandardConflict,
            ClistError::ExpandedConflict => ClistStatus::ExpandedConflict,
        }
    }
}

impl<T> From<&Result<T, ClistError>> for ClistStatus {
    fn from(res: &Result<T, ClistError>) -> Self {
        match res {
            Ok(_) => ClistStatus::Ok,
            Err(err) => (*err).into(),
        }
    }
}
