use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommunityParseError {
    #[error("Empty community string")]
    Empty,

    #[error("Invalid community value: {0}")]
    InvalidCommunity(String),

    #[error("Invalid large community value: {0}")]
    InvalidLargeCommunity(String),

    #[error("Invalid route distinguisher: {0}")]
    InvalidRouteDistinguisher(String),

    #[error("Unknown extended community keyword: {0}")]
    UnknownKeyword(String),

    #[error("Unexpected character '{0}' in extended community")]
    UnexpectedChar(char),

    #[error("Extended community value {0} must follow rt or soo")]
    MissingSubType(String),

    #[error("Extended community keyword {0} without value")]
    MissingValue(String),
}
