use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display, EnumString};

#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
pub enum Family {
    #[strum(to_string = "community-list", serialize = "community")]
    Community = 0,
    #[strum(to_string = "extcommunity-list", serialize = "extcommunity")]
    ExtCommunity = 1,
    #[strum(to_string = "large-community-list", serialize = "large-community")]
    LargeCommunity = 2,
}

impl Family {
    pub const ALL: [Family; 3] = [
        Family::Community,
        Family::ExtCommunity,
        Family::LargeCommunity,
    ];

    pub fn show_name(&self) -> &'static str {
        match self {
            Family::Community => "Community",
            Family::ExtCommunity => "Extended Community",
            Family::LargeCommunity => "Large Community",
        }
    }
}

/// Entry style. Each family has one standard and one expanded style.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum Style {
    #[default]
    CommunityStandard = 0,
    CommunityExpanded = 1,
    ExtCommunityStandard = 2,
    ExtCommunityExpanded = 3,
    LargeStandard = 4,
    LargeExpanded = 5,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::CommunityStandard,
        Style::CommunityExpanded,
        Style::ExtCommunityStandard,
        Style::ExtCommunityExpanded,
        Style::LargeStandard,
        Style::LargeExpanded,
    ];

    pub fn new(family: Family, expanded: bool) -> Self {
        match (family, expanded) {
            (Family::Community, false) => Style::CommunityStandard,
            (Family::Community, true) => Style::CommunityExpanded,
            (Family::ExtCommunity, false) => Style::ExtCommunityStandard,
            (Family::ExtCommunity, true) => Style::ExtCommunityExpanded,
            (Family::LargeCommunity, false) => Style::LargeStandard,
            (Family::LargeCommunity, true) => Style::LargeExpanded,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Style::CommunityStandard | Style::CommunityExpanded => Family::Community,
            Style::ExtCommunityStandard | Style::ExtCommunityExpanded => Family::ExtCommunity,
            Style::LargeStandard | Style::LargeExpanded => Family::LargeCommunity,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(
            self,
            Style::CommunityExpanded | Style::ExtCommunityExpanded | Style::LargeExpanded
        )
    }

    pub fn is_standard(&self) -> bool {
        !self.is_expanded()
    }

    pub fn kind(&self) -> &'static str {
        if self.is_expanded() {
            "expanded"
        } else {
            "standard"
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}
