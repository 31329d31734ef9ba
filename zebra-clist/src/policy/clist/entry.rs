use std::fmt::Display;

use bgp_community::{Community, ExtCommunity, LargeCommunity};

use super::{ClistError, Style};
use crate::clist_debug;
use crate::policy::{BgpRegex, Direct};

/// Parsed value of an entry. Standard styles carry a community value of
/// their family, expanded styles a compiled pattern.
#[derive(Debug, Clone)]
pub enum EntryPayload {
    CommunityStandard(Community),
    CommunityExpanded(BgpRegex),
    ExtCommunityStandard(ExtCommunity),
    ExtCommunityExpanded(BgpRegex),
    LargeStandard(LargeCommunity),
    LargeExpanded(BgpRegex),
}

fn malformed<E: Display>(style: Style, text: &str, err: E) -> ClistError {
    clist_debug!(%style, text, %err, "community-list value rejected");
    ClistError::MalformedValue
}

impl EntryPayload {
    pub fn parse(style: Style, text: &str) -> Result<Self, ClistError> {
        let payload = match style {
            Style::CommunityStandard => Self::CommunityStandard(
                text.parse().map_err(|e| malformed(style, text, e))?,
            ),
            Style::ExtCommunityStandard => Self::ExtCommunityStandard(
                text.parse().map_err(|e| malformed(style, text, e))?,
            ),
            Style::LargeStandard => {
                Self::LargeStandard(text.parse().map_err(|e| malformed(style, text, e))?)
            }
            Style::CommunityExpanded => Self::CommunityExpanded(
                BgpRegex::new(text).map_err(|e| malformed(style, text, e))?,
            ),
            Style::ExtCommunityExpanded => Self::ExtCommunityExpanded(
                BgpRegex::new(text).map_err(|e| malformed(style, text, e))?,
            ),
            Style::LargeExpanded => {
                Self::LargeExpanded(BgpRegex::new(text).map_err(|e| malformed(style, text, e))?)
            }
        };
        Ok(payload)
    }

    pub fn style(&self) -> Style {
        match self {
            Self::CommunityStandard(_) => Style::CommunityStandard,
            Self::CommunityExpanded(_) => Style::CommunityExpanded,
            Self::ExtCommunityStandard(_) => Style::ExtCommunityStandard,
            Self::ExtCommunityExpanded(_) => Style::ExtCommunityExpanded,
            Self::LargeStandard(_) => Style::LargeStandard,
            Self::LargeExpanded(_) => Style::LargeExpanded,
        }
    }

    pub fn regex(&self) -> Option<&BgpRegex> {
        match self {
            Self::CommunityExpanded(r) | Self::ExtCommunityExpanded(r) | Self::LargeExpanded(r) => {
                Some(r)
            }
            _ => None,
        }
    }

    /// Canonical text: the normalized value for standard styles, the
    /// pattern as written for expanded ones.
    pub fn config(&self) -> String {
        match self {
            Self::CommunityStandard(v) => v.to_string(),
            Self::ExtCommunityStandard(v) => v.to_string(),
            Self::LargeStandard(v) => v.to_string(),
            Self::CommunityExpanded(r) | Self::ExtCommunityExpanded(r) | Self::LargeExpanded(r) => {
                r.as_str().to_string()
            }
        }
    }

    /// Equivalence used for duplicate detection and entry lookup.
    pub fn same_value(&self, other: &EntryPayload) -> bool {
        match (self, other) {
            (Self::CommunityStandard(a), Self::CommunityStandard(b)) => a.is_equal(b),
            (Self::LargeStandard(a), Self::LargeStandard(b)) => a.is_equal(b),
            (Self::ExtCommunityStandard(_), Self::ExtCommunityStandard(_)) => {
                self.config() == other.config()
            }
            _ => match (self.regex(), other.regex()) {
                (Some(a), Some(b)) => self.style() == other.style() && a == b,
                _ => false,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommunityEntry {
    pub direct: Direct,
    pub style: Style,
    /// None makes this an "any" entry that matches every attribute.
    pub payload: Option<EntryPayload>,
    pub config: Option<String>,
}

impl CommunityEntry {
    pub fn new(style: Style, direct: Direct, text: Option<&str>) -> Result<Self, ClistError> {
        let payload = text.map(|t| EntryPayload::parse(style, t)).transpose()?;
        let config = payload.as_ref().map(|p| p.config());
        Ok(Self {
            direct,
            style,
            payload,
            config,
        })
    }

    pub fn any(&self) -> bool {
        self.payload.is_none()
    }

    /// Same style and value, whatever the direct. Unset removes the first
    /// entry this holds for.
    pub fn value_equal(&self, other: &CommunityEntry) -> bool {
        if self.style != other.style {
            return false;
        }
        match (&self.payload, &other.payload) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same_value(b),
            _ => false,
        }
    }

    /// Same style, direct and value. Duplicate set requests are dropped.
    pub fn is_same(&self, other: &CommunityEntry) -> bool {
        self.direct == other.direct && self.value_equal(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_is_canonical() {
        let entry =
            CommunityEntry::new(Style::CommunityStandard, Direct::Permit, Some("100:2 100:1 100:2"))
                .unwrap();
        assert_eq!(entry.config.as_deref(), Some("100:1 100:2"));
        assert!(!entry.any());

        let entry = CommunityEntry::new(
            Style::LargeStandard,
            Direct::Permit,
            Some("65000:1:2   1:2:3"),
        )
        .unwrap();
        assert_eq!(entry.config.as_deref(), Some("1:2:3 65000:1:2"));
    }

    #[test]
    fn expanded_config_verbatim() {
        let entry =
            CommunityEntry::new(Style::CommunityExpanded, Direct::Deny, Some("^100:_")).unwrap();
        assert_eq!(entry.config.as_deref(), Some("^100:_"));
        assert!(entry.payload.as_ref().unwrap().regex().is_some());
    }

    #[test]
    fn any_entry() {
        let entry = CommunityEntry::new(Style::LargeExpanded, Direct::Permit, None).unwrap();
        assert!(entry.any());
        assert!(entry.config.is_none());
    }

    #[test]
    fn malformed_values() {
        let bad = [
            (Style::CommunityStandard, "100:abc"),
            (Style::CommunityStandard, ""),
            (Style::ExtCommunityStandard, "100:200"),
            (Style::LargeStandard, "1:2"),
            (Style::CommunityExpanded, "[100"),
            (Style::LargeExpanded, "("),
        ];
        for (style, text) in bad {
            let res = CommunityEntry::new(style, Direct::Permit, Some(text));
            assert_eq!(res.unwrap_err(), ClistError::MalformedValue, "{text}");
        }
    }

    #[test]
    fn same_entry() {
        let a = CommunityEntry::new(Style::CommunityStandard, Direct::Permit, Some("100:1 100:2"))
            .unwrap();
        let b = CommunityEntry::new(Style::CommunityStandard, Direct::Permit, Some("100:2 100:1"))
            .unwrap();
        let c = CommunityEntry::new(Style::CommunityStandard, Direct::Deny, Some("100:1 100:2"))
            .unwrap();
        let any = CommunityEntry::new(Style::CommunityStandard, Direct::Permit, None).unwrap();
        assert!(a.is_same(&b));
        assert!(!a.is_same(&c));
        assert!(a.value_equal(&c));
        assert!(!a.is_same(&any));
        assert!(any.is_same(&any.clone()));

        let x = CommunityEntry::new(Style::ExtCommunityStandard, Direct::Permit, Some("rt 100:1"))
            .unwrap();
        let y = CommunityEntry::new(Style::ExtCommunityStandard, Direct::Permit, Some("rt:100:1"))
            .unwrap();
        assert!(x.is_same(&y));

        let p = CommunityEntry::new(Style::CommunityExpanded, Direct::Permit, Some("^100")).unwrap();
        let q = CommunityEntry::new(Style::CommunityExpanded, Direct::Permit, Some("^100$")).unwrap();
        assert!(!p.is_same(&q));
        assert!(p.is_same(&p.clone()));
    }
}
