use std::fmt::Display;

use bgp_community::{
    Community, CommunityValue, ExtCommunity, ExtCommunityValue, LargeCommunity,
    LargeCommunityValue,
};

use super::{EntryPayload, Family};

/// Route attribute a community-list can be evaluated against.
pub trait ClistAttr: Display {
    type Value;

    const FAMILY: Family;

    /// Standard payload of this family held by an entry.
    fn standard(payload: &EntryPayload) -> Option<&Self>;

    fn values(&self) -> &[Self::Value];

    /// Every value of `other` is present in `self`.
    fn attr_match(&self, other: &Self) -> bool;

    fn attr_equal(&self, other: &Self) -> bool;

    fn contains_value(&self, value: &Self::Value) -> bool;

    fn value_text(value: &Self::Value) -> String;

    /// Standard payload that matches any attribute of the family.
    fn is_wildcard(&self) -> bool {
        false
    }
}

/// Attributes that support removing the values a list permits.
pub trait DeleteAttr: ClistAttr {
    fn delete_index(&mut self, index: usize);
}

impl ClistAttr for Community {
    type Value = u32;

    const FAMILY: Family = Family::Community;

    fn standard(payload: &EntryPayload) -> Option<&Self> {
        match payload {
            EntryPayload::CommunityStandard(com) => Some(com),
            _ => None,
        }
    }

    fn values(&self) -> &[u32] {
        &self.0
    }

    fn attr_match(&self, other: &Self) -> bool {
        self.is_match(other)
    }

    fn attr_equal(&self, other: &Self) -> bool {
        self.is_equal(other)
    }

    fn contains_value(&self, value: &u32) -> bool {
        self.contains(value)
    }

    fn value_text(value: &u32) -> String {
        CommunityValue(*value).to_str()
    }

    fn is_wildcard(&self) -> bool {
        self.is_internet()
    }
}

impl DeleteAttr for Community {
    fn delete_index(&mut self, index: usize) {
        self.remove(index);
    }
}

impl ClistAttr for ExtCommunity {
    type Value = ExtCommunityValue;

    const FAMILY: Family = Family::ExtCommunity;

    fn standard(payload: &EntryPayload) -> Option<&Self> {
        match payload {
            EntryPayload::ExtCommunityStandard(ecom) => Some(ecom),
            _ => None,
        }
    }

    fn values(&self) -> &[ExtCommunityValue] {
        &self.0
    }

    fn attr_match(&self, other: &Self) -> bool {
        self.is_match(other)
    }

    fn attr_equal(&self, other: &Self) -> bool {
        self.is_equal(other)
    }

    fn contains_value(&self, value: &ExtCommunityValue) -> bool {
        self.contains(value)
    }

    fn value_text(value: &ExtCommunityValue) -> String {
        value.to_string()
    }
}

impl ClistAttr for LargeCommunity {
    type Value = LargeCommunityValue;

    const FAMILY: Family = Family::LargeCommunity;

    fn standard(payload: &EntryPayload) -> Option<&Self> {
        match payload {
            EntryPayload::LargeStandard(lcom) => Some(lcom),
            _ => None,
        }
    }

    fn values(&self) -> &[LargeCommunityValue] {
        &self.0
    }

    fn attr_match(&self, other: &Self) -> bool {
        self.is_match(other)
    }

    fn attr_equal(&self, other: &Self) -> bool {
        self.is_equal(other)
    }

    fn contains_value(&self, value: &LargeCommunityValue) -> bool {
        self.contains(value)
    }

    fn value_text(value: &LargeCommunityValue) -> String {
        value.to_str()
    }
}

impl DeleteAttr for LargeCommunity {
    fn delete_index(&mut self, index: usize) {
        self.remove(index);
    }
}
