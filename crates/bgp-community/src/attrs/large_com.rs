use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::CommunityParseError;

/// BGP Large Community attribute (RFC 8092).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LargeCommunity(pub Vec<LargeCommunityValue>);

impl LargeCommunity {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, value: LargeCommunityValue) {
        self.0.push(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LargeCommunityValue> {
        self.0.iter()
    }

    pub fn sort_uniq(&mut self) {
        let coms: BTreeSet<LargeCommunityValue> = self.0.iter().cloned().collect();
        self.0 = coms.into_iter().collect();
    }

    pub fn contains(&self, val: &LargeCommunityValue) -> bool {
        self.0.contains(val)
    }

    /// True when every value of `other` is present in `self`.
    pub fn is_match(&self, other: &LargeCommunity) -> bool {
        self.len() >= other.len() && other.iter().all(|x| self.contains(x))
    }

    /// Set equality, independent of value order.
    pub fn is_equal(&self, other: &LargeCommunity) -> bool {
        let lhs: BTreeSet<&LargeCommunityValue> = self.iter().collect();
        let rhs: BTreeSet<&LargeCommunityValue> = other.iter().collect();
        lhs == rhs
    }

    /// Remove the value at `index`, shifting the later values down.
    pub fn remove(&mut self, index: usize) -> Option<LargeCommunityValue> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn value_str(&self, index: usize) -> Option<String> {
        self.0.get(index).map(|x| x.to_str())
    }
}

impl fmt::Display for LargeCommunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = self.iter().map(|x| x.to_str()).join(" ");
        write!(f, "{val}")
    }
}

impl FromStr for LargeCommunity {
    type Err = CommunityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let com_strs: Vec<&str> = s.split_whitespace().collect();
        if com_strs.is_empty() {
            return Err(CommunityParseError::Empty);
        }

        let mut coms = LargeCommunity::new();
        for s in com_strs.iter() {
            coms.push(LargeCommunityValue::from_str(s)?);
        }
        coms.sort_uniq();
        Ok(coms)
    }
}

#[derive(Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LargeCommunityValue {
    pub global: u32,
    pub local1: u32,
    pub local2: u32,
}

impl LargeCommunityValue {
    pub fn new(global: u32, local1: u32, local2: u32) -> Self {
        Self {
            global,
            local1,
            local2,
        }
    }

    pub fn to_str(&self) -> String {
        format!("{}:{}:{}", self.global, self.local1, self.local2)
    }
}

impl fmt::Display for LargeCommunityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LargeCommunityValue {
    type Err = CommunityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let com_strs: Vec<&str> = s.split(':').collect();
        if com_strs.len() == 3
            && let Ok(global) = com_strs[0].parse::<u32>()
            && let Ok(local1) = com_strs[1].parse::<u32>()
            && let Ok(local2) = com_strs[2].parse::<u32>()
        {
            return Ok(Self::new(global, local1, local2));
        }
        Err(CommunityParseError::InvalidLargeCommunity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        let com = LargeCommunity::from_str("65538:655900:14560 100:102:103").unwrap();
        assert_eq!(format!("{}", com), "100:102:103 65538:655900:14560");

        let com = LargeCommunity::from_str("65538:655900 100:102:103");
        assert_eq!(
            com,
            Err(CommunityParseError::InvalidLargeCommunity(
                "65538:655900".to_string()
            ))
        );

        let com = LargeCommunity::from_str("  1:2:3   1:2:3 ").unwrap();
        assert_eq!(com.len(), 1);

        assert!(LargeCommunity::from_str("").is_err());
        assert!(LargeCommunity::from_str("1:2:4294967296").is_err());
    }

    #[test]
    fn remove() {
        let mut com = LargeCommunity::from_str("1:1:1 2:2:2 3:3:3").unwrap();
        assert_eq!(com.remove(1), Some(LargeCommunityValue::new(2, 2, 2)));
        assert_eq!(com.to_string(), "1:1:1 3:3:3");
        assert_eq!(com.remove(5), None);
    }

    #[test]
    fn is_match() {
        let attr = LargeCommunity::from_str("1:1:1 2:2:2 3:3:3").unwrap();
        let sub = LargeCommunity::from_str("3:3:3 1:1:1").unwrap();
        assert!(attr.is_match(&sub));
        assert!(!sub.is_match(&attr));
        assert!(attr.is_equal(&LargeCommunity(vec![
            LargeCommunityValue::new(3, 3, 3),
            LargeCommunityValue::new(2, 2, 2),
            LargeCommunityValue::new(1, 1, 1),
        ])));
    }
}
