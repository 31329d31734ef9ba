use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::CommunityParseError;

/// BGP Community attribute (RFC 1997).
///
/// Values built from text are kept sorted and unique. Values pushed one by
/// one keep the order they were pushed in until `sort_uniq()` is called.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Community(pub Vec<u32>);

impl Community {
    pub fn new() -> Self {
        Community(Vec::<u32>::new())
    }

    pub fn push(&mut self, value: u32) {
        self.0.push(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.0.iter()
    }

    pub fn sort_uniq(&mut self) {
        let coms: BTreeSet<u32> = self.0.iter().cloned().collect();
        self.0 = coms.into_iter().collect();
    }

    pub fn contains(&self, val: &u32) -> bool {
        self.0.contains(val)
    }

    pub fn append(&mut self, other: &mut Self) {
        self.0.append(&mut other.0);
        self.sort_uniq();
    }

    pub fn is_internet(&self) -> bool {
        self.contains(&CommunityValue::INTERNET.value())
    }

    pub fn is_no_export(&self) -> bool {
        self.contains(&CommunityValue::NO_EXPORT.value())
    }

    /// True when every value of `other` is present in `self`.
    pub fn is_match(&self, other: &Community) -> bool {
        self.len() >= other.len() && other.iter().all(|x| self.contains(x))
    }

    /// Set equality, independent of value order.
    pub fn is_equal(&self, other: &Community) -> bool {
        let lhs: BTreeSet<&u32> = self.iter().collect();
        let rhs: BTreeSet<&u32> = other.iter().collect();
        lhs == rhs
    }

    /// Remove every occurrence of `val`.
    pub fn del_val(&mut self, val: &u32) {
        self.0.retain(|x| x != val);
    }

    /// Remove the value at `index`, shifting the later values down.
    pub fn remove(&mut self, index: usize) -> Option<u32> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    /// Text form of the value at `index`.
    pub fn value_str(&self, index: usize) -> Option<String> {
        self.0.get(index).map(|x| CommunityValue(*x).to_str())
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.iter().map(|x| CommunityValue(*x).to_str()).join(" ");
        write!(f, "{v}")
    }
}

impl FromStr for Community {
    type Err = CommunityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let com_strs: Vec<&str> = s.split_whitespace().collect();
        if com_strs.is_empty() {
            return Err(CommunityParseError::Empty);
        }

        let mut coms = Community::new();
        for s in com_strs.iter() {
            let c = CommunityValue::from_readable_str(s)
                .ok_or_else(|| CommunityParseError::InvalidCommunity(s.to_string()))?;
            coms.push(c.value());
        }
        coms.sort_uniq();
        Ok(coms)
    }
}

/// BGP Community 32 bit value.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct CommunityValue(pub u32);

// Reserved values with a symbolic text form.
const WELLKNOWN: [(CommunityValue, &str); 4] = [
    (CommunityValue::INTERNET, "internet"),
    (CommunityValue::NO_EXPORT, "no-export"),
    (CommunityValue::NO_ADVERTISE, "no-advertise"),
    (CommunityValue::LOCAL_AS, "local-AS"),
];

impl CommunityValue {
    pub const INTERNET: Self = CommunityValue(0x0000_0000);
    pub const NO_EXPORT: Self = CommunityValue(0xFFFF_FF01);
    pub const NO_ADVERTISE: Self = CommunityValue(0xFFFF_FF02);
    pub const LOCAL_AS: Self = CommunityValue(0xFFFF_FF03);

    pub fn from_wellknown_str(s: &str) -> Option<Self> {
        WELLKNOWN
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(val, _)| *val)
    }

    fn from_digit_str(s: &str) -> Option<Self> {
        let com_strs: Vec<&str> = s.split(':').collect();
        match com_strs.len() {
            // ASN:NN format.
            2 => {
                if let Ok(hval) = com_strs[0].parse::<u16>()
                    && let Ok(lval) = com_strs[1].parse::<u16>()
                {
                    return Some(Self(u32::from(hval) << 16 | u32::from(lval)));
                }
                None
            }
            // NN format.
            1 => com_strs[0].parse::<u32>().ok().map(Self),
            _ => None,
        }
    }

    pub fn from_readable_str(s: &str) -> Option<Self> {
        Self::from_wellknown_str(s).or_else(|| Self::from_digit_str(s))
    }

    pub fn to_wellknown_str(&self) -> Option<&'static str> {
        WELLKNOWN
            .iter()
            .find(|(val, _)| val == self)
            .map(|(_, name)| *name)
    }

    pub fn to_digit_str(&self) -> String {
        let hval: u32 = (self.0 & 0xFFFF_0000) >> 16;
        let lval: u32 = self.0 & 0x0000_FFFF;
        format!("{}:{}", hval, lval)
    }

    /// Either the symbolic name of a reserved value or `AS:VAL`.
    pub fn to_str(&self) -> String {
        if let Some(s) = self.to_wellknown_str() {
            s.to_string()
        } else {
            self.to_digit_str()
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CommunityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push() {
        let mut com = Community::new();
        com.push(1u32);
        com.push(2u32);
        com.push(3u32);
        assert_eq!(format!("{}", com), "0:1 0:2 0:3");

        let mut com = Community::new();
        com.push(1u32);
        com.push(CommunityValue::NO_ADVERTISE.value());
        com.push(0u32);
        assert_eq!(format!("{}", com), "0:1 no-advertise internet");
    }

    #[test]
    fn from_str() {
        let com = Community::from_str("no-export 100:10 100").unwrap();
        assert_eq!(format!("{}", com), "0:100 100:10 no-export");

        let com = Community::from_str("100:10 local-AS 100").unwrap();
        assert_eq!(format!("{}", com), "0:100 100:10 local-AS");

        let com = Community::from_str("internet 100:10").unwrap();
        assert_eq!(format!("{}", com), "internet 100:10");

        let com = Community::from_str("4294967295 100:10").unwrap();
        assert_eq!(format!("{}", com), "100:10 65535:65535");

        let com = Community::from_str("4294967296 no-export 100:10");
        assert!(com.is_err());

        let com = Community::from_str("graceful-shutdown 100:10");
        assert_eq!(
            com,
            Err(CommunityParseError::InvalidCommunity(
                "graceful-shutdown".to_string()
            ))
        );

        let com = Community::from_str("");
        assert_eq!(com, Err(CommunityParseError::Empty));

        let com = Community::from_str("   ");
        assert_eq!(com, Err(CommunityParseError::Empty));

        assert!(Community::from_str("-1").is_err());
        assert!(Community::from_str("10+").is_err());
        assert!(Community::from_str("100:test").is_err());
        assert!(Community::from_str("1:2:3").is_err());
        assert!(Community::from_str("65535:65536").is_err());
        assert!(Community::from_str("65536:65535").is_err());

        let com = Community::from_str("65536").unwrap();
        assert_eq!(format!("{}", com), "1:0");
    }

    #[test]
    fn contains() {
        let com = Community::from_str("no-export 100:10 100").unwrap();
        assert!(com.contains(&100u32));
        assert!(com.contains(&CommunityValue::NO_EXPORT.value()));
        assert!(!com.contains(&CommunityValue::NO_ADVERTISE.value()));

        let val = CommunityValue::from_digit_str("100:10").unwrap();
        assert!(com.contains(&val.0));
    }

    #[test]
    fn is_match() {
        let attr = Community::from_str("100:1 100:2 100:3").unwrap();
        let sub = Community::from_str("100:3 100:1").unwrap();
        let other = Community::from_str("100:1 100:4").unwrap();

        assert!(attr.is_match(&sub));
        assert!(!attr.is_match(&other));
        assert!(!sub.is_match(&attr));
        assert!(attr.is_match(&Community::new()));
    }

    #[test]
    fn is_equal() {
        let lhs = Community(vec![3, 1, 2]);
        let rhs = Community::from_str("0:1 0:2 0:3").unwrap();
        assert!(lhs.is_equal(&rhs));

        let rhs = Community::from_str("0:1 0:2").unwrap();
        assert!(!lhs.is_equal(&rhs));
    }

    #[test]
    fn del_val() {
        let mut com = Community::from_str("100:1 100:2 100:3").unwrap();
        com.del_val(&CommunityValue::from_readable_str("100:2").unwrap().value());
        assert_eq!(com.to_string(), "100:1 100:3");

        com.del_val(&12345);
        assert_eq!(com.len(), 2);
    }

    #[test]
    fn value_str() {
        let com = Community::from_str("internet 100:1").unwrap();
        assert_eq!(com.value_str(0), Some("internet".to_string()));
        assert_eq!(com.value_str(1), Some("100:1".to_string()));
        assert_eq!(com.value_str(2), None);
    }

    #[test]
    fn sort_uniq() {
        let mut com = Community(vec![
            CommunityValue::NO_EXPORT.value(),
            (100 << 16) + 10,
            CommunityValue::NO_EXPORT.value(),
            100,
        ]);
        com.sort_uniq();
        assert_eq!(format!("{}", com), "0:100 100:10 no-export");
    }

    #[test]
    fn value_from_str() {
        let com = CommunityValue::from_readable_str("no-export").unwrap();
        assert_eq!(com, CommunityValue::NO_EXPORT);

        let com = CommunityValue::from_readable_str("internet").unwrap();
        assert_eq!(com, CommunityValue::INTERNET);

        let com = CommunityValue::from_readable_str("100:10").unwrap();
        assert_eq!(com.value(), (100 << 16) + 10);

        let com = CommunityValue::from_readable_str("6553620").unwrap();
        assert_eq!(com.value(), (100 << 16) + 20);
    }

    #[test]
    fn append() {
        let mut com = Community::from_str("100:10 100:20").unwrap();
        let mut other = Community::from_str("100:30 100:20").unwrap();

        com.append(&mut other);
        assert_eq!(format!("{}", com), "100:10 100:20 100:30");
    }
}
