use std::collections::BTreeSet;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use itertools::Itertools;

use crate::{
    CommunityParseError, ExtCommunitySubType, ExtCommunityType, RouteDistinguisher,
    RouteDistinguisherType, TunnelType,
};

use super::ext_com_token::{Token, tokenizer};

/// BGP Extended Community attribute (RFC 4360).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExtCommunity(pub Vec<ExtCommunityValue>);

/// Field order follows the wire layout so that the derived `Ord` sorts the
/// same way as comparing the 8 encoded bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtCommunityValue {
    pub high_type: u8,
    pub low_type: u8,
    pub val: [u8; 6],
}

impl ExtCommunityValue {
    pub fn new(high_type: u8, low_type: u8, val: [u8; 6]) -> Self {
        Self {
            high_type,
            low_type,
            val,
        }
    }

    pub fn to_bytes(&self) -> [u8; 8] {
        let mut buf = [0u8; 8];
        buf[0] = self.high_type;
        buf[1] = self.low_type;
        buf[2..].copy_from_slice(&self.val);
        buf
    }
}

impl fmt::Display for ExtCommunityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ExtCommunityType::*;
        let sub_type = ExtCommunitySubType::display(self.low_type);
        match ExtCommunityType::try_from(self.high_type) {
            Ok(TransTwoOctetAS) => {
                let asn = u16::from_be_bytes([self.val[0], self.val[1]]);
                let val = u32::from_be_bytes([self.val[2], self.val[3], self.val[4], self.val[5]]);
                write!(f, "{sub_type}:{asn}:{val}")
            }
            Ok(TransFourOctetAS) => {
                let asn = u32::from_be_bytes([self.val[0], self.val[1], self.val[2], self.val[3]]);
                let val = u16::from_be_bytes([self.val[4], self.val[5]]);
                write!(f, "{sub_type}:{asn}:{val}")
            }
            Ok(TransOpaque) => {
                let val = u16::from_be_bytes([self.val[4], self.val[5]]);
                if let Ok(tunnel_type) = TunnelType::try_from(val) {
                    write!(f, "{sub_type}:{tunnel_type}")
                } else {
                    let ip = Ipv4Addr::new(self.val[0], self.val[1], self.val[2], self.val[3]);
                    write!(f, "{sub_type}:{ip}:{val}")
                }
            }
            Ok(TransIpv4Addr) | Err(_) => {
                let ip = Ipv4Addr::new(self.val[0], self.val[1], self.val[2], self.val[3]);
                let val = u16::from_be_bytes([self.val[4], self.val[5]]);
                write!(f, "{sub_type}:{ip}:{val}")
            }
        }
    }
}

impl ExtCommunity {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, value: ExtCommunityValue) {
        self.0.push(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExtCommunityValue> {
        self.0.iter()
    }

    pub fn sort_uniq(&mut self) {
        let coms: BTreeSet<ExtCommunityValue> = self.0.iter().cloned().collect();
        self.0 = coms.into_iter().collect();
    }

    pub fn contains(&self, val: &ExtCommunityValue) -> bool {
        self.0.contains(val)
    }

    /// True when every value of `other` is present in `self`.
    pub fn is_match(&self, other: &ExtCommunity) -> bool {
        self.len() >= other.len() && other.iter().all(|x| self.contains(x))
    }

    /// Set equality, independent of value order.
    pub fn is_equal(&self, other: &ExtCommunity) -> bool {
        let lhs: BTreeSet<&ExtCommunityValue> = self.iter().collect();
        let rhs: BTreeSet<&ExtCommunityValue> = other.iter().collect();
        lhs == rhs
    }

    pub fn value_str(&self, index: usize) -> Option<String> {
        self.0.get(index).map(|x| x.to_string())
    }
}

impl fmt::Display for ExtCommunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.iter().map(|x| x.to_string()).join(" ");
        write!(f, "{v}")
    }
}

impl fmt::Debug for ExtCommunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtCommunity: {}", self)
    }
}

impl FromStr for ExtCommunity {
    type Err = CommunityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ecom = ExtCommunity::default();
        let mut sub_type: Option<ExtCommunitySubType> = None;
        let mut pending = false;

        for token in tokenizer(s)?.into_iter() {
            match token {
                Token::Rd(rd) => {
                    let Some(sub_type) = sub_type else {
                        return Err(CommunityParseError::MissingSubType(rd.to_string()));
                    };
                    let mut val: ExtCommunityValue = rd.into();
                    val.low_type = sub_type.into();
                    ecom.push(val);
                    pending = false;
                }
                Token::SubType(typ) => {
                    if pending {
                        return Err(CommunityParseError::MissingValue(
                            sub_type.map(|x| x.to_string()).unwrap_or_default(),
                        ));
                    }
                    sub_type = Some(typ);
                    pending = true;
                }
            }
        }
        if pending {
            return Err(CommunityParseError::MissingValue(
                sub_type.map(|x| x.to_string()).unwrap_or_default(),
            ));
        }
        if ecom.is_empty() {
            return Err(CommunityParseError::Empty);
        }
        ecom.sort_uniq();
        Ok(ecom)
    }
}

impl From<RouteDistinguisher> for ExtCommunityValue {
    fn from(from: RouteDistinguisher) -> Self {
        let high_type = match from.typ {
            RouteDistinguisherType::ASN => ExtCommunityType::TransTwoOctetAS,
            RouteDistinguisherType::IP => ExtCommunityType::TransIpv4Addr,
            RouteDistinguisherType::AS4 => ExtCommunityType::TransFourOctetAS,
        };
        ExtCommunityValue {
            high_type: high_type.into(),
            val: from.val,
            ..Default::default()
        }
    }
}
