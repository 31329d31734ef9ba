use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::CommunityParseError;

/// Administrator field layout shared by route distinguishers and the
/// route-target / site-of-origin extended communities.
#[allow(clippy::upper_case_acronyms)]
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum RouteDistinguisherType {
    #[default]
    ASN,
    IP,
    AS4,
}

#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub struct RouteDistinguisher {
    pub typ: RouteDistinguisherType,
    pub val: [u8; 6],
}

impl RouteDistinguisher {
    pub fn new(typ: RouteDistinguisherType) -> Self {
        Self {
            typ,
            ..Default::default()
        }
    }
}

impl FromStr for RouteDistinguisher {
    type Err = CommunityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CommunityParseError::InvalidRouteDistinguisher(s.to_string());

        let strs: Vec<&str> = s.split(':').collect();
        if strs.len() != 2 {
            return Err(err());
        }
        // A 32-bit IP address, a colon, and a 16-bit number, for example:
        // 192.168.1.2:51
        if let Ok(addr) = strs[0].parse::<Ipv4Addr>() {
            let val = strs[1].parse::<u16>().map_err(|_| err())?;
            let mut rd = RouteDistinguisher::new(RouteDistinguisherType::IP);
            rd.val[0..4].copy_from_slice(&addr.octets());
            rd.val[4..6].copy_from_slice(&val.to_be_bytes());
            return Ok(rd);
        }
        // A 16-bit autonomous system number, a colon, and a 32-bit number, for
        // example: 65000:3
        if let Ok(asn) = strs[0].parse::<u16>()
            && let Ok(val) = strs[1].parse::<u32>()
        {
            let mut rd = RouteDistinguisher::new(RouteDistinguisherType::ASN);
            rd.val[0..2].copy_from_slice(&asn.to_be_bytes());
            rd.val[2..6].copy_from_slice(&val.to_be_bytes());
            return Ok(rd);
        }
        // A 32-bit autonomous system number, a colon, and a 16-bit number, for
        // example: 4200000000:10
        if let Ok(asn) = strs[0].parse::<u32>()
            && let Ok(val) = strs[1].parse::<u16>()
        {
            let mut rd = RouteDistinguisher::new(RouteDistinguisherType::AS4);
            rd.val[0..4].copy_from_slice(&asn.to_be_bytes());
            rd.val[4..6].copy_from_slice(&val.to_be_bytes());
            return Ok(rd);
        }
        Err(err())
    }
}

impl fmt::Display for RouteDistinguisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.typ {
            RouteDistinguisherType::ASN => {
                let asn = u16::from_be_bytes([self.val[0], self.val[1]]);
                let val = u32::from_be_bytes([self.val[2], self.val[3], self.val[4], self.val[5]]);
                write!(f, "{asn}:{val}")
            }
            RouteDistinguisherType::IP => {
                let ip = Ipv4Addr::new(self.val[0], self.val[1], self.val[2], self.val[3]);
                let val = u16::from_be_bytes([self.val[4], self.val[5]]);
                write!(f, "{ip}:{val}")
            }
            RouteDistinguisherType::AS4 => {
                let asn = u32::from_be_bytes([self.val[0], self.val[1], self.val[2], self.val[3]]);
                let val = u16::from_be_bytes([self.val[4], self.val[5]]);
                write!(f, "{asn}:{val}")
            }
        }
    }
}
