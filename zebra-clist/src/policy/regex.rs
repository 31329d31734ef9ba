// Character '_' has special meanings. It represents [,{}() ] and the beginning of
// the line(^) and the end of the line ($).

use std::fmt;

use regex::Regex;

const MAGIC_UNDERSCORE: &str = "(^|[,{}() ]|$)";

fn magic_replace(s: &str) -> String {
    s.replace('_', MAGIC_UNDERSCORE)
}

pub fn regcomp(s: &str) -> Result<Regex, regex::Error> {
    Regex::new(&magic_replace(s))
}

/// Compiled community-list pattern. Keeps the text it was compiled from,
/// which is what expanded entries are compared and displayed by.
#[derive(Debug, Clone)]
pub struct BgpRegex {
    pattern: String,
    regex: Regex,
}

impl BgpRegex {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: pattern.to_string(),
            regex: regcomp(pattern)?,
        })
    }

    pub fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq for BgpRegex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl fmt::Display for BgpRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_magic() {
        let source = "_100_";
        let replaced = magic_replace(source);
        assert_eq!(replaced, "(^|[,{}() ]|$)100(^|[,{}() ]|$)");
    }

    #[test]
    fn underscore_match() {
        let reg = BgpRegex::new("_65000:1_").unwrap();
        assert!(reg.is_match("65000:1"));
        assert!(reg.is_match("100:1 65000:1"));
        assert!(reg.is_match("65000:1 no-export"));
        assert!(!reg.is_match("65000:10"));
        assert!(!reg.is_match("165000:1"));
        assert_eq!(reg.as_str(), "_65000:1_");
    }

    #[test]
    fn anchors() {
        let reg = BgpRegex::new("^100:").unwrap();
        assert!(reg.is_match("100:1 200:1"));
        assert!(!reg.is_match("200:1 100:1"));

        let reg = BgpRegex::new("^$").unwrap();
        assert!(reg.is_match(""));
        assert!(!reg.is_match("100:1"));
    }

    #[test]
    fn malformed() {
        assert!(BgpRegex::new("[100").is_err());
        assert!(BgpRegex::new("(").is_err());
    }
}
