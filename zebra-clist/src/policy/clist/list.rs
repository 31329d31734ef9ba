use std::cmp::Ordering;

use serde::Serialize;

use super::{CommunityEntry, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSort {
    Number,
    String,
}

impl ListSort {
    pub fn from_name(name: &str) -> Self {
        if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
            ListSort::Number
        } else {
            ListSort::String
        }
    }
}

/// Numeric order of two decimal digit strings of any length.
pub(crate) fn number_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Named, ordered sequence of entries. Every entry shares the style of
/// the first one.
#[derive(Debug, Clone)]
pub struct CommunityList {
    pub name: String,
    pub sort: ListSort,
    pub entries: Vec<CommunityEntry>,
}

impl CommunityList {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sort: ListSort::from_name(name),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommunityEntry> {
        self.entries.iter()
    }

    pub fn head(&self) -> Option<&CommunityEntry> {
        self.entries.first()
    }

    pub fn style(&self) -> Option<Style> {
        self.head().map(|entry| entry.style)
    }

    pub fn entry_add(&mut self, entry: CommunityEntry) {
        self.entries.push(entry);
    }

    pub fn dup_check(&self, entry: &CommunityEntry) -> bool {
        self.entries.iter().any(|e| e.is_same(entry))
    }

    /// Index of the first non-any entry holding the value of `entry`. The
    /// direct of `entry` is not compared.
    pub fn entry_lookup(&self, entry: &CommunityEntry) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| !e.any() && e.value_equal(entry))
    }

    pub fn entry_delete(&mut self, index: usize) -> CommunityEntry {
        self.entries.remove(index)
    }

    pub(crate) fn key_cmp(&self, name: &str) -> Ordering {
        match self.sort {
            ListSort::Number => number_cmp(&self.name, name),
            ListSort::String => self.name.as_str().cmp(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Direct;

    #[test]
    fn sort() {
        assert_eq!(ListSort::from_name("10"), ListSort::Number);
        assert_eq!(ListSort::from_name("0099"), ListSort::Number);
        assert_eq!(ListSort::from_name("10a"), ListSort::String);
        assert_eq!(ListSort::from_name("FOO"), ListSort::String);
        assert_eq!(ListSort::from_name(""), ListSort::String);
    }

    #[test]
    fn number_order() {
        assert_eq!(number_cmp("9", "10"), Ordering::Less);
        assert_eq!(number_cmp("100", "99"), Ordering::Greater);
        assert_eq!(number_cmp("007", "7"), Ordering::Equal);
        assert_eq!(
            number_cmp("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn entries() {
        let mut list = CommunityList::new("1");
        assert!(list.style().is_none());

        let any = CommunityEntry::new(Style::CommunityStandard, Direct::Deny, None).unwrap();
        let e = CommunityEntry::new(Style::CommunityStandard, Direct::Deny, Some("1:1")).unwrap();
        list.entry_add(any.clone());
        list.entry_add(e.clone());

        assert_eq!(list.style(), Some(Style::CommunityStandard));
        assert!(list.dup_check(&any));
        assert!(list.dup_check(&e));
        assert_eq!(list.entry_lookup(&e), Some(1));
        assert_eq!(list.entry_lookup(&any), None);

        let permit =
            CommunityEntry::new(Style::CommunityStandard, Direct::Permit, Some("1:1")).unwrap();
        assert!(!list.dup_check(&permit));
        assert_eq!(list.entry_lookup(&permit), Some(1));

        let removed = list.entry_delete(1);
        assert_eq!(removed.config.as_deref(), Some("1:1"));
        assert_eq!(list.len(), 1);
    }
}
