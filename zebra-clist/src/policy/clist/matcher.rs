use std::cell::OnceCell;

use bgp_community::{Community, ExtCommunity, LargeCommunity};

use super::{ClistAttr, CommunityEntry, CommunityList, DeleteAttr};
use crate::clist_debug;

fn entry_match<A: ClistAttr>(
    entry: &CommunityEntry,
    attr: Option<&A>,
    text: &OnceCell<String>,
    exact: bool,
) -> bool {
    let Some(payload) = &entry.payload else {
        return true;
    };
    if let Some(regex) = payload.regex() {
        // Absent attribute is matched as the empty string.
        let text = text.get_or_init(|| attr.map(|a| a.to_string()).unwrap_or_default());
        return regex.is_match(text);
    }
    match A::standard(payload) {
        Some(value) if value.is_wildcard() => true,
        Some(value) => attr.is_some_and(|a| {
            if exact {
                a.attr_equal(value)
            } else {
                a.attr_match(value)
            }
        }),
        None => false,
    }
}

/// First entry of the attribute's family that decides the result wins.
/// No decisive entry means no match.
pub fn list_match<A: ClistAttr>(list: &CommunityList, attr: Option<&A>, exact: bool) -> bool {
    let text = OnceCell::new();
    list.iter()
        .filter(|entry| entry.style.family() == A::FAMILY)
        .find(|entry| entry_match(*entry, attr, &text, exact))
        .is_some_and(|entry| entry.direct.is_permit())
}

fn value_match<A: ClistAttr>(entry: &CommunityEntry, value: &A::Value) -> bool {
    let Some(payload) = &entry.payload else {
        return true;
    };
    if let Some(regex) = payload.regex() {
        return regex.is_match(&A::value_text(value));
    }
    A::standard(payload).is_some_and(|com| com.is_wildcard() || com.contains_value(value))
}

/// Remove every value whose first decisive entry is a permit.
pub fn list_match_delete<A: DeleteAttr>(list: &CommunityList, mut attr: A) -> A {
    let delete: Vec<usize> = attr
        .values()
        .iter()
        .enumerate()
        .filter(|(_, value)| {
            list.iter()
                .filter(|entry| entry.style.family() == A::FAMILY)
                .find(|entry| value_match::<A>(entry, value))
                .is_some_and(|entry| entry.direct.is_permit())
        })
        .map(|(index, _)| index)
        .collect();

    if !delete.is_empty() {
        clist_debug!(list = %list.name, count = delete.len(), "community-list values deleted");
    }
    for index in delete.into_iter().rev() {
        attr.delete_index(index);
    }
    attr
}

impl CommunityList {
    pub fn community_match(&self, com: Option<&Community>) -> bool {
        list_match(self, com, false)
    }

    /// Like `community_match` but standard entries need set equality.
    pub fn community_exact_match(&self, com: Option<&Community>) -> bool {
        list_match(self, com, true)
    }

    pub fn ecommunity_match(&self, ecom: Option<&ExtCommunity>) -> bool {
        list_match(self, ecom, false)
    }

    pub fn lcommunity_match(&self, lcom: Option<&LargeCommunity>) -> bool {
        list_match(self, lcom, false)
    }

    pub fn community_match_delete(&self, com: Community) -> Community {
        list_match_delete(self, com)
    }

    pub fn lcommunity_match_delete(&self, lcom: LargeCommunity) -> LargeCommunity {
        list_match_delete(self, lcom)
    }
}
