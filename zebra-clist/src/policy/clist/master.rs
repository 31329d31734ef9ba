use std::cmp::Ordering;

use super::{CommunityList, ListSort};
use crate::clist_debug;

/// Lists of one sort, kept in key order.
#[derive(Debug, Default)]
pub struct CommunityListGroup {
    lists: Vec<CommunityList>,
}

impl CommunityListGroup {
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommunityList> {
        self.lists.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.name == name)
    }

    // New list goes before the first list whose key is not smaller.
    fn insert(&mut self, list: CommunityList) -> usize {
        let index = self
            .lists
            .iter()
            .position(|l| l.key_cmp(&list.name) != Ordering::Less)
            .unwrap_or(self.lists.len());
        self.lists.insert(index, list);
        index
    }

    fn clear(&mut self) {
        self.lists.clear();
    }
}

/// All lists of one family.
#[derive(Debug, Default)]
pub struct CommunityListMaster {
    pub num: CommunityListGroup,
    pub str: CommunityListGroup,
}

impl CommunityListMaster {
    fn group_mut(&mut self, sort: ListSort) -> &mut CommunityListGroup {
        match sort {
            ListSort::Number => &mut self.num,
            ListSort::String => &mut self.str,
        }
    }

    pub fn len(&self) -> usize {
        self.num.len() + self.str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num.is_empty() && self.str.is_empty()
    }

    /// Numbered lists first, then named lists.
    pub fn iter(&self) -> impl Iterator<Item = &CommunityList> {
        self.num.iter().chain(self.str.iter())
    }

    pub fn lookup(&self, name: &str) -> Option<&CommunityList> {
        self.iter().find(|list| list.name == name)
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut CommunityList> {
        self.num
            .lists
            .iter_mut()
            .chain(self.str.lists.iter_mut())
            .find(|list| list.name == name)
    }

    /// Existing list of that name, or a newly inserted empty one.
    pub fn get(&mut self, name: &str) -> &mut CommunityList {
        let group = self.group_mut(ListSort::from_name(name));
        let index = match group.position(name) {
            Some(index) => index,
            None => {
                clist_debug!(name, "community-list created");
                group.insert(CommunityList::new(name))
            }
        };
        &mut group.lists[index]
    }

    pub fn delete(&mut self, name: &str) -> Option<CommunityList> {
        let group = self.group_mut(ListSort::from_name(name));
        let index = group.position(name)?;
        clist_debug!(name, "community-list deleted");
        Some(group.lists.remove(index))
    }

    pub fn clear(&mut self) {
        self.num.clear();
        self.str.clear();
    }
}
