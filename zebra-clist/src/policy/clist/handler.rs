use super::{ClistError, CommunityEntry, CommunityList, CommunityListMaster, Family, Style};
use crate::policy::Direct;
use crate::{clist_debug, clist_info};

/// Holds every community-list, one master per family.
#[derive(Debug, Default)]
pub struct CommunityListHandler {
    pub community: CommunityListMaster,
    pub extcommunity: CommunityListMaster,
    pub lcommunity: CommunityListMaster,
}

impl CommunityListHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn master(&self, family: Family) -> &CommunityListMaster {
        match family {
            Family::Community => &self.community,
            Family::ExtCommunity => &self.extcommunity,
            Family::LargeCommunity => &self.lcommunity,
        }
    }

    pub fn master_mut(&mut self, family: Family) -> &mut CommunityListMaster {
        match family {
            Family::Community => &mut self.community,
            Family::ExtCommunity => &mut self.extcommunity,
            Family::LargeCommunity => &mut self.lcommunity,
        }
    }

    pub fn lookup(&self, family: Family, name: &str) -> Option<&CommunityList> {
        self.master(family).lookup(name)
    }

    pub fn get(&mut self, family: Family, name: &str) -> &mut CommunityList {
        self.master_mut(family).get(name)
    }

    /// Add an entry to the named list, creating the list when needed.
    /// `text` of None adds an entry matching any attribute. Adding an
    /// entry equal to an existing one succeeds without change.
    pub fn set(
        &mut self,
        family: Family,
        name: &str,
        text: Option<&str>,
        direct: Direct,
        style: Style,
    ) -> Result<(), ClistError> {
        assert_eq!(
            style.family(),
            family,
            "community-list style {style:?} does not belong to {family}"
        );
        let master = self.master_mut(family);

        if let Some(current) = master.lookup(name).and_then(|list| list.style())
            && current != style
        {
            return Err(if current.is_standard() {
                ClistError::StandardConflict
            } else {
                ClistError::ExpandedConflict
            });
        }

        // Parse before touching the master so a bad value leaves no list behind.
        let entry = CommunityEntry::new(style, direct, text)?;

        let list = master.get(name);
        if list.dup_check(&entry) {
            clist_debug!(%family, name, "duplicate community-list entry ignored");
            return Ok(());
        }
        clist_info!(%family, name, %direct, value = text.unwrap_or(""), "community-list entry added");
        list.entry_add(entry);
        Ok(())
    }

    /// Remove one entry from the named list, or the whole list when `text`
    /// is None. The entry is the first one holding `text`, whatever its
    /// direct. A list left without entries is deleted.
    pub fn unset(
        &mut self,
        family: Family,
        name: &str,
        text: Option<&str>,
        direct: Direct,
        style: Style,
    ) -> Result<(), ClistError> {
        let master = self.master_mut(family);
        if master.lookup(name).is_none() {
            return Err(ClistError::NotFound);
        }

        let Some(text) = text else {
            master.delete(name);
            clist_info!(%family, name, "community-list removed");
            return Ok(());
        };

        let target = CommunityEntry::new(style, direct, Some(text))?;
        let list = master.lookup_mut(name).ok_or(ClistError::NotFound)?;
        let index = list.entry_lookup(&target).ok_or(ClistError::NotFound)?;
        let removed = list.entry_delete(index);
        clist_info!(%family, name, direct = %removed.direct, value = text, "community-list entry removed");

        if list.is_empty() {
            master.delete(name);
        }
        Ok(())
    }

    /// Release every list of every family.
    pub fn terminate(mut self) {
        for family in Family::ALL {
            let master = self.master_mut(family);
            clist_debug!(%family, lists = master.len(), "community-list terminate");
            master.clear();
        }
    }
}
