use std::fmt::Write;

use anyhow::{Context, Error};
use serde::Serialize;

use super::{CommunityList, CommunityListHandler, Family, ListSort};
use crate::policy::Direct;

const INDENT: &str = "  ";

#[derive(Serialize)]
struct EntryJson<'a> {
    direct: Direct,
    any: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
}

#[derive(Serialize)]
struct ListJson<'a> {
    family: String,
    name: &'a str,
    sort: ListSort,
    style: &'static str,
    entries: Vec<EntryJson<'a>>,
}

impl<'a> ListJson<'a> {
    fn new(family: Family, list: &'a CommunityList) -> Self {
        Self {
            family: family.to_string(),
            name: &list.name,
            sort: list.sort,
            style: list.style().map(|s| s.kind()).unwrap_or_default(),
            entries: list
                .iter()
                .map(|entry| EntryJson {
                    direct: entry.direct,
                    any: entry.any(),
                    value: entry.config.as_deref(),
                })
                .collect(),
        }
    }
}

fn list_show(buf: &mut String, family: Family, list: &CommunityList) -> Result<(), Error> {
    let kind = list.style().map(|s| s.kind()).unwrap_or_default();
    match list.sort {
        ListSort::Number => writeln!(buf, "{} {} list {}", family.show_name(), kind, list.name)?,
        ListSort::String => writeln!(
            buf,
            "Named {} {} list {}",
            family.show_name(),
            kind,
            list.name
        )?,
    }
    for entry in list.iter() {
        match &entry.config {
            Some(config) => writeln!(buf, "    {} {}", entry.direct, config)?,
            None => writeln!(buf, "    {}", entry.direct)?,
        }
    }
    Ok(())
}

/// Render the lists of `family`, or only the list `name`.
pub fn community_list_show(
    clist: &CommunityListHandler,
    family: Family,
    name: Option<&str>,
    json: bool,
) -> Result<String, Error> {
    let master = clist.master(family);
    let lists: Vec<&CommunityList> = match name {
        Some(name) => vec![
            master
                .lookup(name)
                .context(format!("{} '{}' not found", family, name))?,
        ],
        None => master.iter().collect(),
    };

    if json {
        let lists: Vec<ListJson> = lists
            .into_iter()
            .map(|list| ListJson::new(family, list))
            .collect();
        return Ok(serde_json::to_string_pretty(&lists)?);
    }

    let mut buf = String::new();
    for list in lists {
        list_show(&mut buf, family, list)?;
    }
    Ok(buf)
}

/// Lists of every family, in family order.
pub fn community_list_show_all(clist: &CommunityListHandler, json: bool) -> Result<String, Error> {
    if json {
        let lists: Vec<ListJson> = Family::ALL
            .into_iter()
            .flat_map(|family| {
                clist
                    .master(family)
                    .iter()
                    .map(move |list| ListJson::new(family, list))
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&lists)?);
    }

    let mut buf = String::new();
    for family in Family::ALL {
        buf.push_str(&community_list_show(clist, family, None, false)?);
    }
    Ok(buf)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Brace configuration that reloads into an identical set of lists.
pub fn config_write(clist: &CommunityListHandler) -> String {
    let mut buf = String::new();
    for family in Family::ALL {
        let master = clist.master(family);
        if master.is_empty() {
            continue;
        }
        buf.push_str(&format!("{} {{\n", family));
        for list in master.iter() {
            let kind = list.style().map(|s| s.kind()).unwrap_or_default();
            buf.push_str(&format!("{INDENT}{} {} {{\n", kind, quote(&list.name)));
            for entry in list.iter() {
                match &entry.config {
                    Some(config) => buf.push_str(&format!(
                        "{INDENT}{INDENT}{} {};\n",
                        entry.direct,
                        quote(config)
                    )),
                    None => buf.push_str(&format!("{INDENT}{INDENT}{};\n", entry.direct)),
                }
            }
            buf.push_str(&format!("{INDENT}}}\n"));
        }
        buf.push_str("}\n");
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Style;

    fn handler() -> CommunityListHandler {
        let mut clist = CommunityListHandler::new();
        clist
            .set(
                Family::Community,
                "10",
                Some("100:2 100:1"),
                Direct::Permit,
                Style::CommunityStandard,
            )
            .unwrap();
        clist
            .set(
                Family::Community,
                "10",
                None,
                Direct::Deny,
                Style::CommunityStandard,
            )
            .unwrap();
        clist
            .set(
                Family::Community,
                "FOO",
                Some("^65000_"),
                Direct::Deny,
                Style::CommunityExpanded,
            )
            .unwrap();
        clist
    }

    #[test]
    fn show_text() {
        let clist = handler();
        let out = community_list_show(&clist, Family::Community, None, false).unwrap();
        assert_eq!(
            out,
            "Community standard list 10\n    permit 100:1 100:2\n    deny\n\
             Named Community expanded list FOO\n    deny ^65000_\n"
        );

        let out = community_list_show(&clist, Family::Community, Some("FOO"), false).unwrap();
        assert_eq!(out, "Named Community expanded list FOO\n    deny ^65000_\n");

        assert!(community_list_show(&clist, Family::Community, Some("BAR"), false).is_err());
        assert_eq!(
            community_list_show(&clist, Family::LargeCommunity, None, false).unwrap(),
            ""
        );
    }

    #[test]
    fn show_json() {
        let clist = handler();
        let out = community_list_show(&clist, Family::Community, Some("10"), true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["name"], "10");
        assert_eq!(v[0]["sort"], "number");
        assert_eq!(v[0]["style"], "standard");
        assert_eq!(v[0]["entries"][0]["direct"], "permit");
        assert_eq!(v[0]["entries"][0]["value"], "100:1 100:2");
        assert_eq!(v[0]["entries"][1]["any"], true);
        assert!(v[0]["entries"][1].get("value").is_none());
    }

    #[test]
    fn write() {
        let clist = handler();
        assert_eq!(
            config_write(&clist),
            "community-list {\n  standard \"10\" {\n    permit \"100:1 100:2\";\n    deny;\n  }\n  \
             expanded \"FOO\" {\n    deny \"^65000_\";\n  }\n}\n"
        );
    }

    #[test]
    fn quoting() {
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
