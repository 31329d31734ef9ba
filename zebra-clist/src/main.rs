// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bgp_community::{Community, ExtCommunity, LargeCommunity};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use zebra_clist::config::{ClistConfig, config_path};
use zebra_clist::policy::{
    CommunityList, Family, community_list_show, community_list_show_all, config_write,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Arg {
    #[arg(short, long, help = "Config file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "set/delete command applied after the config file")]
    exec: Vec<String>,

    #[arg(short, long, help = "JSON output")]
    json: bool,

    #[arg(long, help = "Log in JSON format")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show community-lists.
    Show {
        #[arg(short, long)]
        family: Option<Family>,
        #[arg(short, long, requires = "family")]
        name: Option<String>,
    },
    /// Match an attribute against a community-list.
    Match {
        #[arg(short, long)]
        family: Family,
        #[arg(short, long)]
        list: String,
        #[arg(long, help = "Standard entries must equal the attribute")]
        exact: bool,
        /// Attribute values. None means the attribute is absent.
        attr: Vec<String>,
    },
    /// Remove the attribute values a community-list permits.
    MatchDelete {
        #[arg(short, long)]
        family: Family,
        #[arg(short, long)]
        list: String,
        attr: Vec<String>,
    },
    /// Print the configuration.
    Config,
}

fn tracing_set(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn attr_parse<T>(attr: &[String]) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    if attr.is_empty() {
        return Ok(None);
    }
    let text = attr.join(" ");
    let value = text
        .parse()
        .with_context(|| format!("malformed attribute '{}'", text))?;
    Ok(Some(value))
}

fn list_lookup<'a>(config: &'a ClistConfig, family: Family, name: &str) -> Result<&'a CommunityList> {
    config
        .clist
        .lookup(family, name)
        .with_context(|| format!("{} '{}' not found", family, name))
}

fn community_match(
    list: &CommunityList,
    family: Family,
    attr: &[String],
    exact: bool,
) -> Result<bool> {
    if exact && family != Family::Community {
        bail!("exact match is supported only for {}", Family::Community);
    }
    let matched = match family {
        Family::Community => {
            let com = attr_parse::<Community>(attr)?;
            if exact {
                list.community_exact_match(com.as_ref())
            } else {
                list.community_match(com.as_ref())
            }
        }
        Family::ExtCommunity => list.ecommunity_match(attr_parse::<ExtCommunity>(attr)?.as_ref()),
        Family::LargeCommunity => {
            list.lcommunity_match(attr_parse::<LargeCommunity>(attr)?.as_ref())
        }
    };
    Ok(matched)
}

fn community_match_delete(list: &CommunityList, family: Family, attr: &[String]) -> Result<String> {
    let result = match family {
        Family::Community => {
            let com = attr_parse::<Community>(attr)?.unwrap_or_default();
            list.community_match_delete(com).to_string()
        }
        Family::LargeCommunity => {
            let lcom = attr_parse::<LargeCommunity>(attr)?.unwrap_or_default();
            list.lcommunity_match_delete(lcom).to_string()
        }
        Family::ExtCommunity => bail!("match-delete is not supported for {}", family),
    };
    Ok(result)
}

fn main() -> Result<()> {
    let arg = Arg::parse();

    tracing_set(arg.log_json);

    let mut config = ClistConfig::new();
    if let Some(path) = config_path(arg.config.as_deref()) {
        let input = std::fs::read_to_string(&path)
            .with_context(|| format!("can't read {}", path.display()))?;
        config
            .load(&input)
            .with_context(|| format!("config load failed: {}", path.display()))?;
    }
    for line in arg.exec.iter() {
        config.command(line)?;
    }

    match arg.command {
        Command::Show { family, name } => {
            let out = match family {
                Some(family) => community_list_show(&config.clist, family, name.as_deref(), arg.json)?,
                None => community_list_show_all(&config.clist, arg.json)?,
            };
            print!("{}", out);
            if arg.json {
                println!();
            }
        }
        Command::Match {
            family,
            list,
            exact,
            attr,
        } => {
            let clist = list_lookup(&config, family, &list)?;
            let matched = community_match(clist, family, &attr, exact)?;
            if arg.json {
                println!("{}", json!({ "list": list, "match": matched }));
            } else {
                println!("{}", if matched { "match" } else { "no match" });
            }
        }
        Command::MatchDelete { family, list, attr } => {
            let clist = list_lookup(&config, family, &list)?;
            let result = community_match_delete(clist, family, &attr)?;
            if arg.json {
                println!("{}", json!({ "list": list, "result": result }));
            } else {
                println!("{}", result);
            }
        }
        Command::Config => {
            print!("{}", config_write(&config.clist));
        }
    }

    config.clist.terminate();

    Ok(())
}
