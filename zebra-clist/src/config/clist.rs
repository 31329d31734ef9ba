use std::collections::BTreeMap;

use anyhow::{Context, Result};

use super::{Args, ConfigOp, command_parse, load_config_file, path_from_command};
use crate::clist_warn;
use crate::policy::{CommunityListHandler, Direct, Family, Style};

/// Applies configuration commands to a community-list handler.
pub struct ClistConfig {
    pub clist: CommunityListHandler,
    builder: ConfigBuilder,
}

impl ClistConfig {
    pub fn new() -> Self {
        ClistConfig {
            clist: CommunityListHandler::new(),
            builder: ConfigBuilder::new(),
        }
    }

    pub fn exec(&mut self, path: String, mut args: Args, op: ConfigOp) -> Result<()> {
        const CONFIG_ERR: &str = "missing config handler";

        let (style, handler) = self
            .builder
            .map
            .get(&(path.to_string(), op))
            .with_context(|| format!("{}: {}", CONFIG_ERR, path))?;

        handler(&mut self.clist, *style, &mut args)
    }

    /// Apply one flattened command.
    pub fn apply(&mut self, op: ConfigOp, words: &[String]) -> Result<()> {
        let (path, args) = path_from_command(words)?;
        self.exec(path, args, op)
            .with_context(|| format!("{} {}", op, words.join(" ")))
    }

    /// Apply a `set ...` / `delete ...` command line.
    pub fn command(&mut self, line: &str) -> Result<()> {
        let (op, words) = command_parse(line)?;
        self.apply(op, &words)
    }

    /// Load brace configuration. Stops at the first rejected statement.
    pub fn load(&mut self, input: &str) -> Result<()> {
        for words in load_config_file(input)?.iter() {
            if let Err(err) = self.apply(ConfigOp::Set, words) {
                clist_warn!(error = %err, "config rejected");
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Default for ClistConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct ConfigBuilder {
    path: String,
    style: Style,
    map: BTreeMap<(String, ConfigOp), (Style, Handler)>,
}

type Handler = fn(clist: &mut CommunityListHandler, style: Style, args: &mut Args) -> Result<()>;

const NAME_ERR: &str = "missing community-list name";
const DIRECT_ERR: &str = "missing permit or deny";

impl ConfigBuilder {
    pub fn new() -> Self {
        let mut builder = ConfigBuilder::default();
        for family in Family::ALL {
            for expanded in [false, true] {
                builder = builder
                    .path(Style::new(family, expanded))
                    .set(|clist, style, args| {
                        let name = args.string().context(NAME_ERR)?;
                        let direct = args.direct().context(DIRECT_ERR)?;
                        let value = args.rest();
                        clist.set(style.family(), &name, value.as_deref(), direct, style)?;
                        Ok(())
                    })
                    .del(|clist, style, args| {
                        let name = args.string().context(NAME_ERR)?;
                        // Without a value the whole list goes and direct is unused.
                        let direct = if args.is_empty() {
                            Direct::Permit
                        } else {
                            args.direct().context(DIRECT_ERR)?
                        };
                        let value = args.rest();
                        clist.unset(style.family(), &name, value.as_deref(), direct, style)?;
                        Ok(())
                    });
            }
        }
        builder
    }

    pub fn path(mut self, style: Style) -> Self {
        self.path = format!("/{}/{}", style.family(), style.kind());
        self.style = style;
        self
    }

    pub fn set(mut self, func: Handler) -> Self {
        self.map
            .insert((self.path.clone(), ConfigOp::Set), (self.style, func));
        self
    }

    pub fn del(mut self, func: Handler) -> Self {
        self.map
            .insert((self.path.clone(), ConfigOp::Delete), (self.style, func));
        self
    }
}
