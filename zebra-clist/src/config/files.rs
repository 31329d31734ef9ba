use anyhow::{Context, Result, bail};

use super::ConfigOp;
use super::token::{Token, tokenizer};

fn flatten(stack: &[Vec<String>]) -> Vec<String> {
    stack.iter().flatten().cloned().collect()
}

/// Flatten brace configuration into one word vector per leaf statement.
pub fn load_config_file(input: &str) -> Result<Vec<Vec<String>>> {
    let mut stack: Vec<Vec<String>> = Vec::new();
    let mut cmds: Vec<String> = Vec::new();
    let mut outputs: Vec<Vec<String>> = Vec::new();

    for token in tokenizer(input)?.into_iter() {
        match token {
            Token::String(m) => {
                cmds.push(m);
            }
            Token::LeftBrace => {
                stack.push(std::mem::take(&mut cmds));
            }
            Token::RightBrace => {
                if !cmds.is_empty() {
                    bail!("missing ';' after '{}'", cmds.join(" "));
                }
                stack.pop().context("unbalanced '}'")?;
            }
            Token::SemiColon => {
                stack.push(std::mem::take(&mut cmds));
                outputs.push(flatten(&stack));
                stack.pop();
            }
            Token::Comment(_) => {}
        }
    }
    if !cmds.is_empty() {
        bail!("missing ';' after '{}'", cmds.join(" "));
    }
    if !stack.is_empty() {
        bail!("missing '}}'");
    }
    Ok(outputs)
}

/// Parse a single `set ...` or `delete ...` command line.
pub fn command_parse(line: &str) -> Result<(ConfigOp, Vec<String>)> {
    let mut words: Vec<String> = tokenizer(line)?
        .into_iter()
        .filter_map(|token| match token {
            Token::String(s) => Some(s),
            _ => None,
        })
        .collect();
    if words.is_empty() {
        bail!("empty command");
    }
    let op = words.remove(0);
    let op: ConfigOp = op
        .parse()
        .with_context(|| format!("unknown command '{}'", op))?;
    Ok((op, words))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flatten_nested() {
        let config = r#"
community-list {
    standard 10 {
        permit "100:1 100:2";
        deny;
    }
    expanded FOO {
        permit "^65000_";
    }
}
"#;
        let commands = load_config_file(config).unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            words(&["community-list", "standard", "10", "permit", "100:1 100:2"])
        );
        assert_eq!(commands[1], words(&["community-list", "standard", "10", "deny"]));
        assert_eq!(
            commands[2],
            words(&["community-list", "expanded", "FOO", "permit", "^65000_"])
        );
    }

    #[test]
    fn single_line() {
        let commands =
            load_config_file("extcommunity-list { standard 20 { permit \"rt 100:200\"; } }")
                .unwrap();
        assert_eq!(
            commands,
            vec![words(&[
                "extcommunity-list",
                "standard",
                "20",
                "permit",
                "rt 100:200"
            ])]
        );
    }

    #[test]
    fn unbalanced() {
        assert!(load_config_file("community-list { standard 10 { deny; }").is_err());
        assert!(load_config_file("community-list { } }").is_err());
        assert!(load_config_file("community-list { standard 10 { deny } }").is_err());
    }

    #[test]
    fn command() {
        let (op, args) = command_parse("set community-list standard 10 permit \"100:1 100:2\"").unwrap();
        assert_eq!(op, ConfigOp::Set);
        assert_eq!(
            args,
            words(&["community-list", "standard", "10", "permit", "100:1 100:2"])
        );

        let (op, _) = command_parse("delete community-list standard 10").unwrap();
        assert_eq!(op, ConfigOp::Delete);

        assert!(command_parse("show community-list").is_err());
        assert!(command_parse("").is_err());
    }
}
