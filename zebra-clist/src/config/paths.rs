use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::Args;

const CONFIG_FILE: &str = "clist.conf";

/// Split a flattened command into its handler path and arguments. The first
/// two words name the family and style, the rest are `name direct [value]`.
pub fn path_from_command(words: &[String]) -> Result<(String, Args)> {
    let [family, kind, rest @ ..] = words else {
        bail!("incomplete command: {}", words.join(" "));
    };
    let path = format!("/{}/{}", family, kind);
    Ok((path, Args(rest.iter().cloned().collect())))
}

// 1. Option config path
// 2. HomeDir ~/.zebra-rs/clist.conf
// 3. System /etc/zebra-rs/clist.conf
pub fn config_path(arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = arg {
        return Some(path.to_path_buf());
    }
    if let Some(mut home_dir) = dirs::home_dir() {
        home_dir.push(".zebra-rs");
        home_dir.push(CONFIG_FILE);
        if home_dir.exists() {
            return Some(home_dir);
        }
    }
    let path = Path::new("/etc/zebra-rs").join(CONFIG_FILE);
    if path.exists() { Some(path) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path() {
        let words: Vec<String> = ["community-list", "standard", "10", "permit", "100:1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let (path, args) = path_from_command(&words).unwrap();
        assert_eq!(path, "/community-list/standard");
        assert_eq!(args.len(), 3);

        assert!(path_from_command(&words[..1]).is_err());
    }

    #[test]
    fn explicit_config() {
        let path = config_path(Some(Path::new("/tmp/x.conf")));
        assert_eq!(path, Some(PathBuf::from("/tmp/x.conf")));
    }
}
