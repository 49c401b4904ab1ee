//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default input directory
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";
const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the input store
    pub input_dir: PathBuf,
    /// Whether to run example self-checks before each day
    pub check: bool,
    /// Whether a missing input skips the day instead of failing it
    pub skip_missing: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, resolving the input directory
    pub fn from_args(args: Args) -> Self {
        let input_dir = resolve_input_dir(args.input_dir, std::env::var(INPUT_DIR_ENV).ok());

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            check: args.check,
            skip_missing: args.skip_missing,
            quiet: args.quiet,
        }
    }
}

/// Explicit flag wins over the environment, which wins over the default
fn resolve_input_dir(flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
    let dir = flag
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    expand_tilde(&dir)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_dir_precedence() {
        assert_eq!(resolve_input_dir(None, None), PathBuf::from("inputs"));
        assert_eq!(
            resolve_input_dir(None, Some("/data/aoc".into())),
            PathBuf::from("/data/aoc")
        );
        assert_eq!(
            resolve_input_dir(Some("local".into()), Some("/data/aoc".into())),
            PathBuf::from("local")
        );
        assert_eq!(resolve_input_dir(None, Some(String::new())), PathBuf::from("inputs"));
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
        assert_eq!(expand_tilde(Path::new("~other")), PathBuf::from("~other"));
    }
}
