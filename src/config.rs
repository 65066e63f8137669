use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// What to do with characters that aren't part of the level format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharPolicy {
    /// Leave a gap with no tile.
    Skip,
    /// Fail the level.
    Reject,
}

impl Display for CharPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            CharPolicy::Skip => write!(f, "skip"),
            CharPolicy::Reject => write!(f, "reject"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub levels_path: PathBuf,
    /// 1-based
    pub first_level: usize,
    /// Play non-interactively using these commands instead of the terminal.
    pub script: Option<String>,
    pub char_policy: CharPolicy,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(levels_path: P) -> Self {
        Config {
            levels_path: levels_path.into(),
            first_level: 1,
            script: None,
            char_policy: CharPolicy::Skip,
        }
    }
}
