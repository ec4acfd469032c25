use crate::artifacts::branch::VALID_BRANCH_NAME_REGEX;
use crate::errors::{Error, Result};
use std::sync::LazyLock;

/// Name of the branch every repository starts on
pub const DEFAULT_BRANCH_NAME: &str = "master";

static VALID_BRANCH_NAME: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(VALID_BRANCH_NAME_REGEX).unwrap_or_else(|err| {
        panic!("invalid branch name regex {VALID_BRANCH_NAME_REGEX}: {err}")
    })
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: &str) -> Result<Self> {
        if VALID_BRANCH_NAME.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(Error::InvalidName(name.to_string()))
        }
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH_NAME.to_string())
    }

    pub fn is_default_branch(&self) -> bool {
        self.0 == DEFAULT_BRANCH_NAME
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BranchName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
