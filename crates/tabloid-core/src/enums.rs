//! Shared enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// How the article list is brought back in sync after a create, update or
/// delete succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
    /// Re-list every article. The active search filter is dropped.
    #[default]
    RefetchAll,
    /// Re-run the active search, or list everything when no search is active.
    ReapplySearch,
    /// Apply the mutation response to the local list without another request.
    PatchInPlace,
}

impl RefreshPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RefetchAll => "refetch_all",
            Self::ReapplySearch => "reapply_search",
            Self::PatchInPlace => "patch_in_place",
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "refetch_all" => Ok(Self::RefetchAll),
            "reapply_search" => Ok(Self::ReapplySearch),
            "patch_in_place" => Ok(Self::PatchInPlace),
            other => Err(CoreError::Validation(format!(
                "unknown refresh policy '{other}'"
            ))),
        }
    }
}
