use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 並び替えキー
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Blanks,
    Comments,
    Code,
    Files,
    #[default]
    Lines,
}

impl Sort {
    pub const ALL: [Self; 5] = [
        Self::Blanks,
        Self::Comments,
        Self::Code,
        Self::Files,
        Self::Lines,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blanks => "Blanks",
            Self::Comments => "Comments",
            Self::Code => "Code",
            Self::Files => "Files",
            Self::Lines => "Lines",
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidSortKey(String::from(s)))
    }
}
