use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Cluster backend an application was submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceManagerType {
    Yarn,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown resource manager type `{0}`")]
pub struct UnknownResourceManagerType(pub String);

impl ResourceManagerType {
    const ALL: [ResourceManagerType; 1] = [ResourceManagerType::Yarn];

    pub fn code(&self) -> i32 {
        match self {
            ResourceManagerType::Yarn => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceManagerType::Yarn => "yarn",
        }
    }

    pub fn get_by_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl FromStr for ResourceManagerType {
    type Err = UnknownResourceManagerType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownResourceManagerType(s.to_string()))
    }
}

impl Display for ResourceManagerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
