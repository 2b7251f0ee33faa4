use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind of a stored resource. Persisted as its numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ResourceType {
    File,
    Udf,
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown resource type code `{0}`")]
pub struct UnknownResourceTypeCode(pub i32);

impl ResourceType {
    const ALL: [ResourceType; 2] = [ResourceType::File, ResourceType::Udf];

    pub fn code(&self) -> i32 {
        match self {
            ResourceType::File => 0,
            ResourceType::Udf => 1,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResourceType::File => "file",
            ResourceType::Udf => "udf",
        }
    }

    /// Returns the variant with the given code, `None` when no variant uses it.
    pub fn get_by_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl TryFrom<i32> for ResourceType {
    type Error = UnknownResourceTypeCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::get_by_code(code).ok_or(UnknownResourceTypeCode(code))
    }
}

impl From<ResourceType> for i32 {
    fn from(value: ResourceType) -> Self {
        value.code()
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
