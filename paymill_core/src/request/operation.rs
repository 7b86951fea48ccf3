use super::error::RequestError;
use std::fmt;
use std::str::FromStr;

/// Operation a request model is serialized for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    GetAll,
    GetOne,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Create,
        Operation::Update,
        Operation::GetAll,
        Operation::GetOne,
        Operation::Delete,
    ];

    /// Operation name as used by the transport layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::GetAll => "getAll",
            Operation::GetOne => "getOne",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = RequestError;

    /// Names are matched exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| RequestError::UnknownOperation(s.to_string()))
    }
}
