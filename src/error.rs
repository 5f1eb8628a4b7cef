use std::fmt;
use thiserror::Error;

/// Which keyed collection of an element an error refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Attributes,
    Children,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attributes => write!(f, "attributes"),
            Self::Children => write!(f, "children"),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("duplicate key {key} in {collection}")]
    DuplicateKey { collection: Collection, key: u64 },

    #[error("key {key} not found in {collection}")]
    NotFound { collection: Collection, key: u64 },
}

impl TreeError {
    pub fn collection(&self) -> Collection {
        match self {
            Self::DuplicateKey { collection, .. } | Self::NotFound { collection, .. } => {
                *collection
            }
        }
    }

    pub fn key(&self) -> u64 {
        match self {
            Self::DuplicateKey { key, .. } | Self::NotFound { key, .. } => *key,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
