use std::fmt;
use std::str::FromStr;

use crate::error::ApexDocError;

/// A dotted lookup path of one to three identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPath {
    /// `Class`
    Class(String),
    /// `First.Second`: either `Class.member` or `Namespace.Class`.
    Pair(String, String),
    /// `Namespace.Class.member`
    Qualified {
        namespace: String,
        class: String,
        member: String,
    },
}

impl FromStr for QueryPath {
    type Err = ApexDocError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &'static str| ApexDocError::InvalidPath {
            path: raw.to_string(),
            reason,
        };

        let segments: Vec<&str> = raw.trim().split('.').map(str::trim).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(invalid("empty identifier"));
        }

        match segments.as_slice() {
            [class] => Ok(QueryPath::Class(class.to_string())),
            [first, second] => Ok(QueryPath::Pair(first.to_string(), second.to_string())),
            [namespace, class, member] => Ok(QueryPath::Qualified {
                namespace: namespace.to_string(),
                class: class.to_string(),
                member: member.to_string(),
            }),
            _ => Err(invalid("expected at most 3 identifiers")),
        }
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryPath::Class(class) => write!(f, "{class}"),
            QueryPath::Pair(first, second) => write!(f, "{first}.{second}"),
            QueryPath::Qualified {
                namespace,
                class,
                member,
            } => write!(f, "{namespace}.{class}.{member}"),
        }
    }
}
