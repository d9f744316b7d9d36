use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Type-safe identifier for Cats.
///
/// Displays as the bare number so it can be dropped straight into `/cats/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatId(pub u32);

impl From<u32> for CatId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A path segment that is not the canonical form of any [`CatId`].
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid cat id: {0}")]
pub struct InvalidCatId(pub String);

/// Accepts only the form [`Display`] produces: ASCII digits, no sign, no leading zeros.
impl FromStr for CatId {
    type Err = InvalidCatId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(InvalidCatId(s.to_string()));
        }
        s.parse().map(Self).map_err(|_| InvalidCatId(s.to_string()))
    }
}

/// A cat record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Cat`](#impl-ActorEntity-for-Cat) for details on:
/// - Creation parameters ([`CatCreate`])
/// - Update parameters ([`CatUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cat {
    pub id: CatId,
    pub name: String,
    pub color: String,
}

impl Cat {
    pub fn new(id: CatId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    /// Canonical resource URL, the redirect target after create and update.
    pub fn path(&self) -> String {
        cat_path(self.id)
    }
}

/// `/cats/{id}`
pub fn cat_path(id: CatId) -> String {
    format!("/cats/{id}")
}

/// Whitelisted fields accepted on create.
///
/// Absent fields stay `None` and are reported by validation, not by parameter parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatCreate {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Whitelisted fields accepted on update. `name` is immutable after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatUpdate {
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_id_round_trips_through_path_segment() {
        let id: CatId = "12".parse().unwrap();
        assert_eq!(id, CatId(12));
        assert_eq!(cat_path(id), "/cats/12");
        assert!("abc".parse::<CatId>().is_err());
        assert!("-1".parse::<CatId>().is_err());
    }

    #[test]
    fn test_cat_id_only_parses_canonical_form() {
        for raw in ["+1", "007", "01", "", " 1", "1 ", "4294967296"] {
            assert_eq!(
                raw.parse::<CatId>(),
                Err(InvalidCatId(raw.to_string())),
                "{raw:?}"
            );
        }
        assert_eq!("0".parse::<CatId>(), Ok(CatId(0)));
        assert_eq!("4294967295".parse::<CatId>(), Ok(CatId(u32::MAX)));
    }

    #[test]
    fn test_cat_path_uses_assigned_id() {
        let cat = Cat::new(CatId(3), "Tom", "gray");
        assert_eq!(cat.path(), "/cats/3");
    }
}
