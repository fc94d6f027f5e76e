//! Person and group records.
//!
//! Ids come from loosely curated source data, so they are kept as opaque
//! strings. People and groups have separate id spaces.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a person.
    PersonId
);

string_id!(
    /// Identifier of a group. Used as the link label of a hop.
    GroupId
);

/// An individual in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    /// Display name. Not unique.
    pub name: String,
    pub birth: Option<u16>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth: Option<u16>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth,
        }
    }
}

/// A shared production linking the people who appeared in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    pub year: Option<u16>,
}

impl Group {
    pub fn new(id: impl Into<GroupId>, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
        }
    }
}

/// A node of the bipartite membership graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Person(Person),
    Group(Group),
}

impl Entity {
    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Entity::Person(person) => Some(person),
            Entity::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Entity::Group(group) => Some(group),
            Entity::Person(_) => None,
        }
    }
}

/// Parses a year column leniently.
///
/// Blank or non-numeric values yield `None` instead of rejecting the row.
pub fn parse_year(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("1958"), Some(1958));
        assert_eq!(parse_year(" 1992 "), Some(1992));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("n/a"), None);
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = PersonId::new("102");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"102\"");

        let back: GroupId = serde_json::from_str("\"104257\"").unwrap();
        assert_eq!(back.as_str(), "104257");
    }

    #[test]
    fn test_entity_accessors() {
        let person = Entity::Person(Person::new("1", "A", None));
        let group = Entity::Group(Group::new("1", "G", Some(2000)));

        assert!(person.as_group().is_none());
        assert_eq!(person.as_person().map(|p| p.name.as_str()), Some("A"));
        assert_eq!(group.as_group().map(|g| g.title.as_str()), Some("G"));
        assert!(group.as_person().is_none());
    }
}
