//! Client Models
//!
//! Data structures matching the remote task store payloads.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Identifier used by the remote store for tasks and users.
///
/// The store hands out numbers, while control values read back from the page
/// are strings. Equality is defined on the canonical text, so `5` and `"5"`
/// name the same entity. Numeric ids keep the exact JSON number they
/// arrived as, including floats and values past `i64`.
#[derive(Debug, Clone)]
pub struct EntityId {
    text: String,
    number: Option<Number>,
}

pub type TaskId = EntityId;
pub type UserId = EntityId;

impl EntityId {
    /// Build an id from a control value. Integer literals become numeric ids.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if let Ok(number) = value.parse::<i64>() {
            return Self::from(number);
        }
        match value.parse::<u64>() {
            Ok(number) => Self::from_number(Number::from(number)),
            Err(_) => Self::from(value),
        }
    }

    fn from_number(number: Number) -> Self {
        Self {
            text: number.to_string(),
            number: Some(number),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_numeric(&self) -> bool {
        self.number.is_some()
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::from_number(Number::from(value))
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self {
            text: value.to_string(),
            number: None,
        }
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(Number),
    Text(String),
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.number {
            Some(number) => number.serialize(serializer),
            None => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(number) => Self::from_number(number),
            RawId::Text(text) => Self::from(text.as_str()),
        })
    }
}

/// Task data structure (matches remote store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    #[serde(rename = "userId")]
    pub owner_id: UserId,
    pub title: String,
    pub completed: bool,
}

/// Body of a create request; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    #[serde(rename = "userId")]
    pub owner_id: UserId,
    pub title: String,
    pub completed: bool,
}

impl NewTask {
    /// A task that starts out incomplete.
    pub fn new(owner_id: UserId, title: impl Into<String>) -> Self {
        Self {
            owner_id,
            title: title.into(),
            completed: false,
        }
    }
}

/// User data structure. Extra fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}
