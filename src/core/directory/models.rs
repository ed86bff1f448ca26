//! Employee record types as delivered by the randomuser.me API.
//!
//! Only the fields the directory actually reads are modelled. Everything
//! else in the payload is ignored by serde. Fields that are missing, `null`,
//! or of an unexpected type fall back to empty values and render as blank
//! text; one malformed record never fails the whole payload.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::dob::Timestamp;

/// Deserialize `T`, substituting `T::default()` for `null` or a mistyped value.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// One fetched person's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRecord {
    #[serde(deserialize_with = "lenient")]
    pub login: Login,
    #[serde(deserialize_with = "lenient")]
    pub name: PersonName,
    #[serde(deserialize_with = "lenient")]
    pub email: String,
    #[serde(deserialize_with = "lenient")]
    pub phone: String,
    #[serde(deserialize_with = "lenient")]
    pub location: Location,
    #[serde(deserialize_with = "lenient")]
    pub picture: Picture,
    #[serde(deserialize_with = "lenient")]
    pub dob: DateOfBirth,
}

impl EmployeeRecord {
    /// Decode one entry of the API's `results` array.
    ///
    /// Entries that are not objects become blank records.
    pub fn from_json(value: serde_json::Value) -> Self {
        Self::deserialize(value).unwrap_or_else(|e| {
            log::warn!("Unreadable employee record, rendering blank: {e}");
            Self::default()
        })
    }

    /// Stable identifier used to correlate a card with its record.
    pub fn id(&self) -> &str {
        &self.login.uuid
    }

    /// `first + " " + last`, exactly as displayed and searched.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// `city, state` line shown on grid cards.
    pub fn city_state(&self) -> String {
        format!("{}, {}", self.location.city, self.location.state)
    }

    /// `number name, city, state, postcode` line shown in the profile modal.
    pub fn street_address(&self) -> String {
        format!(
            "{} {}, {}, {}, {}",
            self.location.street.number,
            self.location.street.name,
            self.location.city,
            self.location.state,
            self.location.postcode
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Login {
    #[serde(deserialize_with = "lenient")]
    pub uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonName {
    #[serde(deserialize_with = "lenient")]
    pub first: String,
    #[serde(deserialize_with = "lenient")]
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "lenient")]
    pub street: Street,
    #[serde(deserialize_with = "lenient")]
    pub city: String,
    #[serde(deserialize_with = "lenient")]
    pub state: String,
    #[serde(deserialize_with = "lenient")]
    pub postcode: Postcode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Street {
    #[serde(deserialize_with = "lenient")]
    pub number: NumberOrText,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
}

/// A scalar the API sends as a number for some nationalities and a string for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

pub type Postcode = NumberOrText;

impl Default for NumberOrText {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Picture {
    #[serde(deserialize_with = "lenient")]
    pub thumbnail: String,
    #[serde(deserialize_with = "lenient")]
    pub medium: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOfBirth {
    #[serde(deserialize_with = "lenient")]
    pub date: Timestamp,
}

// ── Record collections ──────────────────────────────────────────────────────

/// Immutable set of records fetched for this session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<[EmployeeRecord]>,
}

impl RecordStore {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full fetched set as an active list. Shares storage with the store.
    pub fn full_list(&self) -> ActiveList {
        ActiveList {
            records: Arc::clone(&self.records),
        }
    }
}

/// Ordered records currently eligible for modal navigation.
///
/// Replaced wholesale whenever the search query changes; never mutated.
#[derive(Debug, Clone, Default)]
pub struct ActiveList {
    records: Arc<[EmployeeRecord]>,
}

impl ActiveList {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Position of the record with `id` inside this list.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Whether both handles point at the same list instance.
    pub fn ptr_eq(&self, other: &ActiveList) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Deref for ActiveList {
    type Target = [EmployeeRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<EmployeeRecord>> for ActiveList {
    fn from(records: Vec<EmployeeRecord>) -> Self {
        Self::new(records)
    }
}
