//! Test Fixtures

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::core::directory::{DirectoryError, DirectoryResult, EmployeeRecord, EmployeeSource};

// =============================================================================
// Record Fixtures
// =============================================================================

/// Build a record with the fields the gallery and search care about.
pub fn employee(id: &str, first: &str, last: &str) -> EmployeeRecord {
    let mut record = EmployeeRecord::default();
    record.login.uuid = id.into();
    record.name.first = first.into();
    record.name.last = last.into();
    record.email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
    record.phone = "(555) 010-0000".into();
    record.location.city = "Springfield".into();
    record.location.state = "Illinois".into();
    record.picture.thumbnail = format!("https://img.example/thumb/{id}.jpg");
    record.picture.medium = format!("https://img.example/med/{id}.jpg");
    record
}

/// Five records in a fixed order.
pub fn sample_directory() -> Vec<EmployeeRecord> {
    vec![
        employee("ada", "Ada", "Lovelace"),
        employee("alan", "Alan", "Turing"),
        employee("grace", "Grace", "Hopper"),
        employee("linus", "Linus", "Torvalds"),
        employee("barbara", "Barbara", "Liskov"),
    ]
}

/// A randomuser.me style response body with `count` results.
pub fn randomuser_body(count: usize) -> Value {
    let results: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "gender": "female",
                "name": { "title": "Ms", "first": format!("First{i}"), "last": "Nichols" },
                "location": {
                    "street": { "number": 8929, "name": "Valwood Pkwy" },
                    "city": "Billings",
                    "state": "Michigan",
                    "country": "United States",
                    "postcode": 63104,
                    "coordinates": { "latitude": "-69.8246", "longitude": "134.8719" },
                    "timezone": { "offset": "+9:30", "description": "Adelaide, Darwin" }
                },
                "email": format!("first{i}.nichols@example.com"),
                "login": { "uuid": format!("uuid-{i}"), "username": "yellowpeacock117" },
                "dob": { "date": "1992-03-08T15:13:16.688Z", "age": 30 },
                "phone": "(272) 790-0888",
                "cell": "(489) 330-2385",
                "picture": {
                    "large": "https://randomuser.me/api/portraits/women/75.jpg",
                    "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                    "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
                },
                "nat": "US"
            })
        })
        .collect();

    json!({
        "results": results,
        "info": { "seed": "56d27f4a53bd5441", "results": count, "page": 1, "version": "1.4" }
    })
}

// =============================================================================
// Record Sources
// =============================================================================

/// Source that always returns the same records.
pub struct StaticSource {
    records: Vec<EmployeeRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl EmployeeSource for StaticSource {
    async fn fetch_employees(&self) -> DirectoryResult<Vec<EmployeeRecord>> {
        Ok(self.records.clone())
    }
}

/// Source whose fetch always fails with the given HTTP status.
pub struct FailingSource {
    pub status: u16,
}

#[async_trait]
impl EmployeeSource for FailingSource {
    async fn fetch_employees(&self) -> DirectoryResult<Vec<EmployeeRecord>> {
        Err(DirectoryError::Status(self.status))
    }
}
