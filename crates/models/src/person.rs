use serde::{Deserialize, Serialize};

/// A person record as stored and served by the registry.
///
/// Value object: equality is structural, and updates to the store always
/// replace the whole record. Both fields are required on the wire; absence
/// fails deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub email: String,
    pub name: String,
}

impl Person {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self { email: email.into(), name: name.into() }
    }
}
