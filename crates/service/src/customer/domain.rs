use serde::{Deserialize, Serialize};

/// A stored customer. `id` is assigned by the storage backend and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Registration input; a customer that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self { name: name.into(), email: email.into(), age }
    }

    pub(crate) fn with_id(self, id: i32) -> Customer {
        Customer { id, name: self.name, email: self.email, age: self.age }
    }
}

impl From<models::customer::Model> for Customer {
    fn from(m: models::customer::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email, age: m.age }
    }
}
