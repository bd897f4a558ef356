//! Wire types for `/api/user`.

use serde::{Deserialize, Deserializer, Serialize};
use ustr::Ustr;

/// Opaque backend identifier (`_id`).
///
/// Ids are compared on every update and delete completion, so they are interned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct UserId(Ustr);

impl UserId {
    pub fn new(id: &str) -> Self {
        Self(Ustr::from(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(Ustr::from(&value))
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0.as_str().to_owned()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::User, Self::Admin];

    /// Label shown in the role badge and the role picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

/// A user as returned by the backend.
///
/// There is deliberately no password field: anything the backend echoes back
/// under `password` is dropped while deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawUserRecord")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub employee_code: String,
    pub medical_card_number: String,
    pub address: String,
    pub balance: f64,
    pub role: Role,
}

/// `UserRecord` as it may arrive: `_id` and/or `id`, nullable text fields.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUserRecord {
    #[serde(rename = "_id", default)]
    mongo_id: Option<UserId>,
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    employee_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    medical_card_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    balance: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    role: Role,
}

impl TryFrom<RawUserRecord> for UserRecord {
    type Error = &'static str;

    fn try_from(raw: RawUserRecord) -> Result<Self, Self::Error> {
        // `_id` wins when both are present.
        let id = raw.mongo_id.or(raw.id).ok_or("missing field `_id`")?;
        Ok(Self {
            id,
            name: raw.name,
            email: raw.email,
            employee_code: raw.employee_code,
            medical_card_number: raw.medical_card_number,
            address: raw.address,
            balance: raw.balance,
            role: raw.role,
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of `POST /api/user`.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub employee_code: String,
    pub medical_card_number: String,
    pub address: String,
    pub balance: f64,
    pub role: Role,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("employee_code", &self.employee_code)
            .field("medical_card_number", &self.medical_card_number)
            .field("address", &self.address)
            .field("balance", &self.balance)
            .field("role", &self.role)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `{ "data": ... }` wrapper used by the list and create endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
