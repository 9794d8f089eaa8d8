//! Wire DTOs for the events REST API.
//!
//! DESIGN
//! ======
//! The backend is loosely typed: flags arrive as `0`/`1`/`"1"`/`true`, prices
//! as numbers or numeric strings, ids occasionally as strings. Decoding is
//! lenient per field and strict about overall shape, so a malformed payload
//! still fails loudly instead of rendering half an event.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An authenticated user as returned by `/api/user` and `/api/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Name to greet the user with, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { &self.email } else { &self.name }
    }
}

/// Event owner summary embedded in public event payloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
}

/// A schedulable gathering with visibility and an optional ticket price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO date or datetime string as stored by the backend.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub date: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub private: bool,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_paid: bool,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<String>,
    /// Storage-relative image path (served under `/storage/`).
    #[serde(default)]
    pub image: Option<String>,
    /// Absolute image URL, when the backend resolves it.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub user: Option<Organizer>,
}

impl Event {
    /// Whether `user_id` created this event.
    #[must_use]
    pub fn is_owned_by(&self, user_id: u64) -> bool {
        self.user_id == Some(user_id) || self.user.as_ref().and_then(|u| u.id) == Some(user_id)
    }

    /// Whether joining requires going through checkout.
    #[must_use]
    pub fn requires_payment(&self) -> bool {
        self.is_paid && self.price > 0.0
    }

    /// Resolve the banner image URL against the API base URL.
    #[must_use]
    pub fn image_src(&self, base_url: &str) -> Option<String> {
        if let Some(url) = self.image_url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_owned());
        }
        self.image
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}/storage/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/')))
    }

    /// Date portion (`YYYY-MM-DD`) of the stored date.
    #[must_use]
    pub fn day(&self) -> &str {
        self.date.split('T').next().unwrap_or_default()
    }

    /// Organizer display name, if the payload carried one.
    #[must_use]
    pub fn organizer_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str()).filter(|n| !n.is_empty())
    }
}

/// A user attending an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&User> for Participant {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: Some(user.email.clone()),
        }
    }
}

/// Token + user pair returned by `/api/login` and `/api/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// JSON body for `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// JSON body for `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Envelope of the soft `GET /api/me` endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct MeResponse {
    #[serde(default = "default_true")]
    pub success: bool,
    pub data: Option<User>,
}

/// Response of `POST /api/events/:id/checkout`.
#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutResponse {
    #[serde(default)]
    pub init_point: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Peel a single `{ "data": ... }` envelope, leaving bare payloads untouched.
pub(crate) fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}

/// Find the list inside a bare array, `{data: [...]}`, `{data: {data: [...]}}`
/// (paginated) or `{events: [...]}`. Anything else is an empty list.
pub(crate) fn extract_list(value: Value) -> Value {
    match value {
        Value::Array(_) => value,
        Value::Object(mut map) => {
            if let Some(inner) = map.remove("data") {
                return extract_list(inner);
            }
            if let Some(inner) = map.remove("events") {
                return extract_list(inner);
            }
            Value::Array(Vec::new())
        }
        _ => Value::Array(Vec::new()),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| D::Error::custom(format!("expected numeric id, got {value}")))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected numeric id, got {value}")))
}

fn id_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(false),
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(D::Error::custom(format!("expected boolean flag, got {value}"))),
        },
        _ => Err(D::Error::custom(format!("expected boolean flag, got {value}"))),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null => Ok(0.0),
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("price out of range")),
        Value::String(raw) if raw.trim().is_empty() => Ok(0.0),
        Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| D::Error::custom(format!("expected numeric price, got {value}"))),
        _ => Err(D::Error::custom(format!("expected numeric price, got {value}"))),
    }
}

/// Items come back as a JSON array, a JSON-encoded array string, or null.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let list = match value {
        Value::Null => return Ok(Vec::new()),
        Value::String(raw) if raw.trim().is_empty() => return Ok(Vec::new()),
        Value::String(raw) => serde_json::from_str::<Value>(&raw).map_err(D::Error::custom)?,
        other => other,
    };
    match list {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect()),
        other => Err(D::Error::custom(format!("expected item list, got {other}"))),
    }
}
