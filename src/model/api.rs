use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Success envelope wrapping every payload returned by the API.
///
/// `message` is present on mutations, `count` on list and search responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wraps a list, setting `count` to its length.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len() as u64),
            data: Some(items),
        }
    }
}

/// Success envelope without a payload, used by delete endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
    /// Number of affected rows for bulk operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Body of the bulk delete endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct BulkDeleteDto {
    #[serde(default)]
    pub ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct HealthDto {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Deserializes a field where `null` differs from an absent value.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]`: an absent field stays
/// `None`, `null` becomes `Some(None)` and a value becomes `Some(Some(value))`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
