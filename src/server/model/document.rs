//! Generic document model and the query filters evaluated against it.
//!
//! Every resource is persisted as a JSON document addressed by collection and id. The
//! repository converts rows into [`Document`] at the data layer boundary, and resource
//! models in this module's siblings deserialize their typed shape out of its body.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::model::api::DeletedDto;

/// A stored document with its store-managed timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Document id, unique within its collection.
    pub id: String,
    /// Top-level fields of the document body.
    pub data: Map<String, Value>,
    /// Stamped once when the document is first written.
    pub created_at: DateTime<Utc>,
    /// Re-stamped on every write.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Converts an entity model to a document.
    ///
    /// A body that is not a JSON object is treated as empty.
    ///
    /// # Arguments
    /// - `entity`: The entity model from the database
    ///
    /// # Returns
    /// - `Document`: The converted document
    pub fn from_entity(entity: entity::document::Model) -> Self {
        let data = match entity.data {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            id: entity.id,
            data,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Looks up a field by dotted path, e.g. `geopoint.latitude`.
    pub fn field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.data.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Deserializes the document body into a typed shape.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.data.clone()))
    }

    /// Flattens the document into the raw shape returned to clients: the body fields plus
    /// `id`, `createdAt` and `updatedAt`.
    pub fn into_value(self) -> Value {
        let mut map = self.data;
        map.insert("id".to_string(), Value::String(self.id));
        map.insert(
            "createdAt".to_string(),
            Value::String(self.created_at.to_rfc3339()),
        );
        map.insert(
            "updatedAt".to_string(),
            Value::String(self.updated_at.to_rfc3339()),
        );
        Value::Object(map)
    }
}

/// Result of removing a document.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedDocument {
    pub id: String,
    pub deleted: bool,
}

impl DeletedDocument {
    pub fn into_dto(self) -> DeletedDto {
        DeletedDto {
            id: self.id,
            deleted: self.deleted,
        }
    }
}

/// Comparison applied by a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// The field is an array holding the value.
    ArrayContains,
    /// The field is an array holding at least one of the values in the given array.
    ArrayContainsAny,
    /// The field equals one of the values in the given array.
    In,
}

/// A single field condition. Filters passed together are ANDed.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Dotted path into the document body.
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Shorthand for an equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, FilterOp::Equal, value)
    }

    /// Shorthand for an array membership filter.
    pub fn array_contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, FilterOp::ArrayContains, value)
    }

    /// Evaluates the filter against a document.
    ///
    /// A document without the field never matches, whatever the operator.
    pub fn matches(&self, document: &Document) -> bool {
        let Some(field) = document.field(&self.field) else {
            return false;
        };

        match self.op {
            FilterOp::Equal => field == &self.value,
            FilterOp::NotEqual => field != &self.value,
            FilterOp::LessThan => compare(field, &self.value) == Some(Ordering::Less),
            FilterOp::LessThanOrEqual => matches!(
                compare(field, &self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FilterOp::GreaterThan => compare(field, &self.value) == Some(Ordering::Greater),
            FilterOp::GreaterThanOrEqual => matches!(
                compare(field, &self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FilterOp::ArrayContains => field
                .as_array()
                .is_some_and(|items| items.contains(&self.value)),
            FilterOp::ArrayContainsAny => match (field.as_array(), self.value.as_array()) {
                (Some(items), Some(candidates)) => {
                    candidates.iter().any(|candidate| items.contains(candidate))
                }
                _ => false,
            },
            FilterOp::In => self
                .value
                .as_array()
                .is_some_and(|candidates| candidates.contains(field)),
        }
    }
}

/// Orders two values of the same scalar kind. Numbers compare numerically and strings
/// lexicographically; any other pairing is unordered.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
