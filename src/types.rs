// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The item side of the host contract.
//!
//! The host indexing pipeline owns its items. All a processor gets is a bag of
//! named fields, each holding an ordered list of values. These types model that
//! bag and nothing more: the processor reads one field and writes another.
//!
//! # Field ids
//!
//! | Constant              | Field id               | Role                          |
//! |-----------------------|------------------------|-------------------------------|
//! | `BUNDLE_FIELD_ID`     | `type`                 | Bundle key, single value      |
//! | `WEIGHT_FIELD_ID`     | `sort_priority_weight` | Target, single integer value  |

use serde::{Deserialize, Serialize};

/// Field holding the item's bundle key.
pub const BUNDLE_FIELD_ID: &str = "type";

/// Field the processor writes the resolved weight into.
pub const WEIGHT_FIELD_ID: &str = "sort_priority_weight";

/// A single value stored in an indexed field.
///
/// Hosts hand us JSON-ish data, so a value is either an integer or a string.
/// Untagged so that `["article"]` and `[5]` both parse naturally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl FieldValue {
    /// String view, if this is a text value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            FieldValue::Integer(_) => None,
        }
    }

    /// Integer view, if this is an integer value.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// An indexed field: an ordered list of values.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field {
    values: Vec<FieldValue>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: Vec<FieldValue>) -> Self {
        Self { values }
    }

    /// Values in insertion order.
    #[inline]
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn add_value(&mut self, value: impl Into<FieldValue>) {
        self.values.push(value.into());
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// First value, which is the only one for single-valued fields.
    #[inline]
    pub fn first(&self) -> Option<&FieldValue> {
        self.values.first()
    }
}

/// Anything the host can feed through a processor.
///
/// Absent fields are `None`. A present field may still be empty; the
/// distinction matters because the processor only writes into fields the
/// index actually declared.
pub trait IndexItem {
    fn field(&self, id: &str) -> Option<&Field>;

    fn field_mut(&mut self, id: &str) -> Option<&mut Field>;

    /// Ids of every field the item carries.
    fn field_ids(&self) -> Vec<&str>;

    /// The bundle key, if the bundle field is present and its first value is
    /// a non-empty string.
    fn bundle(&self) -> Option<&str> {
        self.field(BUNDLE_FIELD_ID)
            .and_then(Field::first)
            .and_then(FieldValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// The weight already written to the item, if any.
    fn weight(&self) -> Option<i64> {
        self.field(WEIGHT_FIELD_ID)
            .and_then(Field::first)
            .and_then(FieldValue::as_integer)
    }
}
