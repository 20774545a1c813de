//! Partial-update resolution.
//!
//! An update payload arrives with every field optional. Each resource turns
//! its validated payload into an [`UpdateSet`]: the ordered column/value
//! assignments to apply in a single `UPDATE ... RETURNING` statement. Column
//! names are `&'static str` literals picked by the resource's resolver, so
//! client-supplied keys can never reach the SQL text.
//!
//! Absent fields and fields explicitly set to `null` both deserialize to
//! `None` and are skipped. A set with no payload columns is rejected with
//! [`CoreError::NoFields`] before the audit columns are appended.

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Audit column stamped on every successful update.
pub const UPDATED_AT: &str = "updated_at";
/// Audit column naming the acting user of the last update.
pub const UPDATED_BY: &str = "updated_by";

/// A typed value bound to one column of an update.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(String),
    /// Nullable text column; `None` writes SQL `NULL`.
    OptionalText(Option<String>),
    Id(DbId),
    /// Nullable id column; `None` writes SQL `NULL`.
    OptionalId(Option<DbId>),
    Timestamp(Timestamp),
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(value)
    }
}

impl From<DbId> for ColumnValue {
    fn from(value: DbId) -> Self {
        ColumnValue::Id(value)
    }
}

impl From<Timestamp> for ColumnValue {
    fn from(value: Timestamp) -> Self {
        ColumnValue::Timestamp(value)
    }
}

/// One `column = value` pair of an update statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: &'static str,
    pub value: ColumnValue,
}

/// Ordered set of column assignments for a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    assignments: Vec<Assignment>,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `column`, replacing any earlier assignment to the same column.
    pub fn set(&mut self, column: &'static str, value: impl Into<ColumnValue>) -> &mut Self {
        let value = value.into();
        match self.assignments.iter_mut().find(|a| a.column == column) {
            Some(existing) => existing.value = value,
            None => self.assignments.push(Assignment { column, value }),
        }
        self
    }

    /// Assign `column` only when the payload supplied a value.
    pub fn set_if_present<T: Into<ColumnValue>>(
        &mut self,
        column: &'static str,
        value: Option<T>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.set(column, value);
        }
        self
    }

    /// The value currently assigned to `column`, if any.
    pub fn get(&self, column: &str) -> Option<&ColumnValue> {
        self.assignments
            .iter()
            .find(|a| a.column == column)
            .map(|a| &a.value)
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Column names in assignment order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assignments.iter().map(|a| a.column)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    /// Close the set: reject an empty payload, then stamp the audit columns.
    ///
    /// The returned set always contains `updated_at` and `updated_by` after
    /// the payload columns.
    pub fn finish(mut self, now: Timestamp, updated_by: Option<DbId>) -> Result<Self, CoreError> {
        if self.is_empty() {
            return Err(CoreError::NoFields);
        }
        self.set(UPDATED_AT, now);
        self.set(UPDATED_BY, ColumnValue::OptionalId(updated_by));
        Ok(self)
    }
}
