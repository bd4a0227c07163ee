// src/application/filter.rs
//
// Combines optional per-field constraints into one predicate over a record
// collection. Active constraints are AND-ed; output keeps input order.
use crate::constants::ALL_SENTINEL;
use std::collections::BTreeMap;
use std::fmt::Debug;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Field must equal the filter value.
    Exact,
    /// Field must contain the filter value, ignoring case.
    Contains,
}

/// A filterable field of one record schema.
pub trait FilterField: Copy + Ord + Debug {
    fn mode(self) -> MatchMode;
}

/// Record type exposing named fields to the filter composer.
pub trait Filterable {
    type Field: FilterField;

    fn field_value(&self, field: Self::Field) -> &str;
}

/// Active constraints of a list screen. Absent fields impose nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<F: FilterField> {
    values: BTreeMap<F, String>,
}

impl<F: FilterField> Default for FilterState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FilterField> FilterState<F> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: F, value: &str) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Set or clear one constraint.
    ///
    /// `None`, the empty string and, for exact fields, the "All" sentinel
    /// all clear the constraint.
    pub fn set(&mut self, field: F, value: Option<&str>) {
        match value.filter(|v| !is_unconstrained(field, v)) {
            Some(v) => {
                self.values.insert(field, v.to_string());
            }
            None => {
                self.values.remove(&field);
            }
        }
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn active(&self) -> impl Iterator<Item = (F, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Filterable<Field = F>,
    {
        self.active().all(|(field, wanted)| {
            let actual = record.field_value(field);
            match field.mode() {
                MatchMode::Exact => actual == wanted,
                MatchMode::Contains => actual.to_lowercase().contains(&wanted.to_lowercase()),
            }
        })
    }
}

fn is_unconstrained<F: FilterField>(field: F, value: &str) -> bool {
    value.is_empty() || (field.mode() == MatchMode::Exact && value == ALL_SENTINEL)
}

/// Records satisfying every active constraint, in input order.
pub fn apply<'a, R: Filterable>(records: &'a [R], filters: &FilterState<R::Field>) -> Vec<&'a R> {
    records.iter().filter(|r| filters.matches(*r)).collect()
}

/// Positions of the matching records in `records`.
pub fn matching_indices<R: Filterable>(records: &[R], filters: &FilterState<R::Field>) -> Vec<usize> {
    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| filters.matches(*r))
        .map(|(i, _)| i)
        .collect();
    trace!(total = records.len(), matched = indices.len(), "Applied filters");
    indices
}
