//! Search and facet filtering over in-memory record lists.
//!
//! Every listing page narrows its records the same way: a free-text query
//! matched case-insensitively as a substring of one or more string fields,
//! combined with an equality match on a single categorical field (the
//! "facet") unless the facet filter is `all`. Results keep the original
//! record order.
//!
//! ```rust
//! use retail_ops_core::{FacetFilter, Faceted, SearchQuery, Searchable, filter_records};
//!
//! struct Row { name: &'static str, open: bool }
//!
//! impl Searchable for Row {
//!     fn search_fields(&self) -> Vec<&str> { vec![self.name] }
//! }
//!
//! impl Faceted for Row {
//!     type Facet = bool;
//!     fn facet(&self) -> bool { self.open }
//! }
//!
//! let rows = [Row { name: "Bread", open: true }, Row { name: "Milk", open: false }];
//! let hits = filter_records(&rows, &SearchQuery::new("BREAD"), &FacetFilter::All);
//! assert_eq!(hits.len(), 1);
//! let hits = filter_records(&rows, &SearchQuery::default(), &FacetFilter::Only(false));
//! assert_eq!(hits[0].name, "Milk");
//! ```

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::types::status::ParseStatusError;

/// Key that disables a facet filter.
pub const ALL_KEY: &str = "all";

/// Errors produced while interpreting listing query parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The facet value names no known variant.
    #[error(transparent)]
    UnknownFacet(#[from] ParseStatusError),
}

/// A record whose string fields can be searched.
pub trait Searchable {
    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

/// A record with a single categorical field used for filtering.
pub trait Faceted {
    /// The facet's value type (usually a status enum).
    type Facet: PartialEq + Copy;

    /// The record's facet value.
    fn facet(&self) -> Self::Facet;
}

/// Normalized free-text search input.
///
/// Stores the lowercased needle; the empty needle matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Build a query from user input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            raw: input.to_owned(),
            needle: input.to_lowercase(),
        }
    }

    /// Build a query from an optional query-string value.
    #[must_use]
    pub fn from_param(input: Option<&str>) -> Self {
        input.map_or_else(Self::default, Self::new)
    }

    /// The input exactly as the user typed it (for echoing back into forms).
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether any of `fields` contains the needle, ignoring case.
    #[must_use]
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.is_empty()
            || fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Categorical filter: either everything, or records whose facet equals one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetFilter<F> {
    /// No facet restriction.
    #[default]
    All,
    /// Only records whose facet equals this value.
    Only(F),
}

impl<F: PartialEq> FacetFilter<F> {
    /// Whether a facet value passes this filter.
    #[must_use]
    pub fn admits(&self, value: &F) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<F> FacetFilter<F>
where
    F: FromStr<Err = ParseStatusError>,
{
    /// Parse an optional query-string value.
    ///
    /// Missing, empty, and `all` (any case) all mean [`FacetFilter::All`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownFacet`] when the value names no variant.
    pub fn from_param(value: Option<&str>) -> Result<Self, QueryError> {
        match value.map(str::trim) {
            None => Ok(Self::All),
            Some(v) if v.is_empty() || v.eq_ignore_ascii_case(ALL_KEY) => Ok(Self::All),
            Some(v) => Ok(Self::Only(v.parse()?)),
        }
    }
}

impl<F: fmt::Display> FacetFilter<F> {
    /// The URL key of the active filter (`all` when unrestricted).
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::All => ALL_KEY.to_owned(),
            Self::Only(value) => value.to_string(),
        }
    }
}

impl<F: Serialize> Serialize for FacetFilter<F> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str(ALL_KEY),
            Self::Only(value) => value.serialize(serializer),
        }
    }
}

/// Return the records matching both the text query and the facet filter,
/// in original order.
#[must_use]
pub fn filter_records<'a, T>(
    records: &'a [T],
    query: &SearchQuery,
    filter: &FacetFilter<T::Facet>,
) -> Vec<&'a T>
where
    T: Searchable + Faceted,
{
    records
        .iter()
        .filter(|record| filter.admits(&record.facet()))
        .filter(|record| query.matches_any(record.search_fields()))
        .collect()
}
