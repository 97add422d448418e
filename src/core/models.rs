use serde::{Deserialize, Serialize};

use crate::core::wire::null_as_default;

/// Paging metadata returned with every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pagination {
    /// Page size that was applied.
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u64,
    /// Number of records skipped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: u64,
    /// Number of records on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    /// Total number of records matching the query.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

/// A page of records: `{"pagination": {...}, "data": [...]}`.
///
/// `pagination.count` is expected to equal `data.len()`; the client does not check it.
/// A `null` `pagination` or `data` decodes as empty, matching a missing field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    /// Paging metadata.
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
    /// The records on this page.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// `true` if records remain beyond this page (`offset + count < total`).
    ///
    /// Fetching them is up to the caller: bump `offset` and call again.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.pagination.offset.saturating_add(self.pagination.count) < self.pagination.total
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
