//! Query-string representation of the catalog filter/sort state.
//!
//! Only single-valued dimensions are carried: a dimension holding more than one
//! selected value emits no parameter, and parsing seeds at most one value per
//! dimension. The price range never travels through the query string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::FilterState;
use crate::product::BoardType;
use crate::sort::SortKey;

pub const PARAM_TYPE: &str = "type";
pub const PARAM_PURPOSE: &str = "purpose";
pub const PARAM_COLOR: &str = "color";
pub const PARAM_SORT: &str = "sort";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("malformed query string: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),

    #[error("failed to encode query string: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Flat, single-valued, insertion-ordered string map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` string (leading `?` allowed).
    /// The first occurrence of a repeated key wins.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        let mut params = Self::new();
        for (key, value) in decoded {
            if params.get(&key).is_none() {
                params.pairs.push((key, value));
            }
        }
        Ok(params)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the value of `key`, keeping its position, or append it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(pos).1)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_query_string(&self) -> Result<String, QueryError> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

fn single<T>(values: &[T]) -> Option<&T> {
    match values {
        [only] => Some(only),
        _ => None,
    }
}

/// Reflect filter/sort state into query parameters (`type`, `purpose`,
/// `color`, then `sort`, which is always present).
pub fn to_query_params(filter: &FilterState, sort: SortKey) -> QueryParams {
    let mut params = QueryParams::new();
    if let Some(board_type) = single(&filter.types) {
        params.set(PARAM_TYPE, board_type.as_str());
    }
    if let Some(purpose) = single(&filter.purposes) {
        params.set(PARAM_PURPOSE, purpose.as_str());
    }
    if let Some(color) = single(&filter.colors) {
        params.set(PARAM_COLOR, color.as_str());
    }
    params.set(PARAM_SORT, sort.as_str());
    params
}

/// Seed filter/sort state from query parameters.
///
/// Unrecognised `type` or `sort` values are dropped (no constraint / default
/// sort) rather than failing the whole page.
pub fn from_query_params(params: &QueryParams) -> (FilterState, SortKey) {
    let mut filter = FilterState::default();

    if let Some(raw) = params.get(PARAM_TYPE).filter(|v| !v.is_empty()) {
        match raw.parse::<BoardType>() {
            Ok(board_type) => filter.types = vec![board_type],
            Err(e) => tracing::debug!(error = %e, "ignoring type query parameter"),
        }
    }
    if let Some(purpose) = params.get(PARAM_PURPOSE).filter(|v| !v.is_empty()) {
        filter.purposes = vec![purpose.to_string()];
    }
    if let Some(color) = params.get(PARAM_COLOR).filter(|v| !v.is_empty()) {
        filter.colors = vec![color.to_string()];
    }

    let sort = match params.get(PARAM_SORT).filter(|v| !v.is_empty()) {
        Some(raw) => raw.parse::<SortKey>().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "ignoring sort query parameter");
            SortKey::default()
        }),
        None => SortKey::default(),
    };

    (filter, sort)
}
