use std::collections::HashMap;
use std::fmt::{self, Display};

use chrono::{DateTime, Duration, Utc};
use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl From<&str> for QueryKey {
    fn from(value: &str) -> Self {
        QueryKey(vec![value.to_string()])
    }
}

impl<const N: usize> From<[&str; N]> for QueryKey {
    fn from(value: [&str; N]) -> Self {
        QueryKey(value.iter().map(|segment| segment.to_string()).collect())
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[derive(Clone, Debug)]
struct CachedQuery {
    value: serde_json::Value,
    updated_at: DateTime<Utc>,
    invalidated: bool,
}

/// Shared cache of query results, keyed by [`QueryKey`] and stored as JSON so
/// one map can hold any serializable type.
#[derive(Clone, Copy, Debug)]
pub struct QueryClient {
    entries: RwSignal<HashMap<QueryKey, CachedQuery>>,
    stale_time: Duration,
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self::with_stale_time(Duration::zero())
    }

    pub fn with_stale_time(stale_time: Duration) -> Self {
        Self {
            entries: RwSignal::new(HashMap::new()),
            stale_time,
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    pub fn set_query_data<T: Serialize>(&self, key: impl Into<QueryKey>, value: &T) -> AppResult<()> {
        self.set_query_data_at(key, value, Utc::now())
    }

    pub fn set_query_data_at<T: Serialize>(
        &self,
        key: impl Into<QueryKey>,
        value: &T,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let key = key.into();
        let value = serde_json::to_value(value)?;
        tracing::debug!(%key, "query data set");
        self.entries.update(|entries| {
            entries.insert(
                key,
                CachedQuery {
                    value,
                    updated_at: now,
                    invalidated: false,
                },
            );
        });
        Ok(())
    }

    pub fn get_query_data<T: DeserializeOwned>(&self, key: impl Into<QueryKey>) -> AppResult<Option<T>> {
        let key = key.into();
        self.entries.with(|entries| {
            entries
                .get(&key)
                .map(|cached| serde_json::from_value(cached.value.clone()))
                .transpose()
                .map_err(AppError::from)
        })
    }

    pub fn is_stale(&self, key: impl Into<QueryKey>, now: DateTime<Utc>) -> bool {
        let key = key.into();
        self.entries.with_untracked(|entries| match entries.get(&key) {
            Some(cached) => cached.invalidated || now - cached.updated_at >= self.stale_time,
            None => true,
        })
    }

    /// Marks an entry stale without dropping its data. Returns false if the key is unknown.
    pub fn invalidate(&self, key: impl Into<QueryKey>) -> bool {
        let key = key.into();
        let mut found = false;
        self.entries.update(|entries| {
            if let Some(cached) = entries.get_mut(&key) {
                cached.invalidated = true;
                found = true;
            }
        });
        if found {
            log::debug!("invalidated query {key}");
        }
        found
    }

    pub fn remove(&self, key: impl Into<QueryKey>) -> bool {
        let key = key.into();
        let mut removed = false;
        self.entries.update(|entries| removed = entries.remove(&key).is_some());
        removed
    }

    pub fn clear(&self) {
        self.entries.update(|entries| entries.clear());
    }

    pub fn len(&self) -> usize {
        self.entries.with_untracked(|entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn provide_query_client(client: QueryClient) -> QueryClient {
    if let Some(existing) = use_context::<QueryClient>() {
        return existing;
    }
    provide_context(client);
    client
}

pub fn use_query_client() -> AppResult<QueryClient> {
    use_context::<QueryClient>().ok_or(AppError::MissingContext("QueryClient"))
}
