//! In-memory collection caches.
//!
//! Each upstream collection is cached whole, exactly as each page of the site
//! keeps its own fetched copy. Served data never diverges from last-known-good
//! upstream state: mutations reconcile only after the upstream call succeeds,
//! and a failed refetch keeps whatever was served before.

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::models::{
    Broker, CommercialProject, Identified, Property, PropertyRequirement, RedevelopmentProject,
};
use crate::upstream::{collections, ApiClient};

/// One cached collection. `None` means no fetch has ever succeeded.
pub struct Cache<T> {
    inner: RwLock<Option<Vec<T>>>,
}

impl<T: Identified + Clone> Cache<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Last-known-good copy, if any fetch ever succeeded.
    pub async fn snapshot(&self) -> Option<Vec<T>> {
        self.inner.read().await.clone()
    }

    /// Replace the cached collection after a successful fetch.
    pub async fn fill(&self, items: Vec<T>) {
        *self.inner.write().await = Some(items);
    }

    /// Append a server-returned record after a successful create.
    ///
    /// A cold cache is left cold: patching an empty shell would masquerade as
    /// the whole collection, and the next read fetches the real one anyway.
    pub async fn append(&self, item: T) {
        let mut guard = self.inner.write().await;
        if let Some(items) = guard.as_mut() {
            items.push(item);
        }
    }

    /// Replace the record with a matching id after a successful update.
    ///
    /// A warm cache that has never seen the id gets the record appended; a
    /// cold cache is left cold, as with `append`.
    pub async fn upsert(&self, item: T) {
        let mut guard = self.inner.write().await;
        if let Some(items) = guard.as_mut() {
            match items.iter_mut().find(|existing| existing.id() == item.id()) {
                Some(existing) => *existing = item,
                None => items.push(item),
            }
        }
    }

    /// Remove the record with a matching id after a successful delete.
    ///
    /// Unrelated entries are never touched; removing an unknown id is a no-op.
    pub async fn remove(&self, id: &str) -> bool {
        let mut guard = self.inner.write().await;
        match guard.as_mut() {
            Some(items) => {
                let before = items.len();
                items.retain(|item| item.id() != id);
                items.len() != before
            }
            None => false,
        }
    }
}

/// A collection as served to a listing handler.
pub struct Loaded<T> {
    pub items: Vec<T>,
    /// True when the upstream fetch failed and `items` is a stale (possibly
    /// empty) fallback.
    pub stale: bool,
}

impl<T: Identified + Clone + DeserializeOwned> Cache<T> {
    /// Serve the cached collection, fetching upstream on a cold cache or when
    /// a refresh is requested. A failed fetch logs the error and falls back
    /// to the last-known-good copy; no retry.
    pub async fn load(
        &self,
        client: &ApiClient,
        collection: &'static str,
        refresh: bool,
    ) -> Loaded<T> {
        if !refresh {
            if let Some(items) = self.snapshot().await {
                return Loaded {
                    items,
                    stale: false,
                };
            }
        }

        match client.fetch_collection::<T>(collection).await {
            Ok(items) => {
                self.fill(items.clone()).await;
                Loaded {
                    items,
                    stale: false,
                }
            }
            Err(err) => {
                tracing::error!("Failed to fetch {}: {}", collection, err);
                Loaded {
                    items: self.snapshot().await.unwrap_or_default(),
                    stale: true,
                }
            }
        }
    }
}

/// All collection caches, one per upstream collection.
pub struct Store {
    pub properties: Cache<Property>,
    pub brokers: Cache<Broker>,
    pub requirements: Cache<PropertyRequirement>,
    pub redevelopment: Cache<RedevelopmentProject>,
    pub commercial: Cache<CommercialProject>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            properties: Cache::new(),
            brokers: Cache::new(),
            requirements: Cache::new(),
            redevelopment: Cache::new(),
            commercial: Cache::new(),
        }
    }

    /// Warm every cache at startup. Failures are already logged by `load`;
    /// the first request retries with its own fetch.
    pub async fn prime(&self, client: &ApiClient) {
        let properties = self
            .properties
            .load(client, collections::PROPERTIES, true)
            .await;
        let brokers = self.brokers.load(client, collections::BROKERS, true).await;
        let requirements = self
            .requirements
            .load(client, collections::PROPERTY_REQUIREMENTS, true)
            .await;
        let redevelopment = self
            .redevelopment
            .load(client, collections::REDEVELOPMENT, true)
            .await;
        let commercial = self
            .commercial
            .load(client, collections::COMMERCIAL, true)
            .await;

        tracing::info!(
            "Primed caches: {} properties, {} brokers, {} requirements, {} redevelopment, {} commercial",
            properties.items.len(),
            brokers.items.len(),
            requirements.items.len(),
            redevelopment.items.len(),
            commercial.items.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Broker;

    fn broker(id: &str, name: &str, verified: bool) -> Broker {
        Broker {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            phone: "9876543210".to_string(),
            location: "Mumbai".to_string(),
            verified,
        }
    }

    #[tokio::test]
    async fn test_snapshot_is_none_until_filled() {
        let cache: Cache<Broker> = Cache::new();
        assert!(cache.snapshot().await.is_none());

        cache.fill(vec![broker("b-1", "Asha", false)]).await;
        assert_eq!(cache.snapshot().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_id() {
        let cache: Cache<Broker> = Cache::new();
        cache
            .fill(vec![broker("b-1", "Asha", false), broker("b-2", "Ravi", false)])
            .await;

        cache.upsert(broker("b-1", "Asha", true)).await;

        let items = cache.snapshot().await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[0].verified);
        assert_eq!(items[1].name, "Ravi");
    }

    #[tokio::test]
    async fn test_mutations_leave_cold_cache_cold() {
        let cache: Cache<Broker> = Cache::new();

        cache.append(broker("b-8", "Early", false)).await;
        cache.upsert(broker("b-9", "Late", false)).await;

        // No fetch has succeeded yet, so there is nothing valid to patch.
        assert!(cache.snapshot().await.is_none());
    }

    #[tokio::test]
    async fn test_upsert_appends_unseen_id_on_warm_cache() {
        let cache: Cache<Broker> = Cache::new();
        cache.fill(vec![broker("b-1", "Asha", false)]).await;

        cache.upsert(broker("b-2", "Ravi", true)).await;

        let items = cache.snapshot().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "b-2");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent_and_targeted() {
        let cache: Cache<Broker> = Cache::new();
        cache
            .fill(vec![broker("b-1", "Asha", false), broker("b-2", "Ravi", false)])
            .await;

        assert!(cache.remove("b-1").await);
        assert_eq!(cache.snapshot().await.unwrap().len(), 1);

        // Second delete of the same id removes nothing else.
        assert!(!cache.remove("b-1").await);
        let items = cache.snapshot().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "b-2");
    }
}
