//! Route cache.
//!
//! Each snapshot owns its own cache, so swapping in a new network drops every
//! cached route along with the old snapshot. Misses are cached too: a pair of
//! stops with no route stays unroutable until the network changes.

use std::sync::Arc;

use moka::future::Cache as MokaCache;

use crate::config::CacheConfig;
use crate::network::Network;
use crate::router::Route;

/// Cache key: (from stop, to stop).
type RouteKey = (String, String);

/// Cached answer; `None` when there is no route.
type RouteEntry = Option<Arc<Route>>;

/// Cache of route answers for one network.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Route from `from` to `to`, computing it on a miss.
    pub async fn route(&self, network: &Network, from: &str, to: &str) -> RouteEntry {
        let key = (from.to_string(), to.to_string());

        if let Some(cached) = self.routes.get(&key).await {
            return cached;
        }

        let entry = network.route(from, to).map(Arc::new);
        self.routes.insert(key, entry.clone()).await;
        entry
    }

    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Flush pending inserts so `entry_count` is current.
    pub async fn sync(&self) {
        self.routes.run_pending_tasks().await;
    }
}
