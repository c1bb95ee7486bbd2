//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::CacheConfig;
use crate::network::Network;
use crate::router::Route;

use super::cache::RouteCache;

/// A network together with its route cache.
pub struct Snapshot {
    network: Network,
    routes: RouteCache,
}

impl Snapshot {
    pub fn new(network: Network, cache: &CacheConfig) -> Self {
        Self {
            network,
            routes: RouteCache::new(cache),
        }
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Cached route lookup.
    pub async fn route(&self, from: &str, to: &str) -> Option<Arc<Route>> {
        self.routes.route(&self.network, from, to).await
    }

    pub fn routes(&self) -> &RouteCache {
        &self.routes
    }
}

/// Shared application state.
///
/// Handlers take a clone of the current snapshot and work on it without
/// holding the lock, so a swap never waits on a slow query and a query never
/// sees a half-built network.
#[derive(Clone)]
pub struct AppState {
    current: Arc<RwLock<Arc<Snapshot>>>,
    cache: CacheConfig,
}

impl AppState {
    pub fn new(network: Network, cache: CacheConfig) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Snapshot::new(network, &cache)))),
            cache,
        }
    }

    /// The snapshot in effect right now.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        let guard = self.current.read().await;
        Arc::clone(&guard)
    }

    /// Replace the network. Returns the snapshot that was replaced.
    ///
    /// The new snapshot, including its empty cache, is built before the
    /// write lock is taken.
    pub async fn swap(&self, network: Network) -> Arc<Snapshot> {
        let stops = network.catalogue().stop_count();
        let buses = network.catalogue().bus_count();
        let next = Arc::new(Snapshot::new(network, &self.cache));

        let previous = {
            let mut guard = self.current.write().await;
            std::mem::replace(&mut *guard, next)
        };

        info!(stops, buses, "network swapped");
        previous
    }
}
