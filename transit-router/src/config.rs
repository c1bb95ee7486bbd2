//! Server configuration.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

/// Listen address when `TRANSIT_ROUTER_ADDR` is unset.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Configuration for the per-snapshot route cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for cached routes.
    pub ttl: Duration,

    /// Maximum number of cached routes.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    pub cache: CacheConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            cache: CacheConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// - `TRANSIT_ROUTER_ADDR`: listen address
    /// - `TRANSIT_ROUTER_CACHE_CAPACITY`: maximum cached routes
    /// - `TRANSIT_ROUTER_CACHE_TTL_SECS`: route TTL in seconds
    ///
    /// Unset or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            addr: parse_or(&lookup, "TRANSIT_ROUTER_ADDR", defaults.addr),
            cache: CacheConfig {
                ttl: Duration::from_secs(parse_or(
                    &lookup,
                    "TRANSIT_ROUTER_CACHE_TTL_SECS",
                    defaults.cache.ttl.as_secs(),
                )),
                max_capacity: parse_or(
                    &lookup,
                    "TRANSIT_ROUTER_CACHE_CAPACITY",
                    defaults.cache.max_capacity,
                ),
            },
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "ignoring invalid setting");
            default
        }),
    }
}
