//! Caching layer for transit feed responses.
//!
//! The recommendation endpoint is typically polled by a page that
//! refreshes faster than the upstream data changes. We cache each
//! board response briefly so repeated queries within the same window
//! reuse one upstream fetch.
//!
//! Time bucketing (epoch seconds divided into fixed buckets) bounds
//! cache cardinality while ensuring reasonable freshness.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;

use crate::domain::{RawDeparture, RouteId, StationId, StopId};
use crate::feed::{FeedClient, FeedError};

/// Cache key for train boards: (station, time bucket).
type TrainKey = (StationId, u64);

/// Cache key for bus boards: (stop, route, time bucket).
type BusKey = (StopId, RouteId, u64);

/// Cached board entry.
type BoardEntry = Arc<Vec<RawDeparture>>;

/// Configuration for the feed cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Time bucket size in seconds.
    pub bucket_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
            max_capacity: 1000,
            bucket_secs: 30,
        }
    }
}

/// Feed client with caching.
///
/// Wraps a `FeedClient` and caches board responses per time bucket.
pub struct CachedFeedClient {
    client: FeedClient,
    trains: MokaCache<TrainKey, BoardEntry>,
    buses: MokaCache<BusKey, BoardEntry>,
    bucket_secs: u64,
}

impl CachedFeedClient {
    /// Create a new cached client.
    pub fn new(client: FeedClient, config: &CacheConfig) -> Self {
        let trains = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();
        let buses = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            trains,
            buses,
            bucket_secs: config.bucket_secs,
        }
    }

    /// Compute the time bucket for a query instant.
    fn time_bucket(&self, now: DateTime<Utc>) -> u64 {
        (now.timestamp().max(0) as u64) / self.bucket_secs
    }

    /// Get train departures for a station, using the cache if fresh.
    pub async fn get_train_departures(
        &self,
        station: &StationId,
        now: DateTime<Utc>,
    ) -> Result<BoardEntry, FeedError> {
        let key = (station.clone(), self.time_bucket(now));

        if let Some(cached) = self.trains.get(&key).await {
            return Ok(cached);
        }

        let departures = self.client.get_train_departures(station).await?;
        let entry = Arc::new(departures);
        self.trains.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Get bus departures for a stop/route, using the cache if fresh.
    pub async fn get_bus_departures(
        &self,
        stop: &StopId,
        route: &RouteId,
        now: DateTime<Utc>,
    ) -> Result<BoardEntry, FeedError> {
        let key = (stop.clone(), route.clone(), self.time_bucket(now));

        if let Some(cached) = self.buses.get(&key).await {
            return Ok(cached);
        }

        let departures = self.client.get_bus_departures(stop, route).await?;
        let entry = Arc::new(departures);
        self.buses.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &FeedClient {
        &self.client
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.trains.entry_count() + self.buses.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.trains.invalidate_all();
        self.buses.invalidate_all();
    }
}
