//! Host resource sampler
//!
//! Reads CPU and RAM usage from the host. GPU, disk and frame rate have no
//! portable source, so they are synthesized within plausible ranges.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::Rng;
use scripthub_core::StatsDraft;
use scripthub_storage::Storage;
use sysinfo::System;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Readings kept by the sampler itself
pub const MAX_RECENT_READINGS: usize = 20;

/// Default sampling period
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

/// One host reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub cpu: u8,
    pub gpu: u8,
    pub ram: u8,
    pub disk: u8,
    pub fps: u32,
    pub uptime_secs: u64,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    pub fn to_draft(&self) -> StatsDraft {
        StatsDraft {
            cpu_usage: i64::from(self.cpu),
            gpu_usage: i64::from(self.gpu),
            ram_usage: i64::from(self.ram),
            fps: i64::from(self.fps),
        }
    }
}

pub struct Sampler {
    system: System,
    recent: VecDeque<Reading>,
}

pub type SharedSampler = Arc<Mutex<Sampler>>;

impl Sampler {
    pub fn new() -> Self {
        let mut system = System::new();
        // CPU usage is a delta; the first refresh establishes the baseline
        system.refresh_cpu_usage();

        Self {
            system,
            recent: VecDeque::with_capacity(MAX_RECENT_READINGS + 1),
        }
    }

    pub fn shared() -> SharedSampler {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Take a reading and remember it
    pub fn sample(&mut self) -> Reading {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let cpu = percent(f64::from(self.system.global_cpu_usage()));
        let total = self.system.total_memory();
        let ram = if total == 0 {
            0
        } else {
            percent(self.system.used_memory() as f64 * 100.0 / total as f64)
        };

        let mut rng = rand::thread_rng();
        let reading = Reading {
            cpu,
            gpu: rng.gen_range(20..80),
            ram,
            disk: rng.gen_range(20..60),
            fps: rng.gen_range(90..=144),
            uptime_secs: System::uptime(),
            timestamp: Utc::now(),
        };

        self.push(reading.clone());
        reading
    }

    fn push(&mut self, reading: Reading) {
        self.recent.push_back(reading);
        while self.recent.len() > MAX_RECENT_READINGS {
            self.recent.pop_front();
        }
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.recent.back()
    }

    /// Readings still in the ring, oldest first
    pub fn recent(&self) -> impl Iterator<Item = &Reading> {
        self.recent.iter()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Sample every `period` and record each reading into `storage`
pub fn spawn(
    sampler: SharedSampler,
    storage: Arc<dyn Storage>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;

            let reading = sampler.lock().sample();
            if let Err(e) = record(storage.as_ref(), &reading).await {
                warn!(error = %e, "Failed to record system stats");
            }
        }
    })
}

async fn record(storage: &dyn Storage, reading: &Reading) -> anyhow::Result<()> {
    let stats = reading.to_draft().validate()?;
    let snapshot = storage.record_stats(stats).await?;
    debug!(
        cpu = snapshot.cpu_usage,
        ram = snapshot.ram_usage,
        "Recorded system stats"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripthub_storage::MemoryStorage;

    #[test]
    fn test_reading_ranges() {
        let mut sampler = Sampler::new();
        for _ in 0..10 {
            let reading = sampler.sample();
            assert!(reading.cpu <= 100);
            assert!(reading.ram <= 100);
            assert!((20..80).contains(&reading.gpu));
            assert!((20..60).contains(&reading.disk));
            assert!((90..=144).contains(&reading.fps));
            assert!(reading.to_draft().validate().is_ok());
        }
    }

    #[test]
    fn test_recent_is_bounded() {
        let mut sampler = Sampler::new();
        let mut last = None;
        for _ in 0..MAX_RECENT_READINGS + 7 {
            last = Some(sampler.sample());
        }

        assert_eq!(sampler.recent().count(), MAX_RECENT_READINGS);
        assert_eq!(sampler.latest(), last.as_ref());
        assert_eq!(sampler.recent().last(), last.as_ref());
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(percent(-3.0), 0);
        assert_eq!(percent(42.4), 42);
        assert_eq!(percent(99.6), 100);
        assert_eq!(percent(250.0), 100);
    }

    #[tokio::test]
    async fn test_spawn_records_into_storage() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::empty());
        let handle = spawn(Sampler::shared(), storage.clone(), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        assert!(!storage.stats_history().await.unwrap().is_empty());
        assert!(storage.current_stats().await.unwrap().is_some());
    }
}
