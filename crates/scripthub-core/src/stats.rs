//! System stats snapshots

use crate::error::ValidationError;
use crate::validate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of snapshots a backend retains; older ones are evicted first
pub const HISTORY_LIMIT: usize = 100;

/// Largest frame rate a signed 32-bit column holds
pub const MAX_FPS: u32 = i32::MAX as u32;

/// One immutable reading of resource usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub id: String,
    pub cpu_usage: u8,
    pub gpu_usage: u8,
    pub ram_usage: u8,
    pub fps: u32,
    pub timestamp: DateTime<Utc>,
}

/// Reading as reported by a sampler or client
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDraft {
    pub cpu_usage: i64,
    pub gpu_usage: i64,
    pub ram_usage: i64,
    pub fps: i64,
}

impl StatsDraft {
    pub fn validate(self) -> Result<NewStatsSnapshot, ValidationError> {
        let mut errors = ValidationError::new();
        validate::percentage(&mut errors, "cpuUsage", self.cpu_usage);
        validate::percentage(&mut errors, "gpuUsage", self.gpu_usage);
        validate::percentage(&mut errors, "ramUsage", self.ram_usage);
        let fps = u32::try_from(self.fps).ok().filter(|fps| *fps <= MAX_FPS);
        if fps.is_none() {
            errors.add("fps", format!("must be between 0 and {}", MAX_FPS));
        }
        errors.finish()?;

        // Ranges were checked above
        Ok(NewStatsSnapshot {
            cpu_usage: self.cpu_usage as u8,
            gpu_usage: self.gpu_usage as u8,
            ram_usage: self.ram_usage as u8,
            fps: fps.unwrap_or_default(),
        })
    }
}

/// A validated reading, ready to be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewStatsSnapshot {
    cpu_usage: u8,
    gpu_usage: u8,
    ram_usage: u8,
    fps: u32,
}

impl NewStatsSnapshot {
    pub fn cpu_usage(&self) -> u8 {
        self.cpu_usage
    }

    pub fn gpu_usage(&self) -> u8 {
        self.gpu_usage
    }

    pub fn ram_usage(&self) -> u8 {
        self.ram_usage
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn into_snapshot(self, id: String, timestamp: DateTime<Utc>) -> StatsSnapshot {
        StatsSnapshot {
            id,
            cpu_usage: self.cpu_usage,
            gpu_usage: self.gpu_usage,
            ram_usage: self.ram_usage,
            fps: self.fps,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reading() {
        let reading = StatsDraft {
            cpu_usage: 42,
            gpu_usage: 58,
            ram_usage: 62,
            fps: 117,
        }
        .validate()
        .unwrap();

        let snapshot = reading.into_snapshot("s1".into(), Utc::now());
        assert_eq!(snapshot.cpu_usage, 42);
        assert_eq!(snapshot.fps, 117);
    }

    #[test]
    fn test_out_of_range() {
        let err = StatsDraft {
            cpu_usage: 101,
            gpu_usage: -1,
            ram_usage: 50,
            fps: -5,
        }
        .validate()
        .unwrap_err();

        assert!(err.has("cpuUsage"));
        assert!(err.has("gpuUsage"));
        assert!(!err.has("ramUsage"));
        assert!(err.has("fps"));
    }

    #[test]
    fn test_bounds_inclusive() {
        assert!(StatsDraft {
            cpu_usage: 0,
            gpu_usage: 100,
            ram_usage: 100,
            fps: 0,
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_fps_fits_signed_column() {
        let at_limit = StatsDraft {
            fps: i64::from(MAX_FPS),
            ..Default::default()
        };
        assert_eq!(at_limit.validate().unwrap().fps(), MAX_FPS);

        let err = StatsDraft {
            fps: 3_000_000_000,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(err.has("fps"));
    }
}
