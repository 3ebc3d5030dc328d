use super::World;
use crate::upgrade::UpgradeKind;
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Per-day sample for headless runs and dashboards.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DayMetrics {
    pub day: usize,
    pub money: f64,
    pub total_money: f64,
    pub total_cleared: u64,
    pub cleared_today: usize,
    pub grown_today: usize,
    pub ready_cells: usize,
    pub mean_growth: f32,
    pub super_days: u32,
    pub surplus_ms: f64,
    pub day_rate_ms: u32,
}

/// Consumer-facing view of one upgrade.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpgradeStatus {
    pub key: String,
    pub display_name: String,
    pub price: f64,
    pub level: u32,
    pub available: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HerdRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Read-only snapshot handed to the rendering consumer once per day:
/// grid contents, zoom, herd bounding box, wallet, and upgrade states.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub day: usize,
    pub zoom: usize,
    pub cell_size: u32,
    pub grid_width: usize,
    pub grid_height: usize,
    pub cells: Vec<u8>,
    pub herd: HerdRect,
    pub money: f64,
    pub total_money: f64,
    pub total_cleared: u64,
    pub herd_speed: u32,
    pub growth_amount: u32,
    pub day_rate_ms: u32,
    pub super_days: u32,
    pub upgrades: Vec<UpgradeStatus>,
}

fn default_schema_version() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub days: usize,
    pub sample_every: usize,
    pub final_money: f64,
    pub final_total_money: f64,
    pub samples: Vec<DayMetrics>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    InvalidSampleEvery,
    TooManyDays { max: usize, actual: usize },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::InvalidSampleEvery => write!(f, "sample_every must be positive"),
            RunError::TooManyDays { max, actual } => {
                write!(f, "days ({actual}) exceed supported maximum ({max})")
            }
        }
    }
}

impl Error for RunError {}

impl World {
    pub const MAX_RUN_DAYS: usize = 1_000_000;

    pub(crate) fn collect_day_metrics(&self, day: usize) -> DayMetrics {
        DayMetrics {
            day,
            money: self.money,
            total_money: self.total_money,
            total_cleared: self.total_cleared,
            cleared_today: self.cleared_last_day,
            grown_today: self.grown_last_day,
            ready_cells: self.field.ready_cells(),
            mean_growth: self.field.mean_growth(),
            super_days: self.bank.super_days(),
            surplus_ms: self.bank.surplus_ms(),
            day_rate_ms: self.day_rate_ms,
        }
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let upgrades = UpgradeKind::ALL
            .into_iter()
            .map(|kind| {
                let upgrade = self.upgrade(kind);
                UpgradeStatus {
                    key: kind.key().to_string(),
                    display_name: kind.display_name().to_string(),
                    price: upgrade.price,
                    level: upgrade.level,
                    available: self.upgrade_available(kind),
                }
            })
            .collect();
        WorldSnapshot {
            day: self.day_index,
            zoom: self.field.zoom(),
            cell_size: self.field.cell_size(),
            grid_width: self.field.width(),
            grid_height: self.field.height(),
            cells: self.field.cells().to_vec(),
            herd: HerdRect {
                x: self.herd.x(),
                y: self.herd.y(),
                width: self.herd.width(),
                height: self.herd.height(),
            },
            money: self.money,
            total_money: self.total_money,
            total_cleared: self.total_cleared,
            herd_speed: self.herd_speed,
            growth_amount: self.growth_amount,
            day_rate_ms: self.day_rate_ms,
            super_days: self.bank.super_days(),
            upgrades,
        }
    }

    pub fn run_days(&mut self, days: usize, sample_every: usize) -> RunSummary {
        self.try_run_days(days, sample_every)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    /// Drive `days` simulated days headlessly, sampling metrics every
    /// `sample_every` days plus the final day. Each day is fed exactly
    /// nominal elapsed time, so the time bank stays empty.
    pub fn try_run_days(
        &mut self,
        days: usize,
        sample_every: usize,
    ) -> Result<RunSummary, RunError> {
        if sample_every == 0 {
            return Err(RunError::InvalidSampleEvery);
        }
        if days > Self::MAX_RUN_DAYS {
            return Err(RunError::TooManyDays {
                max: Self::MAX_RUN_DAYS,
                actual: days,
            });
        }
        let estimated = if days == 0 {
            0
        } else {
            ((days - 1) / sample_every) + 1
        };
        let mut samples = Vec::with_capacity(estimated);
        for day in 1..=days {
            self.advance_day_with_elapsed(self.day_rate_ms as f64);
            if day % sample_every == 0 || day == days {
                samples.push(self.collect_day_metrics(day));
            }
        }
        Ok(RunSummary {
            schema_version: 1,
            days,
            sample_every,
            final_money: self.money,
            final_total_money: self.total_money,
            samples,
        })
    }
}
