use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// Cell edge lengths in pixels for each zoom level, coarsest first.
/// Advancing the zoom index shrinks cells and enlarges the grid.
pub const CELL_SIZES: [u32; 8] = [50, 25, 20, 10, 5, 4, 2, 1];

/// Maximum grass growth level per cell.
pub const MAX_GROWTH: u8 = 15;

/// Growth level at or above which a cell can be harvested.
pub const HARVEST_THRESHOLD: u8 = 5;

/// Tuning parameters for one game. `Default` carries the shipped game
/// constants; `validate` is called by `World::try_new` before any state
/// is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pixel extent of the square display area the field is mapped onto.
    pub display_size: u32,
    /// Starting milliseconds per simulated day.
    pub day_rate_ms: u32,
    /// Starting herd sub-moves per day.
    pub herd_speed: u32,
    /// Starting cells grown per day.
    pub growth_amount: u32,
    /// Money awarded per harvested cell.
    pub harvest_value: f64,
    /// Harvest multiplier applied while a super day is banked.
    pub super_day_multiplier: f64,
    /// Whole day-rates of accumulated surplus required per super day.
    pub super_day_cost_factor: f64,
    /// Day-rate multiplier applied by each day-rate purchase.
    pub day_rate_decay: f64,
    /// Herd-speed upgrade cap.
    pub max_herd_speed: u32,
    /// Growth-rate upgrade cap.
    pub max_growth_amount: u32,
    pub seed: u64,

    pub speed_base_price: f64,
    pub speed_multiplier: f64,
    pub size_base_price: f64,
    pub size_multiplier: f64,
    pub field_base_price: f64,
    pub field_multiplier: f64,
    pub growth_base_price: f64,
    pub growth_multiplier: f64,
    pub day_base_price: f64,
    pub day_multiplier: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            display_size: 500,
            day_rate_ms: 1000,
            herd_speed: 1,
            growth_amount: 4,
            harvest_value: 1.0,
            super_day_multiplier: 5.0,
            super_day_cost_factor: 5.0,
            day_rate_decay: 0.85,
            max_herd_speed: 50,
            max_growth_amount: 100,
            seed: 42,
            speed_base_price: 50.0,
            speed_multiplier: 2.0,
            size_base_price: 75.0,
            size_multiplier: 1.3,
            field_base_price: 150.0,
            field_multiplier: 2.5,
            growth_base_price: 10.0,
            growth_multiplier: 1.15,
            day_base_price: 5.0,
            day_multiplier: 1.15,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameConfigError> {
        if self.display_size < CELL_SIZES[0] {
            return Err(GameConfigError::DisplayTooSmall {
                min: CELL_SIZES[0],
                actual: self.display_size,
            });
        }
        if self.day_rate_ms == 0 {
            return Err(GameConfigError::ZeroDayRate);
        }
        if self.harvest_value <= 0.0 {
            return Err(GameConfigError::NonPositiveHarvestValue {
                value: self.harvest_value,
            });
        }
        if self.super_day_multiplier < 1.0 || self.super_day_cost_factor < 1.0 {
            return Err(GameConfigError::InvalidSuperDayParams {
                multiplier: self.super_day_multiplier,
                cost_factor: self.super_day_cost_factor,
            });
        }
        if !(self.day_rate_decay > 0.0 && self.day_rate_decay <= 1.0) {
            return Err(GameConfigError::InvalidDayRateDecay {
                decay: self.day_rate_decay,
            });
        }
        let pricing = [
            ("herd_speed", self.speed_base_price, self.speed_multiplier),
            ("herd_size", self.size_base_price, self.size_multiplier),
            ("field_zoom", self.field_base_price, self.field_multiplier),
            ("growth_rate", self.growth_base_price, self.growth_multiplier),
            ("day_rate", self.day_base_price, self.day_multiplier),
        ];
        for (upgrade, price, multiplier) in pricing {
            if price <= 0.0 {
                return Err(GameConfigError::NonPositivePrice { upgrade, price });
            }
            // Multipliers below 1 would break price monotonicity.
            if multiplier < 1.0 {
                return Err(GameConfigError::MultiplierBelowOne {
                    upgrade,
                    multiplier,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameConfigError {
    DisplayTooSmall { min: u32, actual: u32 },
    ZeroDayRate,
    NonPositiveHarvestValue { value: f64 },
    InvalidSuperDayParams { multiplier: f64, cost_factor: f64 },
    InvalidDayRateDecay { decay: f64 },
    NonPositivePrice { upgrade: &'static str, price: f64 },
    MultiplierBelowOne { upgrade: &'static str, multiplier: f64 },
}

impl fmt::Display for GameConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameConfigError::DisplayTooSmall { min, actual } => write!(
                f,
                "display_size ({actual}) must fit at least one cell at the coarsest zoom ({min})"
            ),
            GameConfigError::ZeroDayRate => write!(f, "day_rate_ms must be at least 1"),
            GameConfigError::NonPositiveHarvestValue { value } => {
                write!(f, "harvest_value ({value}) must be positive")
            }
            GameConfigError::InvalidSuperDayParams {
                multiplier,
                cost_factor,
            } => write!(
                f,
                "super day multiplier ({multiplier}) and cost factor ({cost_factor}) must be >= 1"
            ),
            GameConfigError::InvalidDayRateDecay { decay } => {
                write!(f, "day_rate_decay ({decay}) must be in (0, 1]")
            }
            GameConfigError::NonPositivePrice { upgrade, price } => {
                write!(f, "{upgrade} base price ({price}) must be positive")
            }
            GameConfigError::MultiplierBelowOne {
                upgrade,
                multiplier,
            } => write!(f, "{upgrade} price multiplier ({multiplier}) must be >= 1"),
        }
    }
}

impl Error for GameConfigError {}
