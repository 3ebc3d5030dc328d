use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifiers for the five purchasable upgrades. The string
/// keys are the consumer-facing names used at the bindings boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    HerdSpeed,
    HerdSize,
    FieldZoom,
    GrowthRate,
    DayRate,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 5] = [
        UpgradeKind::HerdSpeed,
        UpgradeKind::HerdSize,
        UpgradeKind::FieldZoom,
        UpgradeKind::GrowthRate,
        UpgradeKind::DayRate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            UpgradeKind::HerdSpeed => "herd_speed",
            UpgradeKind::HerdSize => "herd_size",
            UpgradeKind::FieldZoom => "field_zoom",
            UpgradeKind::GrowthRate => "growth_rate",
            UpgradeKind::DayRate => "day_rate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            UpgradeKind::HerdSpeed => "Herd Speed",
            UpgradeKind::HerdSize => "Herd Size",
            UpgradeKind::FieldZoom => "Field Size",
            UpgradeKind::GrowthRate => "Growth Rate",
            UpgradeKind::DayRate => "Day Rate",
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Purchase state for one upgrade: current price, fixed price growth
/// factor, and how many times it has been bought. Price never decreases
/// and level never resets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Upgrade {
    pub kind: UpgradeKind,
    pub price: f64,
    pub multiplier: f64,
    pub level: u32,
}

impl Upgrade {
    pub fn new(kind: UpgradeKind, price: f64, multiplier: f64) -> Self {
        Self {
            kind,
            price,
            multiplier,
            level: 0,
        }
    }

    /// Advance to the next price tier after a successful purchase.
    pub fn record_purchase(&mut self) {
        self.level += 1;
        self.price *= self.multiplier;
    }
}
