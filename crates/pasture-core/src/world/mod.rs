mod day;
pub mod metrics;
#[cfg(test)]
mod tests;

pub use metrics::*;

use crate::config::{GameConfig, GameConfigError, CELL_SIZES};
use crate::field::Field;
use crate::herd::Herd;
use crate::timebank::TimeBank;
use crate::upgrade::{Upgrade, UpgradeKind};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use std::time::Instant;

/// Whole-game simulation state, advanced one simulated day at a time by
/// an external timer and mutated between days by synchronous purchase
/// commands. Single-threaded by design; consumers read state through
/// accessors or [`World::snapshot`].
pub struct World {
    pub(crate) config: GameConfig,
    pub(crate) field: Field,
    pub(crate) herd: Herd,
    pub(crate) money: f64,
    pub(crate) total_money: f64,
    pub(crate) total_cleared: u64,
    pub(crate) herd_speed: u32,
    pub(crate) growth_amount: u32,
    pub(crate) day_rate_ms: u32,
    pub(crate) bank: TimeBank,
    pub(crate) upgrades: Vec<Upgrade>,
    pub(crate) rng: ChaCha12Rng,
    pub(crate) day_index: usize,
    pub(crate) last_day: Option<Instant>,
    pub(crate) cleared_last_day: usize,
    pub(crate) grown_last_day: usize,
}

impl World {
    pub fn new(config: GameConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(config: GameConfig) -> Result<Self, GameConfigError> {
        config.validate()?;
        let mut rng = ChaCha12Rng::seed_from_u64(config.seed);
        let field = Field::generate(config.display_size, 0, &mut rng);
        // Stored in UpgradeKind::ALL order so `kind as usize` indexes.
        let upgrades = vec![
            Upgrade::new(
                UpgradeKind::HerdSpeed,
                config.speed_base_price,
                config.speed_multiplier,
            ),
            Upgrade::new(
                UpgradeKind::HerdSize,
                config.size_base_price,
                config.size_multiplier,
            ),
            Upgrade::new(
                UpgradeKind::FieldZoom,
                config.field_base_price,
                config.field_multiplier,
            ),
            Upgrade::new(
                UpgradeKind::GrowthRate,
                config.growth_base_price,
                config.growth_multiplier,
            ),
            Upgrade::new(
                UpgradeKind::DayRate,
                config.day_base_price,
                config.day_multiplier,
            ),
        ];
        Ok(Self {
            field,
            herd: Herd::new(),
            money: 0.0,
            total_money: 0.0,
            total_cleared: 0,
            herd_speed: config.herd_speed,
            growth_amount: config.growth_amount,
            day_rate_ms: config.day_rate_ms,
            bank: TimeBank::default(),
            upgrades,
            rng,
            day_index: 0,
            last_day: None,
            cleared_last_day: 0,
            grown_last_day: 0,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn herd(&self) -> &Herd {
        &self.herd
    }

    pub fn money(&self) -> f64 {
        self.money
    }

    pub fn total_money(&self) -> f64 {
        self.total_money
    }

    pub fn total_cleared(&self) -> u64 {
        self.total_cleared
    }

    pub fn herd_speed(&self) -> u32 {
        self.herd_speed
    }

    pub fn growth_amount(&self) -> u32 {
        self.growth_amount
    }

    pub fn day_rate_ms(&self) -> u32 {
        self.day_rate_ms
    }

    pub fn super_days(&self) -> u32 {
        self.bank.super_days()
    }

    pub fn day_index(&self) -> usize {
        self.day_index
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    pub fn upgrade(&self, kind: UpgradeKind) -> &Upgrade {
        &self.upgrades[kind as usize]
    }

    /// Whether an upgrade's gate currently allows another purchase,
    /// independent of funds. Gates are monotone: once false, the
    /// upgrade is permanently maxed.
    pub fn upgrade_available(&self, kind: UpgradeKind) -> bool {
        match kind {
            UpgradeKind::HerdSpeed => self.herd_speed < self.config.max_herd_speed,
            UpgradeKind::HerdSize => {
                // The grown footprint must still fit strictly inside the
                // current grid on both axes.
                let max = self.field.height();
                let (w, h) = (self.herd.width(), self.herd.height());
                let (next_w, next_h) = if w == h { (w + 1, h) } else { (w, h + 1) };
                next_w < max && next_h < max
            }
            UpgradeKind::FieldZoom => self.field.zoom() + 1 < CELL_SIZES.len(),
            UpgradeKind::GrowthRate => self.growth_amount < self.config.max_growth_amount,
            UpgradeKind::DayRate => self.day_rate_ms > 1,
        }
    }

    /// Atomic purchase: gate and funds are checked before anything
    /// mutates, then the effect lands, the level and price advance, and
    /// the pre-multiplier price is deducted. Returns whether the
    /// purchase happened.
    pub fn purchase(&mut self, kind: UpgradeKind) -> bool {
        let price = self.upgrades[kind as usize].price;
        if !self.upgrade_available(kind) || self.money < price {
            return false;
        }
        self.apply_upgrade(kind);
        self.upgrades[kind as usize].record_purchase();
        self.money = (self.money - price).max(0.0);
        true
    }

    /// String-keyed purchase for the consumer boundary. Unknown keys
    /// are a no-op.
    pub fn purchase_by_key(&mut self, key: &str) -> bool {
        match UpgradeKind::from_key(key) {
            Some(kind) => self.purchase(kind),
            None => false,
        }
    }

    fn apply_upgrade(&mut self, kind: UpgradeKind) {
        match kind {
            UpgradeKind::HerdSpeed => self.herd_speed += 1,
            UpgradeKind::HerdSize => self.herd.grow(),
            UpgradeKind::FieldZoom => {
                self.field.zoom_in(self.config.display_size, &mut self.rng);
            }
            UpgradeKind::GrowthRate => self.growth_amount += 2,
            UpgradeKind::DayRate => {
                self.day_rate_ms =
                    ((self.day_rate_ms as f64 * self.config.day_rate_decay) as u32).max(1);
            }
        }
    }
}
