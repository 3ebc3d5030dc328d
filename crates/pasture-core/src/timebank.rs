use serde::{Deserialize, Serialize};

/// Banks surplus wall-clock time between simulated days and converts it
/// into "super days" that multiply harvest value. A host that fires its
/// timer late compensates the player with bonus value instead of losing
/// simulated days; a host that fires early eats into the surplus, which
/// may go negative.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TimeBank {
    surplus_ms: f64,
    super_days: u32,
}

impl TimeBank {
    /// Record one day's elapsed wall-clock time against the nominal day
    /// rate. Once the accumulated surplus reaches `cost_factor` whole
    /// day-rates, it converts into super-day credits at one credit per
    /// unit, carrying the remainder.
    pub fn record(&mut self, elapsed_ms: f64, day_rate_ms: f64, cost_factor: f64) {
        self.surplus_ms += elapsed_ms - day_rate_ms;
        let unit = day_rate_ms * cost_factor;
        if unit > 0.0 && self.surplus_ms >= unit {
            self.super_days += (self.surplus_ms / unit) as u32;
            self.surplus_ms %= unit;
        }
    }

    /// Spend one banked super day. Consumed per harvested cell, not per
    /// day.
    pub fn consume(&mut self) -> bool {
        if self.super_days > 0 {
            self.super_days -= 1;
            true
        } else {
            false
        }
    }

    pub fn super_days(&self) -> u32 {
        self.super_days
    }

    pub fn surplus_ms(&self) -> f64 {
        self.surplus_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_day_rates_in_one_tick_banks_exactly_one_credit() {
        let mut bank = TimeBank::default();
        bank.record(6000.0, 1000.0, 5.0);
        assert_eq!(bank.super_days(), 1);
        assert_eq!(bank.surplus_ms(), 0.0);
    }

    #[test]
    fn surplus_below_threshold_accumulates_without_credit() {
        let mut bank = TimeBank::default();
        for _ in 0..4 {
            bank.record(2000.0, 1000.0, 5.0);
        }
        assert_eq!(bank.super_days(), 0);
        assert_eq!(bank.surplus_ms(), 4000.0);
        bank.record(2000.0, 1000.0, 5.0);
        assert_eq!(bank.super_days(), 1);
        assert_eq!(bank.surplus_ms(), 0.0);
    }

    #[test]
    fn oversized_surplus_converts_in_whole_units_with_remainder() {
        let mut bank = TimeBank::default();
        bank.record(13_500.0, 1000.0, 5.0);
        assert_eq!(bank.super_days(), 2);
        assert_eq!(bank.surplus_ms(), 2500.0);
    }

    #[test]
    fn early_ticks_drain_the_surplus() {
        let mut bank = TimeBank::default();
        bank.record(3000.0, 1000.0, 5.0);
        bank.record(500.0, 1000.0, 5.0);
        assert_eq!(bank.surplus_ms(), 1500.0);
        assert_eq!(bank.super_days(), 0);
    }

    #[test]
    fn consume_drains_credits_one_at_a_time() {
        let mut bank = TimeBank::default();
        bank.record(11_000.0, 1000.0, 5.0);
        assert_eq!(bank.super_days(), 2);
        assert!(bank.consume());
        assert!(bank.consume());
        assert!(!bank.consume());
    }
}
