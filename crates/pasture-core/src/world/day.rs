use super::World;
use crate::config::HARVEST_THRESHOLD;
use std::time::Instant;

impl World {
    /// Advance one simulated day, measuring elapsed wall-clock time
    /// since the previous day for the time bank. The first day counts
    /// as exactly nominal.
    pub fn advance_day(&mut self) {
        let now = Instant::now();
        let elapsed_ms = match self.last_day.replace(now) {
            Some(prev) => now.duration_since(prev).as_secs_f64() * 1000.0,
            None => self.day_rate_ms as f64,
        };
        self.advance_day_with_elapsed(elapsed_ms);
    }

    /// Advance one simulated day with an explicit elapsed time. Headless
    /// drivers and tests pass the nominal day rate so no surplus
    /// accrues.
    pub fn advance_day_with_elapsed(&mut self, elapsed_ms: f64) {
        self.day_index += 1;
        self.cleared_last_day = 0;
        self.grown_last_day = 0;
        self.bank.record(
            elapsed_ms,
            self.day_rate_ms as f64,
            self.config.super_day_cost_factor,
        );
        self.herd_phase();
        self.growth_phase();
    }

    /// Harvest-then-move, once per point of herd speed.
    fn herd_phase(&mut self) {
        for _ in 0..self.herd_speed {
            self.harvest_footprint();
            self.herd.advance(self.field.width(), self.field.height());
        }
    }

    /// Clear every grown cell under the herd, crediting money per cell.
    /// Banked super days are spent one per cell for multiplied value.
    fn harvest_footprint(&mut self) {
        let (grid_w, grid_h) = (self.field.width(), self.field.height());
        let footprint: Vec<(usize, usize)> = self.herd.cells_within(grid_w, grid_h).collect();
        for (x, y) in footprint {
            if self.field.growth(x, y) < HARVEST_THRESHOLD {
                continue;
            }
            self.field.clear(x, y);
            let value = if self.bank.consume() {
                self.config.harvest_value * self.config.super_day_multiplier
            } else {
                self.config.harvest_value
            };
            self.money += value;
            self.total_money += value;
            self.total_cleared += 1;
            self.cleared_last_day += 1;
        }
    }

    fn growth_phase(&mut self) {
        self.grown_last_day = self
            .field
            .grow_random(self.growth_amount as usize, &mut self.rng);
    }
}
