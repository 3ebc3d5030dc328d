use super::World;
use crate::config::{GameConfig, MAX_GROWTH};
use crate::upgrade::UpgradeKind;

fn world() -> World {
    World::new(GameConfig::default())
}

fn nominal(world: &World) -> f64 {
    world.day_rate_ms() as f64
}

#[test]
fn money_stays_non_negative_and_lifetime_money_is_monotone() {
    let mut world = world();
    let mut last_total = 0.0;
    for _ in 0..500 {
        let elapsed = nominal(&world);
        world.advance_day_with_elapsed(elapsed);
        assert!(world.money() >= 0.0);
        assert!(world.total_money() >= last_total);
        assert!(world.money() <= world.total_money());
        last_total = world.total_money();
    }
}

#[test]
fn growth_levels_stay_within_bounds_across_days() {
    let mut world = world();
    world.money = 10_000.0;
    for _ in 0..40 {
        world.purchase(UpgradeKind::GrowthRate);
    }
    for _ in 0..300 {
        let elapsed = nominal(&world);
        world.advance_day_with_elapsed(elapsed);
        assert!(world.field().cells().iter().all(|&g| g <= MAX_GROWTH));
    }
}

#[test]
fn herd_stays_within_grid_bounds_across_upgrades() {
    let mut world = world();
    world.money = f64::MAX / 2.0;
    for day in 0..2_000 {
        // Sprinkle purchases through the run so bounds are checked
        // against every combination of herd size, speed, and zoom.
        if day % 50 == 0 {
            world.purchase(UpgradeKind::HerdSize);
        }
        if day % 120 == 0 {
            world.purchase(UpgradeKind::FieldZoom);
        }
        if day % 70 == 0 {
            world.purchase(UpgradeKind::HerdSpeed);
        }
        let elapsed = nominal(&world);
        world.advance_day_with_elapsed(elapsed);
        let herd = world.herd();
        assert!(herd.x() + herd.width() <= world.field().width());
        assert!(herd.y() + herd.height() <= world.field().height());
    }
}

#[test]
fn purchase_with_insufficient_funds_changes_nothing() {
    let mut world = world();
    let before = serde_json::to_string(&world.snapshot()).unwrap();
    for kind in UpgradeKind::ALL {
        assert!(!world.purchase(kind));
    }
    assert!(!world.purchase_by_key("herd_speed"));
    let after = serde_json::to_string(&world.snapshot()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn unknown_upgrade_key_is_a_noop() {
    let mut world = world();
    world.money = 10_000.0;
    assert!(!world.purchase_by_key("warp_drive"));
    assert_eq!(world.money(), 10_000.0);
    assert!(world.upgrades().iter().all(|u| u.level == 0));
}

#[test]
fn purchase_applies_effect_price_and_level() {
    let mut world = world();
    world.money = 1_000.0;
    assert!(world.purchase(UpgradeKind::HerdSpeed));
    assert_eq!(world.herd_speed(), 2);
    assert_eq!(world.money(), 950.0);
    let upgrade = world.upgrade(UpgradeKind::HerdSpeed);
    assert_eq!(upgrade.level, 1);
    assert_eq!(upgrade.price, 100.0);
}

#[test]
fn field_zoom_purchase_regenerates_a_finer_grid() {
    let mut world = world();
    world.money = 1_000.0;
    assert_eq!(world.field().width(), 10);
    assert!(world.purchase(UpgradeKind::FieldZoom));
    assert_eq!(world.field().zoom(), 1);
    assert_eq!(world.field().width(), 20);
    assert_eq!(world.field().cell_size(), 25);
}

#[test]
fn day_rate_purchases_floor_at_one_millisecond_then_max_out() {
    let mut world = world();
    world.money = f64::MAX / 2.0;
    let mut last_rate = world.day_rate_ms();
    while world.purchase(UpgradeKind::DayRate) {
        assert!(world.day_rate_ms() <= last_rate);
        assert!(world.day_rate_ms() >= 1);
        last_rate = world.day_rate_ms();
    }
    assert_eq!(world.day_rate_ms(), 1);
    assert!(!world.upgrade_available(UpgradeKind::DayRate));
    // Maxed stays maxed regardless of funds.
    assert!(!world.purchase(UpgradeKind::DayRate));
}

#[test]
fn herd_size_maxes_out_against_the_grid() {
    let mut world = world();
    world.money = f64::MAX / 2.0;
    while world.purchase(UpgradeKind::HerdSize) {}
    let max = world.field().height();
    assert!(world.herd().width() < max);
    assert!(world.herd().height() < max);
    assert!(!world.upgrade_available(UpgradeKind::HerdSize));
}

#[test]
fn six_nominal_days_of_elapsed_time_banks_one_super_day() {
    let mut world = world();
    world.field.fill(0); // nothing harvestable, so the credit survives
    world.advance_day_with_elapsed(6.0 * 1000.0);
    assert_eq!(world.super_days(), 1);
    assert_eq!(world.bank.surplus_ms(), 0.0);
}

#[test]
fn banked_super_day_pays_quintuple_for_one_cell() {
    let mut world = world();
    world.field.fill(0);
    world.field.set_growth(0, 0, 5); // under the herd at the origin
    world.bank.record(6_000.0, 1_000.0, 5.0);
    assert_eq!(world.super_days(), 1);
    world.advance_day_with_elapsed(nominal(&world));
    assert_eq!(world.money(), 5.0);
    assert_eq!(world.total_money(), 5.0);
    assert_eq!(world.total_cleared(), 1);
    assert_eq!(world.super_days(), 0);
    assert!(world.field().growth(0, 0) < 5);
}

#[test]
fn harvest_without_credit_pays_base_value() {
    let mut world = world();
    world.field.fill(0);
    world.field.set_growth(0, 0, 14);
    world.advance_day_with_elapsed(nominal(&world));
    assert_eq!(world.money(), 1.0);
    assert_eq!(world.total_cleared(), 1);
}

#[test]
fn same_seed_runs_identically() {
    let mut a = world();
    let mut b = world();
    a.money = 500.0;
    b.money = 500.0;
    for day in 0..200 {
        if day == 10 {
            a.purchase(UpgradeKind::GrowthRate);
            b.purchase(UpgradeKind::GrowthRate);
        }
        let elapsed = nominal(&a);
        a.advance_day_with_elapsed(elapsed);
        b.advance_day_with_elapsed(elapsed);
    }
    assert_eq!(
        serde_json::to_string(&a.snapshot()).unwrap(),
        serde_json::to_string(&b.snapshot()).unwrap()
    );
}

#[test]
fn snapshot_reflects_grid_and_upgrade_state() {
    let mut world = world();
    world.money = 200.0;
    world.purchase(UpgradeKind::GrowthRate);
    let snapshot = world.snapshot();
    assert_eq!(snapshot.cells.len(), snapshot.grid_width * snapshot.grid_height);
    assert_eq!(snapshot.upgrades.len(), 5);
    let growth = snapshot
        .upgrades
        .iter()
        .find(|u| u.key == "growth_rate")
        .unwrap();
    assert_eq!(growth.level, 1);
    assert!(growth.price > 10.0);
    assert_eq!(snapshot.growth_amount, 6);
    assert_eq!(snapshot.herd.width, 1);
}

#[test]
fn run_days_samples_at_requested_interval() {
    let mut world = world();
    let summary = world.try_run_days(100, 10).unwrap();
    assert_eq!(summary.schema_version, 1);
    assert_eq!(summary.samples.len(), 10);
    assert_eq!(summary.samples.last().unwrap().day, 100);
    assert_eq!(summary.final_total_money, world.total_money());
    // Nominal elapsed time accrues no surplus.
    assert!(summary.samples.iter().all(|s| s.super_days == 0));
}

#[test]
fn run_days_samples_use_the_runs_own_day_frame() {
    let mut world = world();
    for _ in 0..5 {
        let elapsed = nominal(&world);
        world.advance_day_with_elapsed(elapsed);
    }
    let summary = world.try_run_days(20, 10).unwrap();
    let sample_days: Vec<usize> = summary.samples.iter().map(|s| s.day).collect();
    assert_eq!(sample_days, vec![10, 20]);
    assert_eq!(world.day_index(), 25);
}

#[test]
fn run_days_rejects_bad_arguments() {
    let mut world = world();
    assert!(world.try_run_days(10, 0).is_err());
    assert!(world.try_run_days(World::MAX_RUN_DAYS + 1, 1).is_err());
}

#[test]
fn try_new_rejects_invalid_config() {
    let config = GameConfig {
        day_rate_ms: 0,
        ..GameConfig::default()
    };
    assert!(World::try_new(config).is_err());
}
