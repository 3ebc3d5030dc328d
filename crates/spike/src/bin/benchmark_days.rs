use pasture_core::config::GameConfig;
use pasture_core::world::World;
use std::time::Instant;

fn main() {
    let days = 100_000;
    println!("Benchmarking {} headless days", days);

    let config = GameConfig {
        seed: 42,
        ..GameConfig::default()
    };
    let mut world1 = World::new(config.clone());
    let mut world2 = World::new(config);

    // Run WITHOUT metrics
    let start = Instant::now();
    let nominal = world1.day_rate_ms() as f64;
    for _ in 0..days {
        world1.advance_day_with_elapsed(nominal);
    }
    let duration_no_metrics = start.elapsed();
    println!("Time WITHOUT metrics: {:?}", duration_no_metrics);
    println!("Avg per day (no metrics): {:?}", duration_no_metrics / days as u32);

    // Run WITH metrics (every day)
    let start = Instant::now();
    world2.run_days(days, 1);
    let duration_metrics = start.elapsed();
    println!("Time WITH metrics: {:?}", duration_metrics);
    println!("Avg per day (with metrics): {:?}", duration_metrics / days as u32);

    let diff = duration_metrics.saturating_sub(duration_no_metrics);
    println!("Total metrics overhead: {:?}", diff);
    println!("Avg metrics overhead per day: {:?}", diff / days as u32);
}
