//! Simulation core for a pasture idle game: a herd of cows sweeps a grid
//! field harvesting grown grass for money while purchased upgrades change
//! herd speed, herd size, field resolution, growth rate, and day duration.
//! Rendering and input stay external; consumers read a snapshot once per
//! simulated day and issue `advance_day` / `purchase` commands.

pub mod config;
pub mod field;
pub mod herd;
pub mod timebank;
pub mod upgrade;
pub mod world;
