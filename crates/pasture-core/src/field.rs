use crate::config::{CELL_SIZES, HARVEST_THRESHOLD, MAX_GROWTH};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rectangular grass field. Each cell holds a growth level in
/// `0..=MAX_GROWTH`, stored row-major in a flat buffer. The field owns
/// its zoom index; regenerating at a new zoom discards all prior state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Field {
    width: usize,
    height: usize,
    zoom: usize,
    cells: Vec<u8>,
}

impl Field {
    /// Create a field at the given zoom, every cell seeded with a
    /// uniform-random growth level in `[0, MAX_GROWTH)`.
    pub fn generate<R: Rng + ?Sized>(display_size: u32, zoom: usize, rng: &mut R) -> Self {
        let zoom = zoom.min(CELL_SIZES.len() - 1);
        let (width, height) = Self::dims(display_size, zoom);
        let cells = (0..width * height)
            .map(|_| rng.random_range(0..MAX_GROWTH))
            .collect();
        Self {
            width,
            height,
            zoom,
            cells,
        }
    }

    fn dims(display_size: u32, zoom: usize) -> (usize, usize) {
        let side = (display_size / CELL_SIZES[zoom]) as usize;
        (side, side)
    }

    /// Discard the field and regenerate it at the current zoom.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, display_size: u32, rng: &mut R) {
        *self = Self::generate(display_size, self.zoom, rng);
    }

    /// Advance to the next smaller cell size and regenerate. Returns
    /// false (leaving the field untouched) when already at the smallest.
    pub fn zoom_in<R: Rng + ?Sized>(&mut self, display_size: u32, rng: &mut R) -> bool {
        if self.zoom + 1 >= CELL_SIZES.len() {
            return false;
        }
        *self = Self::generate(display_size, self.zoom + 1, rng);
        true
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn zoom(&self) -> usize {
        self.zoom
    }

    /// Pixel edge length of one cell at the current zoom.
    pub fn cell_size(&self) -> u32 {
        CELL_SIZES[self.zoom]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn growth(&self, x: usize, y: usize) -> u8 {
        let cx = x.min(self.width - 1);
        let cy = y.min(self.height - 1);
        self.cells[cy * self.width + cx]
    }

    /// Reset a harvested cell to bare ground.
    pub fn clear(&mut self, x: usize, y: usize) {
        let cx = x.min(self.width - 1);
        let cy = y.min(self.height - 1);
        self.cells[cy * self.width + cx] = 0;
    }

    /// Grow `count` uniform-random cells (with replacement) by one level
    /// each, clamped to `MAX_GROWTH`. Returns how many cells actually
    /// grew. Stochastic regrowth; clustering is expected, not a bug.
    pub fn grow_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> usize {
        let mut grown = 0;
        for _ in 0..count {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            let cell = &mut self.cells[y * self.width + x];
            if *cell < MAX_GROWTH {
                *cell += 1;
                grown += 1;
            }
        }
        grown
    }

    /// Number of cells currently at or above the harvest threshold.
    pub fn ready_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&g| g >= HARVEST_THRESHOLD)
            .count()
    }

    #[cfg(test)]
    pub(crate) fn fill(&mut self, level: u8) {
        self.cells.fill(level.min(MAX_GROWTH));
    }

    #[cfg(test)]
    pub(crate) fn set_growth(&mut self, x: usize, y: usize, level: u8) {
        self.cells[y * self.width + x] = level.min(MAX_GROWTH);
    }

    pub fn mean_growth(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.cells.iter().map(|&g| g as u32).sum();
        sum as f32 / self.cells.len() as f32
    }
}
