use serde::{Deserialize, Serialize};

/// Vertical sweep direction of the herd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Axis-aligned rectangle of cows, `width x height` cells with top-left
/// at `(x, y)`. Starts 1x1 at the origin sweeping down; size only ever
/// grows, and growing resets the position to the origin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Herd {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    direction: Direction,
}

impl Default for Herd {
    fn default() -> Self {
        Self::new()
    }
}

impl Herd {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            direction: Direction::Down,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// One boustrophedon sub-move. Columns are swept vertically; at the
    /// top or bottom edge the herd shifts right by its own width and
    /// flips direction, and at the right edge the whole sweep restarts
    /// from the origin moving down. Repeated cycles cover every cell
    /// position regardless of footprint.
    pub fn advance(&mut self, grid_width: usize, grid_height: usize) {
        let at_right_edge = self.x + self.width >= grid_width;
        match self.direction {
            Direction::Up => {
                if self.y > 0 {
                    self.y -= 1;
                } else if at_right_edge {
                    self.restart_sweep();
                } else {
                    self.shift_right(grid_width);
                    self.direction = Direction::Down;
                }
            }
            Direction::Down => {
                if self.y + self.height < grid_height {
                    self.y += 1;
                } else if at_right_edge {
                    self.restart_sweep();
                } else {
                    self.shift_right(grid_width);
                    self.direction = Direction::Up;
                }
            }
        }
    }

    fn restart_sweep(&mut self) {
        self.x = 0;
        self.y = 0;
        self.direction = Direction::Down;
    }

    fn shift_right(&mut self, grid_width: usize) {
        self.x = (self.x + self.width).min(grid_width.saturating_sub(self.width));
    }

    /// Widen when square, heighten otherwise, so the footprint grows
    /// alternately. The position resets to the origin because the old
    /// position may no longer be reachable by the sweep.
    pub fn grow(&mut self) {
        if self.width == self.height {
            self.width += 1;
        } else {
            self.height += 1;
        }
        self.x = 0;
        self.y = 0;
    }

    /// Footprint cells clipped to the grid bounds.
    pub fn cells_within(
        &self,
        grid_width: usize,
        grid_height: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let x_end = (self.x + self.width).min(grid_width);
        let y_end = (self.y + self.height).min(grid_height);
        (self.x..x_end).flat_map(move |x| (self.y..y_end).map(move |y| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn single_cow_sweep_visits_every_cell_before_repeating() {
        let (w, h) = (4, 3);
        let mut herd = Herd::new();
        let mut visited = HashSet::new();
        visited.insert((herd.x(), herd.y()));
        // One full cycle: down each column, shift right, back at origin.
        for _ in 0..w * h + w {
            herd.advance(w, h);
            visited.insert((herd.x(), herd.y()));
            if (herd.x(), herd.y()) == (0, 0) && visited.len() > 1 {
                break;
            }
        }
        assert_eq!(visited.len(), w * h, "sweep must cover the whole grid");
    }

    #[test]
    fn wide_herd_stays_within_grid_bounds() {
        let (w, h) = (10, 10);
        let mut herd = Herd::new();
        herd.grow(); // 2x1
        herd.grow(); // 2x2
        herd.grow(); // 3x2
        for _ in 0..500 {
            herd.advance(w, h);
            assert!(herd.x() + herd.width() <= w);
            assert!(herd.y() + herd.height() <= h);
        }
    }

    #[test]
    fn right_edge_wrap_restarts_sweep_moving_down() {
        let (w, h) = (2, 2);
        let mut herd = Herd::new();
        // 1x1 on 2x2: down, right+up, up, wrap.
        herd.advance(w, h);
        assert_eq!((herd.x(), herd.y()), (0, 1));
        herd.advance(w, h);
        assert_eq!((herd.x(), herd.y()), (1, 1));
        assert_eq!(herd.direction(), Direction::Up);
        herd.advance(w, h);
        assert_eq!((herd.x(), herd.y()), (1, 0));
        herd.advance(w, h);
        assert_eq!((herd.x(), herd.y()), (0, 0));
        assert_eq!(herd.direction(), Direction::Down);
    }

    #[test]
    fn grow_alternates_width_and_height_and_resets_position() {
        let mut herd = Herd::new();
        for _ in 0..20 {
            herd.advance(10, 10);
        }
        herd.grow();
        assert_eq!((herd.width(), herd.height()), (2, 1));
        assert_eq!((herd.x(), herd.y()), (0, 0));
        herd.grow();
        assert_eq!((herd.width(), herd.height()), (2, 2));
        herd.grow();
        assert_eq!((herd.width(), herd.height()), (3, 2));
    }

    #[test]
    fn footprint_is_clipped_to_grid() {
        let mut herd = Herd::new();
        herd.grow();
        herd.grow(); // 2x2 at origin
        let cells: Vec<_> = herd.cells_within(1, 1).collect();
        assert_eq!(cells, vec![(0, 0)]);
    }
}
