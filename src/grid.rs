/// Occupancy grid for the tile map
/// Cell values: 0=empty/walkable, 1=wall
#[derive(Clone)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    /// Edge length of one square tile in world units
    pub tile_size: f32,
    pub cells: Vec<i32>,
}

impl Grid {
    /// Create a new grid with all cells empty
    pub fn new(rows: i32, cols: i32, tile_size: f32) -> Self {
        Grid {
            rows,
            cols,
            tile_size,
            cells: vec![0; (rows * cols) as usize],
        }
    }

    /// Create a grid with specific wall cells
    pub fn with_blocked(rows: i32, cols: i32, tile_size: f32, blocked: &[i32]) -> Self {
        let mut grid = Self::new(rows, cols, tile_size);
        for &cell_id in blocked {
            if cell_id >= 0 && cell_id < (rows * cols) {
                grid.cells[cell_id as usize] = 1;
            }
        }
        grid
    }

    /// Parse a rectangular text layout into a grid
    ///
    /// '1' and '#' are walls; '0', '.' and space are empty. Every
    /// non-empty line must have the same width.
    pub fn from_layout(text: &str, tile_size: f32) -> Result<Self, String> {
        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.is_empty() {
            return Err("Layout contains no grid lines".to_string());
        }

        let cols = lines[0].chars().count() as i32;
        let rows = lines.len() as i32;
        let mut grid = Self::new(rows, cols, tile_size);

        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(format!(
                    "Layout row {} has {} cells, expected {}",
                    y,
                    line.chars().count(),
                    cols
                ));
            }
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    '1' | '#' => {
                        let id = grid.get_id(x as i32, y as i32);
                        grid.cells[id as usize] = 1;
                    }
                    '0' | '.' | ' ' => {}
                    _ => {
                        return Err(format!("Unknown layout character '{}' in row {}", ch, y));
                    }
                }
            }
        }

        Ok(grid)
    }

    /// Emit the layout as text, the inverse of `from_layout`
    pub fn to_layout(&self) -> String {
        let mut result = String::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                result.push(if self.is_blocked(x, y) { '1' } else { '0' });
            }
            result.push('\n');
        }
        result
    }

    /// Convert (x, y) cell coordinates to a cell ID
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.cols
    }

    /// Check if the cell at (x, y) is a wall
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.cols || y < 0 || y >= self.rows {
            return true; // Out of bounds is considered a wall
        }
        self.cells[self.get_id(x, y) as usize] == 1
    }

    /// Check if a continuous world coordinate lands in a wall
    ///
    /// Coordinates outside the covered extent count as walls, so the map
    /// edge behaves like an implicit boundary. Never faults; safe to call
    /// from concurrent ray casts.
    pub fn is_wall(&self, world_x: f32, world_y: f32) -> bool {
        if world_x < 0.0
            || world_x > self.world_width()
            || world_y < 0.0
            || world_y > self.world_height()
        {
            return true;
        }
        let cell_x = (world_x / self.tile_size).floor() as i32;
        let cell_y = (world_y / self.tile_size).floor() as i32;
        self.is_blocked(cell_x, cell_y)
    }

    /// Covered world extent along x
    pub fn world_width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    /// Covered world extent along y
    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Length of the world diagonal, the longest possible sightline
    pub fn diagonal(&self) -> f32 {
        let w = self.world_width();
        let h = self.world_height();
        (w * w + h * h).sqrt()
    }
}
