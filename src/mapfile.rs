use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::grid::Grid;

/// Built-in fallback map: the 15x11 starter room
pub const DEFAULT_LAYOUT: &str = "\
111111111111111
100011100000001
100001000100101
100101000100101
101100001000001
101000001001001
101100000001001
100010001001001
100000001000001
100000000000001
111111111111111
";

/// JSON map format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapFile {
    #[serde(rename = "mapName", default)]
    pub map_name: String,
    /// Row-major occupancy values; any nonzero cell is a wall
    pub grid: Vec<Vec<i32>>,
    #[serde(rename = "spawnCol", default)]
    pub spawn_col: Option<i32>,
    #[serde(rename = "spawnRow", default)]
    pub spawn_row: Option<i32>,
}

impl MapFile {
    /// Convert the parsed map into a grid plus the optional spawn point
    /// in world coordinates (center of the spawn cell)
    pub fn into_grid(self, tile_size: f32) -> Result<(Grid, Option<(f32, f32)>), String> {
        if self.grid.is_empty() || self.grid[0].is_empty() {
            return Err("Map grid is empty".to_string());
        }

        let rows = self.grid.len() as i32;
        let cols = self.grid[0].len() as i32;
        let mut grid = Grid::new(rows, cols, tile_size);

        for (y, row) in self.grid.iter().enumerate() {
            if row.len() as i32 != cols {
                return Err(format!(
                    "Map row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    cols
                ));
            }
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    let id = grid.get_id(x as i32, y as i32);
                    grid.cells[id as usize] = 1;
                }
            }
        }

        let spawn = match (self.spawn_col, self.spawn_row) {
            (Some(col), Some(row)) => Some((
                (col as f32 + 0.5) * tile_size,
                (row as f32 + 0.5) * tile_size,
            )),
            _ => None,
        };

        Ok((grid, spawn))
    }
}

/// Load a map from disk
///
/// `.json` files use the `MapFile` format; anything else is parsed as a
/// text layout (which carries no spawn point).
pub fn load_map(path: &str, tile_size: f32) -> Result<(Grid, Option<(f32, f32)>), String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read map file {}: {}", path, e))?;

    if Path::new(path).extension().and_then(|s| s.to_str()) == Some("json") {
        let map: MapFile = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse map file {}: {}", path, e))?;
        map.into_grid(tile_size)
    } else {
        let grid = Grid::from_layout(&contents, tile_size)
            .map_err(|e| format!("Failed to parse map file {}: {}", path, e))?;
        Ok((grid, None))
    }
}

/// Load the configured map, falling back to the built-in room on failure
pub fn load_map_or_default(path: &str, tile_size: f32) -> (Grid, Option<(f32, f32)>) {
    match load_map(path, tile_size) {
        Ok(loaded) => {
            println!("Loaded map from {}", path);
            loaded
        }
        Err(e) => {
            eprintln!("Warning: {}", e);
            eprintln!("Using built-in default map");
            let grid = Grid::from_layout(DEFAULT_LAYOUT, tile_size)
                .expect("built-in layout parses");
            (grid, None)
        }
    }
}
