use gridcast::Grid;

/// Tile size shared by the integration scenarios
pub const TILE: f32 = 64.0;

/// Build a grid from a text layout, panicking on malformed fixtures
pub fn grid_from_layout(text: &str) -> Grid {
    Grid::from_layout(text, TILE).expect("test layout parses")
}
