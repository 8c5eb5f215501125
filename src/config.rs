use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
}

#[derive(Debug, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_path")]
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    #[serde(default = "default_turn_speed_deg")]
    pub turn_speed_deg: f32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_fov_deg")]
    pub fov_deg: f32,
    #[serde(default = "default_strip_width")]
    pub strip_width: f32,
    #[serde(default = "default_shade")]
    pub shade: f32,
    #[serde(default = "default_wall_r")]
    pub wall_r: u8,
    #[serde(default = "default_wall_g")]
    pub wall_g: u8,
    #[serde(default = "default_wall_b")]
    pub wall_b: u8,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
    #[serde(default = "default_minimap_scale")]
    pub minimap_scale: f32,
    #[serde(default = "default_show_minimap")]
    pub show_minimap: bool,
}

// Default values
fn default_tile_size() -> f32 { 64.0 }
fn default_map_path() -> String { "maps/default_map.txt".to_string() }
fn default_walk_speed() -> f32 { 2.5 }
fn default_turn_speed_deg() -> f32 { 3.0 }
fn default_fov_deg() -> f32 { 60.0 }
fn default_strip_width() -> f32 { 1.0 }
fn default_shade() -> f32 { 200.0 }
fn default_wall_r() -> u8 { 225 }
fn default_wall_g() -> u8 { 225 }
fn default_wall_b() -> u8 { 225 }
fn default_bg_r() -> u8 { 243 }
fn default_bg_g() -> u8 { 245 }
fn default_bg_b() -> u8 { 249 }
fn default_minimap_scale() -> f32 { 0.25 }
fn default_show_minimap() -> bool { true }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_size: default_tile_size(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            walk_speed: default_walk_speed(),
            turn_speed_deg: default_turn_speed_deg(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fov_deg: default_fov_deg(),
            strip_width: default_strip_width(),
            shade: default_shade(),
            wall_r: default_wall_r(),
            wall_g: default_wall_g(),
            wall_b: default_wall_b(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
            minimap_scale: default_minimap_scale(),
            show_minimap: default_show_minimap(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            map: MapConfig::default(),
            camera: CameraConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        println!("Loaded configuration from config.toml");
                        config
                    }
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }
}
