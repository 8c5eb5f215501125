pub mod angle;
pub mod camera;
pub mod config;
pub mod grid;
pub mod mapfile;
pub mod project;
pub mod ray;
pub mod raycast;
pub mod sim;

pub use camera::Camera;
pub use grid::Grid;
pub use ray::{MarchParams, Ray};
pub use raycast::{cast_all_rays, FanParams};
pub use sim::Simulation;
