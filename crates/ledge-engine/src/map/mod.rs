pub mod level;
pub mod tilemap;
