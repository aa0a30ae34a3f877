pub mod aabb;
pub mod body;
pub mod time;
