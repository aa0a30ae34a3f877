pub mod coin;
pub mod enemy;
pub mod player;
