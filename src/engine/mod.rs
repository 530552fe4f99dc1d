pub mod collision;
pub mod game;
pub mod round;
