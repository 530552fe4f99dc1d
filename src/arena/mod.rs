pub mod board;
pub mod config;
pub mod food;
pub mod layout;
pub mod models;
pub mod snake;
pub mod traps;
pub mod types;
pub mod utils;
