// Library exports for the strategy-driven Battlesnakes
// This allows the replay tool and other utilities to use the core bot logic

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod grid;
pub mod personality;
pub mod replay;
pub mod scorecard;
pub mod strategy;
pub mod types;
