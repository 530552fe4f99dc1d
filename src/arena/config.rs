use std::{fs, path::Path};

use color_eyre::{eyre::WrapErr, Result};
use serde::{Deserialize, Serialize};

use crate::arena::board::Board;

/// How a snake running its head into its own body is punished.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelfCollisionPolicy {
    /// The overlap has to persist for `self_collision_grace` seconds.
    Graced,
    /// The snake dies on the step that produced the overlap.
    Immediate,
}

/// Rules for a whole tournament. Built once and only ever borrowed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width:                   i64,
    pub grid_height:                  i64,
    pub snake_speed:                  f64,
    pub max_rounds:                   u32,
    pub round_time:                   f64,
    pub trap_count:                   usize,
    pub trap_penalty:                 u32,
    pub trap_segment_penalty:         u32,
    pub collision_segment_penalty:    u32,
    pub shield_duration:              f64,
    pub growth_per_food:              u32,
    pub apples_per_quadrant:          usize,
    pub scattered_food:               usize,
    pub self_collision_grace:         f64,
    pub collision_window:             f64,
    pub stalemate_collisions:         u32,
    pub early_victory_margin:         u32,
    pub min_rounds_for_early_victory: u32,
    pub self_collision:               SelfCollisionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width:                   40,
            grid_height:                  30,
            snake_speed:                  10.0,
            max_rounds:                   3,
            round_time:                   20.0,
            trap_count:                   15,
            trap_penalty:                 2,
            trap_segment_penalty:         4,
            collision_segment_penalty:    2,
            shield_duration:              2.0,
            growth_per_food:              2,
            apples_per_quadrant:          8,
            scattered_food:               8,
            self_collision_grace:         3.0,
            collision_window:             1.0,
            stalemate_collisions:         3,
            early_victory_margin:         2,
            min_rounds_for_early_victory: 2,
            self_collision:               SelfCollisionPolicy::Graced,
        }
    }
}

impl GameConfig {
    /// # Errors
    ///
    /// Fails if the file can't be read or isn't a valid config document.
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw)
            .wrap_err_with(|| format!("parsing config {}", path.display()))
    }

    #[must_use]
    pub const fn board(&self) -> Board {
        Board::new(self.grid_width, self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_documents_keep_defaults() {
        let config: GameConfig = serde_json::from_str(
            r#"{ "max_rounds": 5, "self_collision": "immediate" }"#,
        )
        .unwrap();
        assert_eq!(config.max_rounds, 5);
        assert_eq!(config.self_collision, SelfCollisionPolicy::Immediate);
        assert_eq!(config.trap_count, GameConfig::default().trap_count);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(GameConfig::from_json_file("/definitely/not/here.json")
            .is_err());
    }
}
