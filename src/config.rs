//! Settings file and overrides for the terminal game.
//!
//! A settings file is a JSON object whose keys mirror [`Rules`]. Every key is optional:
//!
//! ```json
//! { "width": 12, "height": 24, "start_level": 3, "level_up": "accumulate" }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{LevelUpPolicy, Rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelUp {
    Reset,
    Accumulate,
}

impl From<LevelUp> for LevelUpPolicy {
    fn from(value: LevelUp) -> Self {
        match value {
            LevelUp::Reset => LevelUpPolicy::ResetScoreAndBoard,
            LevelUp::Accumulate => LevelUpPolicy::Accumulate,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub seed: Option<u32>,
    pub width: Option<u8>,
    pub height: Option<u8>,
    pub base_step_delay_ms: Option<u32>,
    pub min_step_delay_ms: Option<u32>,
    pub speed_decay: Option<f64>,
    pub start_level: Option<u32>,
    pub level_up_score: Option<u32>,
    pub line_clear_points: Option<u32>,
    pub multi_line_bonus: Option<u32>,
    pub level_up: Option<LevelUp>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing settings file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Values set in `top` win over values set in `self`.
    pub fn overlay(self, top: Settings) -> Settings {
        Settings {
            seed: top.seed.or(self.seed),
            width: top.width.or(self.width),
            height: top.height.or(self.height),
            base_step_delay_ms: top.base_step_delay_ms.or(self.base_step_delay_ms),
            min_step_delay_ms: top.min_step_delay_ms.or(self.min_step_delay_ms),
            speed_decay: top.speed_decay.or(self.speed_decay),
            start_level: top.start_level.or(self.start_level),
            level_up_score: top.level_up_score.or(self.level_up_score),
            line_clear_points: top.line_clear_points.or(self.line_clear_points),
            multi_line_bonus: top.multi_line_bonus.or(self.multi_line_bonus),
            level_up: top.level_up.or(self.level_up),
        }
    }

    /// Fill unset values from [`Rules::default`] and validate the result.
    pub fn into_rules(self) -> Result<Rules> {
        let d = Rules::default();
        let rules = Rules {
            width: self.width.unwrap_or(d.width),
            height: self.height.unwrap_or(d.height),
            base_step_delay_ms: self.base_step_delay_ms.unwrap_or(d.base_step_delay_ms),
            min_step_delay_ms: self.min_step_delay_ms.unwrap_or(d.min_step_delay_ms),
            speed_decay: self.speed_decay.unwrap_or(d.speed_decay),
            start_level: self.start_level.unwrap_or(d.start_level),
            level_up_score: self.level_up_score.unwrap_or(d.level_up_score),
            line_clear_points: self.line_clear_points.unwrap_or(d.line_clear_points),
            multi_line_bonus: self.multi_line_bonus.unwrap_or(d.multi_line_bonus),
            level_up: self.level_up.map(Into::into).unwrap_or(d.level_up),
        };
        rules.validate().context("invalid game rules")?;
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_default_rules() {
        let rules = Settings::parse("{}").unwrap().into_rules().unwrap();
        assert_eq!(rules, Rules::default());
    }

    #[test]
    fn overlay_prefers_top_values() {
        let file = Settings {
            width: Some(12),
            height: Some(30),
            ..Settings::default()
        };
        let cli = Settings {
            width: Some(16),
            ..Settings::default()
        };
        let merged = file.overlay(cli);
        assert_eq!(merged.width, Some(16));
        assert_eq!(merged.height, Some(30));
    }

    #[test]
    fn level_up_names_are_snake_case() {
        let s = Settings::parse(r#"{ "level_up": "accumulate" }"#).unwrap();
        assert_eq!(s.level_up, Some(LevelUp::Accumulate));
    }
}
