use crate::core::ConfigProvider;
use crate::domain::model::parse_roster;
use crate::utils::error::{Result, ScorerError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(rename = "match")]
    pub settings: MatchSettings,
    pub batting_first: TeamConfig,
    pub bowling_first: TeamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSettings {
    pub overs: u32,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub players: Roster,
}

/// Players as a TOML array or as one newline-delimited string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Roster {
    List(Vec<String>),
    Text(String),
}

impl Roster {
    pub fn players(&self) -> Vec<String> {
        match self {
            Self::List(items) => items
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Text(text) => parse_roster(text),
        }
    }
}

const DEFAULT_OUTPUT_PATH: &str = "./scorecards";

impl MatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScorerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScorerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_range("match.overs", self.settings.overs, 1, 50)?;
        validation::validate_path("match.output_path", self.output_path())?;
        validation::validate_non_empty_string("batting_first.name", &self.batting_first.name)?;
        validation::validate_non_empty_string("bowling_first.name", &self.bowling_first.name)?;
        validation::validate_min_len(
            "batting_first.players",
            &self.batting_first.players.players(),
            2,
        )?;
        validation::validate_min_len(
            "bowling_first.players",
            &self.bowling_first.players.players(),
            1,
        )?;
        Ok(())
    }
}

impl ConfigProvider for MatchConfig {
    fn batting_first_name(&self) -> &str {
        &self.batting_first.name
    }

    fn batting_first_players(&self) -> Vec<String> {
        self.batting_first.players.players()
    }

    fn bowling_first_name(&self) -> &str {
        &self.bowling_first.name
    }

    fn bowling_first_players(&self) -> Vec<String> {
        self.bowling_first.players.players()
    }

    fn max_overs(&self) -> u32 {
        self.settings.overs
    }

    fn output_path(&self) -> &str {
        self.settings
            .output_path
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}

impl Validate for MatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
