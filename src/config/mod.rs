#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::MatchConfig;

use crate::core::ConfigProvider;
use crate::domain::model::Team;

/// Everything needed to (re)start a match from the configured sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSetup {
    pub batting_first: Team,
    pub bowling_first: Team,
    pub max_overs: u32,
}

impl MatchSetup {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            batting_first: Team::new(config.batting_first_name(), config.batting_first_players()),
            bowling_first: Team::new(config.bowling_first_name(), config.bowling_first_players()),
            max_overs: config.max_overs(),
        }
    }
}
