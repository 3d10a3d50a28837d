use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cricket-scorer")]
#[command(about = "Ball-by-ball scorer for a two-innings limited-overs match")]
pub struct CliConfig {
    /// Load the match setup from a TOML file instead of the team flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "India")]
    pub team_a_name: String,

    /// Batting-first players, comma separated
    #[arg(long, value_delimiter = ',', default_values = ["Rohit", "Kohli", "Sky", "Hardik", "Pant"])]
    pub team_a_players: Vec<String>,

    #[arg(long, default_value = "Australia")]
    pub team_b_name: String,

    /// Bowling-first players, comma separated
    #[arg(long, value_delimiter = ',', default_values = ["Bumrah", "Shami", "Siraj", "Kuldeep"])]
    pub team_b_players: Vec<String>,

    #[arg(long, default_value = "5")]
    pub overs: u32,

    #[arg(long, default_value = "./scorecards")]
    pub output_path: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

fn trimmed(players: &[String]) -> Vec<String> {
    players
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

impl ConfigProvider for CliConfig {
    fn batting_first_name(&self) -> &str {
        &self.team_a_name
    }

    fn batting_first_players(&self) -> Vec<String> {
        trimmed(&self.team_a_players)
    }

    fn bowling_first_name(&self) -> &str {
        &self.team_b_name
    }

    fn bowling_first_players(&self) -> Vec<String> {
        trimmed(&self.team_b_players)
    }

    fn max_overs(&self) -> u32 {
        self.overs
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_range("overs", self.overs, 1, 50)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("team_a_name", &self.team_a_name)?;
        validation::validate_non_empty_string("team_b_name", &self.team_b_name)?;
        validation::validate_min_len("team_a_players", &self.batting_first_players(), 2)?;
        validation::validate_min_len("team_b_players", &self.bowling_first_players(), 1)?;
        Ok(())
    }
}
