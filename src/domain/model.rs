use crate::utils::error::{Result, ScorerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single delivery result as entered by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallOutcome {
    Dot,
    Runs(u8),
    Wicket,
    Wide,
    NoBall,
}

impl BallOutcome {
    pub const TOKENS: [&'static str; 9] = ["0", "1", "2", "3", "4", "6", "W", "WD", "NB"];

    /// Wides and no-balls do not count toward the six-ball over.
    pub fn is_legal(self) -> bool {
        !matches!(self, Self::Wide | Self::NoBall)
    }

    /// Runs credited to the batter off the bat.
    pub fn bat_runs(self) -> u32 {
        match self {
            Self::Runs(n) => u32::from(n),
            _ => 0,
        }
    }

    /// Runs added to the team total (extras are a flat one run).
    pub fn total_runs(self) -> u32 {
        match self {
            Self::Runs(n) => u32::from(n),
            Self::Wide | Self::NoBall => 1,
            Self::Dot | Self::Wicket => 0,
        }
    }

    pub fn is_odd_run(self) -> bool {
        matches!(self, Self::Runs(1) | Self::Runs(3))
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Dot => "0",
            Self::Runs(1) => "1",
            Self::Runs(2) => "2",
            Self::Runs(3) => "3",
            Self::Runs(4) => "4",
            Self::Runs(6) => "6",
            // Runs(n) is only built through FromStr, which rejects other values.
            Self::Runs(_) => "?",
            Self::Wicket => "W",
            Self::Wide => "WD",
            Self::NoBall => "NB",
        }
    }
}

impl FromStr for BallOutcome {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "0" => Ok(Self::Dot),
            "1" => Ok(Self::Runs(1)),
            "2" => Ok(Self::Runs(2)),
            "3" => Ok(Self::Runs(3)),
            "4" => Ok(Self::Runs(4)),
            "6" => Ok(Self::Runs(6)),
            "W" => Ok(Self::Wicket),
            "WD" => Ok(Self::Wide),
            "NB" => Ok(Self::NoBall),
            other => Err(ScorerError::validation(format!(
                "unknown ball outcome '{}', expected one of {}",
                other,
                Self::TOKENS.join(", ")
            ))),
        }
    }
}

impl fmt::Display for BallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self {
            name: name.into(),
            players,
        }
    }

    /// Builds a team from a newline-delimited roster, dropping blank lines.
    pub fn from_roster(name: impl Into<String>, roster: &str) -> Self {
        Self::new(name, parse_roster(roster))
    }

    pub fn size(&self) -> usize {
        self.players.len()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }
}

pub fn parse_roster(roster: &str) -> Vec<String> {
    roster
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingRecord {
    pub runs: u32,
    pub balls: u32,
    pub out: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingRecord {
    pub runs: u32,
    pub balls: u32,
    pub wickets: u32,
}

/// Result of evaluating the innings after a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InningsStatus {
    Continue,
    InningsOneDone,
    /// The chasing side reached the target.
    MatchWon { winner: String, wickets: u32 },
    /// The defending side bowled the chase out or ran it out of overs.
    TargetMissed { winner: String, runs: u32 },
}

impl InningsStatus {
    pub fn is_match_over(&self) -> bool {
        matches!(self, Self::MatchWon { .. } | Self::TargetMissed { .. })
    }

    pub fn result_text(&self) -> Option<String> {
        match self {
            Self::MatchWon { winner, wickets } => {
                Some(format!("{} won by {} wickets", winner, wickets))
            }
            Self::TargetMissed { winner, runs } => Some(format!("{} won by {} runs", winner, runs)),
            Self::Continue | Self::InningsOneDone => None,
        }
    }
}
