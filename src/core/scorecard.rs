use crate::core::metrics::{economy, format_overs, strike_rate};
use crate::domain::model::{BattingRecord, BowlingRecord};
use serde::{Deserialize, Serialize};

/// One line of the batting table. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "R")]
    pub runs: u32,
    #[serde(rename = "B")]
    pub balls: u32,
    #[serde(rename = "SR")]
    pub strike_rate: f64,
    #[serde(rename = "Status")]
    pub status: String,
}

impl BattingRow {
    pub fn from_record(player: &str, record: &BattingRecord) -> Self {
        Self {
            player: player.to_string(),
            runs: record.runs,
            balls: record.balls,
            strike_rate: strike_rate(record.runs, record.balls),
            status: if record.out { "Out" } else { "Not Out" }.to_string(),
        }
    }
}

/// One line of the bowling table. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingRow {
    #[serde(rename = "Bowler")]
    pub bowler: String,
    #[serde(rename = "O")]
    pub overs: String,
    #[serde(rename = "W")]
    pub wickets: u32,
    #[serde(rename = "R")]
    pub runs: u32,
    #[serde(rename = "Econ")]
    pub economy: f64,
}

impl BowlingRow {
    pub fn from_record(bowler: &str, record: &BowlingRecord) -> Self {
        Self {
            bowler: bowler.to_string(),
            overs: format_overs(record.balls),
            wickets: record.wickets,
            runs: record.runs,
            economy: economy(record.runs, record.balls),
        }
    }
}

/// Frozen tables of a completed innings, kept for reporting after the sides swap.
///
/// Fields are private so a captured snapshot cannot be edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningsSnapshot {
    team_name: String,
    score: u32,
    wickets: u32,
    legal_balls: u32,
    batting: Vec<BattingRow>,
    bowling: Vec<BowlingRow>,
}

impl InningsSnapshot {
    pub(crate) fn capture(
        team_name: &str,
        score: u32,
        wickets: u32,
        legal_balls: u32,
        batting: Vec<BattingRow>,
        bowling: Vec<BowlingRow>,
    ) -> Self {
        Self {
            team_name: team_name.to_string(),
            score,
            wickets,
            legal_balls,
            batting,
            bowling,
        }
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wickets(&self) -> u32 {
        self.wickets
    }

    pub fn overs(&self) -> String {
        format_overs(self.legal_balls)
    }

    pub fn batting(&self) -> &[BattingRow] {
        &self.batting
    }

    pub fn bowling(&self) -> &[BowlingRow] {
        &self.bowling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batting_row_status_and_rate() {
        let record = BattingRecord {
            runs: 10,
            balls: 8,
            out: true,
        };
        let row = BattingRow::from_record("Rohit", &record);
        assert_eq!(row.strike_rate, 125.0);
        assert_eq!(row.status, "Out");

        let fresh = BattingRow::from_record("Kohli", &BattingRecord::default());
        assert_eq!(fresh.strike_rate, 0.0);
        assert_eq!(fresh.status, "Not Out");
    }

    #[test]
    fn test_bowling_row_overs_and_economy() {
        let record = BowlingRecord {
            runs: 10,
            balls: 9,
            wickets: 2,
        };
        let row = BowlingRow::from_record("Bumrah", &record);
        assert_eq!(row.overs, "1.3");
        assert_eq!(row.economy, 6.67);
        assert_eq!(row.wickets, 2);
    }
}
