use crate::core::match_state::Match;
use crate::core::scorecard::{BattingRow, BowlingRow};
use crate::core::Storage;
use crate::utils::error::{Result, ScorerError};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SUMMARY_FILE: &str = "match_summary.json";

#[derive(Debug, Clone, Serialize)]
pub struct InningsSummary {
    pub team: String,
    pub score: u32,
    pub wickets: u32,
    pub overs: String,
}

/// Point-in-time view of the match written next to the CSV tables.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub batting_team: String,
    pub bowling_team: String,
    pub innings: u8,
    pub score: u32,
    pub wickets: u32,
    pub overs: String,
    pub max_overs: u32,
    pub target: Option<u32>,
    pub runs_needed: Option<u32>,
    pub current_run_rate: f64,
    pub required_run_rate: Option<f64>,
    pub last_six: Vec<String>,
    pub first_innings: Option<InningsSummary>,
    pub result: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl MatchSummary {
    pub fn from_match(state: &Match) -> Self {
        Self {
            batting_team: state.batting_team().name.clone(),
            bowling_team: state.bowling_team().name.clone(),
            innings: state.innings(),
            score: state.score(),
            wickets: state.wickets(),
            overs: state.overs_text(),
            max_overs: state.max_overs(),
            target: state.target(),
            runs_needed: state.runs_needed(),
            current_run_rate: state.current_run_rate(),
            required_run_rate: state.required_run_rate(),
            last_six: state.last_six().iter().map(|b| b.to_string()).collect(),
            first_innings: state.first_innings().map(|s| InningsSummary {
                team: s.team_name().to_string(),
                score: s.score(),
                wickets: s.wickets(),
                overs: s.overs(),
            }),
            result: state.status().result_text(),
            generated_at: Utc::now(),
        }
    }
}

pub fn batting_csv(rows: &[BattingRow]) -> Result<Vec<u8>> {
    to_csv(rows)
}

pub fn bowling_csv(rows: &[BowlingRow]) -> Result<Vec<u8>> {
    to_csv(rows)
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| ScorerError::IoError(e.into_error()))
}

/// Writes scorecards for both innings plus a JSON summary.
pub struct ReportExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the names of the files written, in write order.
    pub fn export(&self, state: &Match) -> Result<Vec<String>> {
        let mut written = Vec::new();

        if let Some(snapshot) = state.first_innings() {
            tracing::debug!("Exporting innings 1 snapshot for {}", snapshot.team_name());
            written.push(self.write("i1_batting.csv", &batting_csv(snapshot.batting())?)?);
            written.push(self.write("i1_bowling.csv", &bowling_csv(snapshot.bowling())?)?);
        }

        let innings = state.innings();
        written.push(self.write(
            &format!("i{}_batting.csv", innings),
            &batting_csv(&state.batting_rows())?,
        )?);
        written.push(self.write(
            &format!("i{}_bowling.csv", innings),
            &bowling_csv(&state.bowling_rows())?,
        )?);

        let summary = serde_json::to_vec_pretty(&MatchSummary::from_match(state))?;
        written.push(self.write(SUMMARY_FILE, &summary)?);

        tracing::info!("Exported {} report files", written.len());
        Ok(written)
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<String> {
        self.storage.write_file(name, data)?;
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{BattingRecord, Team};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for &MockStorage {
        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .borrow_mut()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_batting_csv_header_and_order() {
        let rows = vec![
            BattingRow::from_record(
                "Rohit",
                &BattingRecord {
                    runs: 10,
                    balls: 8,
                    out: true,
                },
            ),
            BattingRow::from_record("Kohli", &BattingRecord::default()),
        ];
        let csv = String::from_utf8(batting_csv(&rows).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Player,R,B,SR,Status");
        assert_eq!(lines[1], "Rohit,10,8,125.0,Out");
        assert_eq!(lines[2], "Kohli,0,0,0.0,Not Out");
    }

    #[test]
    fn test_export_first_innings_only_writes_current_tables() {
        let state = Match::new(
            Team::from_roster("India", "Rohit\nKohli"),
            Team::from_roster("Australia", "Cummins"),
            2,
        )
        .unwrap();
        let storage = MockStorage::default();
        let exporter = ReportExporter::new(&storage);

        let written = exporter.export(&state).unwrap();

        assert_eq!(
            written,
            vec!["i1_batting.csv", "i1_bowling.csv", SUMMARY_FILE]
        );
        let bowling = storage.get_file("i1_bowling.csv").unwrap();
        assert!(bowling.starts_with("Bowler,O,W,R,Econ"));
        assert!(bowling.contains("Cummins,0.0,0,0,0.0"));

        let summary: serde_json::Value =
            serde_json::from_str(&storage.get_file(SUMMARY_FILE).unwrap()).unwrap();
        assert_eq!(summary["batting_team"], "India");
        assert_eq!(summary["innings"], 1);
        assert!(summary["target"].is_null());
    }
}
