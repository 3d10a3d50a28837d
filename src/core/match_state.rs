use crate::core::metrics::{self, BALLS_PER_OVER};
use crate::core::scorecard::{BattingRow, BowlingRow, InningsSnapshot};
use crate::domain::model::{BallOutcome, BattingRecord, BowlingRecord, InningsStatus, Team};
use crate::utils::error::{Result, ScorerError};
use crate::utils::validation::find_duplicate;

pub const MIN_OVERS: u32 = 1;
pub const MAX_OVERS: u32 = 50;

const RECENT_BALLS: usize = 6;

/// Aggregate root of a two-innings limited-overs match.
#[derive(Debug, Clone)]
pub struct Match {
    innings: u8,
    batting: Team,
    bowling: Team,
    score: u32,
    wickets: u32,
    legal_balls: u32,
    target: Option<u32>,
    max_overs: u32,
    match_over: bool,
    status: InningsStatus,
    history: Vec<BallOutcome>,
    first_innings: Option<InningsSnapshot>,
    batting_card: Vec<(String, BattingRecord)>,
    bowling_card: Vec<(String, BowlingRecord)>,
    striker: String,
    non_striker: String,
    bowler: String,
}

fn validate_side(team: &Team, min_players: usize, role: &str) -> Result<()> {
    if team.size() < min_players {
        return Err(ScorerError::setup(format!(
            "{} side '{}' needs at least {} players, got {}",
            role,
            team.name,
            min_players,
            team.size()
        )));
    }
    if let Some(dup) = find_duplicate(&team.players) {
        return Err(ScorerError::setup(format!(
            "player '{}' is listed twice in '{}'",
            dup, team.name
        )));
    }
    Ok(())
}

fn fresh_batting_card(team: &Team) -> Vec<(String, BattingRecord)> {
    team.players
        .iter()
        .map(|p| (p.clone(), BattingRecord::default()))
        .collect()
}

fn fresh_bowling_card(team: &Team) -> Vec<(String, BowlingRecord)> {
    team.players
        .iter()
        .map(|p| (p.clone(), BowlingRecord::default()))
        .collect()
}

impl Match {
    pub fn new(batting_first: Team, bowling_first: Team, max_overs: u32) -> Result<Self> {
        validate_side(&batting_first, 2, "Batting")?;
        validate_side(&bowling_first, 1, "Bowling")?;
        if !(MIN_OVERS..=MAX_OVERS).contains(&max_overs) {
            return Err(ScorerError::setup(format!(
                "overs must be between {} and {}, got {}",
                MIN_OVERS, MAX_OVERS, max_overs
            )));
        }

        let striker = batting_first.players[0].clone();
        let non_striker = batting_first.players[1].clone();
        let bowler = bowling_first.players[0].clone();

        Ok(Self {
            innings: 1,
            batting_card: fresh_batting_card(&batting_first),
            bowling_card: fresh_bowling_card(&bowling_first),
            batting: batting_first,
            bowling: bowling_first,
            score: 0,
            wickets: 0,
            legal_balls: 0,
            target: None,
            max_overs,
            match_over: false,
            status: InningsStatus::Continue,
            history: Vec::new(),
            first_innings: None,
            striker,
            non_striker,
            bowler,
        })
    }

    // --- commands ---

    pub fn record_ball(&mut self, outcome: BallOutcome) -> Result<InningsStatus> {
        self.ensure_in_play()?;
        let striker_idx = self.batter_index(&self.striker)?;
        if self.batting_card[striker_idx].1.out {
            return Err(ScorerError::transition(format!(
                "{} is already out; select a new striker",
                self.striker
            )));
        }
        let bowler_idx = self.bowler_index(&self.bowler)?;

        self.score += outcome.total_runs();
        self.history.push(outcome);
        {
            let bowling = &mut self.bowling_card[bowler_idx].1;
            bowling.runs += outcome.total_runs();
            if outcome.is_legal() {
                bowling.balls += 1;
            }
        }

        if outcome.is_legal() {
            self.legal_balls += 1;
            let batting = &mut self.batting_card[striker_idx].1;
            batting.balls += 1;
            batting.runs += outcome.bat_runs();
        }

        match outcome {
            BallOutcome::Wicket => {
                self.wickets += 1;
                self.batting_card[striker_idx].1.out = true;
                self.bowling_card[bowler_idx].1.wickets += 1;
                tracing::info!("WICKET! {} departed, b {}", self.striker, self.bowler);
            }
            BallOutcome::Runs(4) => tracing::info!("FOUR! {} finds the rope", self.striker),
            BallOutcome::Runs(6) => tracing::info!("SIX! {} clears the boundary", self.striker),
            _ => {}
        }

        let status = self.check_innings_end();

        if outcome == BallOutcome::Wicket && status == InningsStatus::Continue {
            self.bring_in_next_batter();
        }

        let over_complete = outcome.is_legal() && self.legal_balls % BALLS_PER_OVER == 0;
        if over_complete {
            tracing::info!(
                "Over completed: {} overs done",
                metrics::format_overs(self.legal_balls)
            );
        }
        if outcome.is_odd_run() ^ over_complete {
            std::mem::swap(&mut self.striker, &mut self.non_striker);
        }

        tracing::debug!(
            ball = %outcome,
            score = self.score,
            wickets = self.wickets,
            overs = %self.overs_text(),
            striker = %self.striker,
            "ball recorded"
        );

        self.apply_status(status.clone());
        Ok(status)
    }

    pub fn switch_innings(&mut self) -> Result<()> {
        if self.innings != 1 {
            return Err(ScorerError::transition("innings have already been switched"));
        }
        if self.check_innings_end() != InningsStatus::InningsOneDone {
            return Err(ScorerError::transition("innings 1 is still in progress"));
        }
        validate_side(&self.bowling, 2, "Batting")?;

        let snapshot = InningsSnapshot::capture(
            &self.batting.name,
            self.score,
            self.wickets,
            self.legal_balls,
            self.batting_rows(),
            self.bowling_rows(),
        );
        tracing::info!(
            "Innings 1 closed: {} {}/{} in {} overs",
            self.batting.name,
            self.score,
            self.wickets,
            self.overs_text()
        );

        self.first_innings = Some(snapshot);
        self.target = Some(self.score + 1);
        std::mem::swap(&mut self.batting, &mut self.bowling);
        self.score = 0;
        self.wickets = 0;
        self.legal_balls = 0;
        self.batting_card = fresh_batting_card(&self.batting);
        self.bowling_card = fresh_bowling_card(&self.bowling);
        self.striker = self.batting.players[0].clone();
        self.non_striker = self.batting.players[1].clone();
        self.bowler = self.bowling.players[0].clone();
        self.innings = 2;
        self.history.clear();
        self.status = InningsStatus::Continue;

        tracing::info!(
            "Innings 2: {} need {} from {} overs",
            self.batting.name,
            self.target.unwrap_or_default(),
            self.max_overs
        );
        Ok(())
    }

    pub fn select_batters(&mut self, striker: &str, non_striker: &str) -> Result<()> {
        self.ensure_in_play()?;
        if striker == non_striker {
            return Err(ScorerError::transition(
                "striker and non-striker must be different players",
            ));
        }
        for name in [striker, non_striker] {
            let idx = self.batter_index(name)?;
            if self.batting_card[idx].1.out {
                return Err(ScorerError::transition(format!("{} is already out", name)));
            }
        }
        self.striker = striker.to_string();
        self.non_striker = non_striker.to_string();
        Ok(())
    }

    pub fn select_bowler(&mut self, bowler: &str) -> Result<()> {
        self.ensure_in_play()?;
        self.bowler_index(bowler)?;
        self.bowler = bowler.to_string();
        Ok(())
    }

    // --- queries ---

    /// Evaluates whether the current innings (or the match) has finished.
    pub fn check_innings_end(&self) -> InningsStatus {
        let all_out = self.wickets as usize >= self.batting.size().saturating_sub(1);
        let overs_done = self.legal_balls >= self.max_overs * BALLS_PER_OVER;

        match self.target {
            Some(target) if self.score >= target => InningsStatus::MatchWon {
                winner: self.batting.name.clone(),
                wickets: self.wickets_in_hand(),
            },
            Some(target) if all_out || overs_done => InningsStatus::TargetMissed {
                winner: self.bowling.name.clone(),
                runs: target.saturating_sub(self.score + 1),
            },
            None if all_out || overs_done => InningsStatus::InningsOneDone,
            _ => InningsStatus::Continue,
        }
    }

    pub fn innings(&self) -> u8 {
        self.innings
    }

    pub fn batting_team(&self) -> &Team {
        &self.batting
    }

    pub fn bowling_team(&self) -> &Team {
        &self.bowling
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wickets(&self) -> u32 {
        self.wickets
    }

    pub fn legal_balls(&self) -> u32 {
        self.legal_balls
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn max_overs(&self) -> u32 {
        self.max_overs
    }

    pub fn is_match_over(&self) -> bool {
        self.match_over
    }

    /// Status as of the last delivery or innings switch.
    pub fn status(&self) -> &InningsStatus {
        &self.status
    }

    pub fn striker(&self) -> &str {
        &self.striker
    }

    pub fn non_striker(&self) -> &str {
        &self.non_striker
    }

    pub fn bowler(&self) -> &str {
        &self.bowler
    }

    pub fn history(&self) -> &[BallOutcome] {
        &self.history
    }

    pub fn last_six(&self) -> &[BallOutcome] {
        let start = self.history.len().saturating_sub(RECENT_BALLS);
        &self.history[start..]
    }

    pub fn first_innings(&self) -> Option<&InningsSnapshot> {
        self.first_innings.as_ref()
    }

    pub fn batting_record(&self, player: &str) -> Option<&BattingRecord> {
        self.batting_card
            .iter()
            .find(|(name, _)| name == player)
            .map(|(_, record)| record)
    }

    pub fn bowling_record(&self, player: &str) -> Option<&BowlingRecord> {
        self.bowling_card
            .iter()
            .find(|(name, _)| name == player)
            .map(|(_, record)| record)
    }

    /// Batters still available to come to the crease, in roster order.
    pub fn not_out_batters(&self) -> Vec<&str> {
        self.batting_card
            .iter()
            .filter(|(_, record)| !record.out)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn batting_rows(&self) -> Vec<BattingRow> {
        self.batting_card
            .iter()
            .map(|(name, record)| BattingRow::from_record(name, record))
            .collect()
    }

    pub fn bowling_rows(&self) -> Vec<BowlingRow> {
        self.bowling_card
            .iter()
            .map(|(name, record)| BowlingRow::from_record(name, record))
            .collect()
    }

    pub fn overs_text(&self) -> String {
        metrics::format_overs(self.legal_balls)
    }

    pub fn balls_remaining(&self) -> u32 {
        (self.max_overs * BALLS_PER_OVER).saturating_sub(self.legal_balls)
    }

    pub fn current_run_rate(&self) -> f64 {
        metrics::current_run_rate(self.score, self.legal_balls)
    }

    /// `None` during the first innings.
    pub fn runs_needed(&self) -> Option<u32> {
        self.target
            .map(|target| metrics::runs_needed(target, self.score))
    }

    /// `None` during the first innings.
    pub fn required_run_rate(&self) -> Option<f64> {
        self.target.map(|target| {
            metrics::required_run_rate(target, self.score, self.balls_remaining())
        })
    }

    pub fn wickets_in_hand(&self) -> u32 {
        (self.batting.size() as u32)
            .saturating_sub(1)
            .saturating_sub(self.wickets)
    }

    // --- internals ---

    fn ensure_in_play(&self) -> Result<()> {
        if self.match_over {
            return Err(ScorerError::transition("the match is over; reset to start again"));
        }
        if self.status == InningsStatus::InningsOneDone {
            return Err(ScorerError::transition(
                "innings 1 has ended; switch innings before scoring",
            ));
        }
        Ok(())
    }

    fn batter_index(&self, name: &str) -> Result<usize> {
        self.batting_card
            .iter()
            .position(|(player, _)| player == name)
            .ok_or_else(|| {
                ScorerError::transition(format!(
                    "{} is not in the batting side {}",
                    name, self.batting.name
                ))
            })
    }

    fn bowler_index(&self, name: &str) -> Result<usize> {
        self.bowling_card
            .iter()
            .position(|(player, _)| player == name)
            .ok_or_else(|| {
                ScorerError::transition(format!(
                    "{} is not in the bowling side {}",
                    name, self.bowling.name
                ))
            })
    }

    /// Sends the next not-out batter in roster order to the striker's end.
    fn bring_in_next_batter(&mut self) {
        let incoming = self
            .batting_card
            .iter()
            .find(|(name, record)| !record.out && *name != self.non_striker)
            .map(|(name, _)| name.clone());
        if let Some(name) = incoming {
            tracing::info!("{} walks in", name);
            self.striker = name;
        }
    }

    fn apply_status(&mut self, status: InningsStatus) {
        match &status {
            InningsStatus::InningsOneDone => tracing::info!(
                "Innings 1 finished! {} {}/{}",
                self.batting.name,
                self.score,
                self.wickets
            ),
            s if s.is_match_over() => {
                self.match_over = true;
                if let Some(text) = s.result_text() {
                    tracing::info!("Match over! {}", text);
                }
            }
            _ => {}
        }
        self.status = status;
    }
}
