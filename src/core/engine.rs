use crate::core::match_state::Match;
use crate::domain::model::{BallOutcome, InningsStatus, Team};
use crate::utils::error::{Result, ScorerError};

/// Owns at most one match and gates every command on its lifecycle.
///
/// Before `initialize_match` (and after `reset_match`) the engine is in the
/// pre-setup state and every command except initialization is rejected.
#[derive(Debug, Default)]
pub struct MatchEngine {
    state: Option<Match>,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize_match(
        &mut self,
        batting_first: Team,
        bowling_first: Team,
        max_overs: u32,
    ) -> Result<&Match> {
        if self.state.is_some() {
            return Err(ScorerError::transition(
                "a match is already in progress; reset it first",
            ));
        }
        tracing::info!(
            "Setting up {} vs {}, {} overs",
            batting_first.name,
            bowling_first.name,
            max_overs
        );
        let state = Match::new(batting_first, bowling_first, max_overs)?;
        Ok(self.state.insert(state))
    }

    pub fn record_ball(&mut self, outcome: BallOutcome) -> Result<InningsStatus> {
        self.state_mut()?.record_ball(outcome)
    }

    pub fn switch_innings(&mut self) -> Result<&Match> {
        let state = self.state_mut()?;
        state.switch_innings()?;
        Ok(state)
    }

    pub fn select_batters(&mut self, striker: &str, non_striker: &str) -> Result<()> {
        self.state_mut()?.select_batters(striker, non_striker)
    }

    pub fn select_bowler(&mut self, bowler: &str) -> Result<()> {
        self.state_mut()?.select_bowler(bowler)
    }

    pub fn check_innings_end(&self) -> Result<InningsStatus> {
        Ok(self.state()?.check_innings_end())
    }

    pub fn reset_match(&mut self) {
        if self.state.take().is_some() {
            tracing::info!("Match state discarded");
        }
    }

    pub fn is_setup(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Result<&Match> {
        self.state
            .as_ref()
            .ok_or_else(|| ScorerError::transition("no match has been set up"))
    }

    fn state_mut(&mut self) -> Result<&mut Match> {
        self.state
            .as_mut()
            .ok_or_else(|| ScorerError::transition("no match has been set up"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides() -> (Team, Team) {
        (
            Team::from_roster("India", "Rohit\nKohli\nSky"),
            Team::from_roster("Australia", "Cummins\nStarc"),
        )
    }

    #[test]
    fn test_commands_before_setup_are_rejected() {
        let mut engine = MatchEngine::new();
        assert!(!engine.is_setup());
        assert!(matches!(
            engine.record_ball(BallOutcome::Dot),
            Err(ScorerError::InvalidTransitionError { .. })
        ));
        assert!(engine.switch_innings().is_err());
        assert!(engine.check_innings_end().is_err());
    }

    #[test]
    fn test_setup_twice_requires_reset() {
        let mut engine = MatchEngine::new();
        let (a, b) = sides();
        engine.initialize_match(a.clone(), b.clone(), 5).unwrap();
        assert!(engine.initialize_match(a.clone(), b.clone(), 5).is_err());

        engine.reset_match();
        assert!(!engine.is_setup());
        let state = engine.initialize_match(a, b, 3).unwrap();
        assert_eq!(state.max_overs(), 3);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_failed_setup_leaves_engine_empty() {
        let mut engine = MatchEngine::new();
        let result = engine.initialize_match(
            Team::from_roster("India", "Rohit"),
            Team::from_roster("Australia", "Cummins"),
            5,
        );
        assert!(matches!(result, Err(ScorerError::SetupError { .. })));
        assert!(!engine.is_setup());
    }
}
