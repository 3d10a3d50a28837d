use crate::app::report::ReportExporter;
use crate::config::MatchSetup;
use crate::core::engine::MatchEngine;
use crate::core::match_state::Match;
use crate::core::{BallOutcome, InningsStatus, Storage};
use crate::utils::error::{ErrorSeverity, Result, ScorerError};
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  0 1 2 3 4 6 W WD NB   record a ball
  striker <name>        put a batter on strike
  nonstriker <name>     set the non-striker
  bowler <name>         change the bowler
  next                  start the second innings
  card                  show the batting and bowling tables
  export                write CSV scorecards and a JSON summary
  reset                 discard the match and start again
  help                  show this list
  quit                  leave the scorer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ball(BallOutcome),
    Striker(String),
    NonStriker(String),
    Bowler(String),
    NextInnings,
    Card,
    Export,
    Reset,
    Help,
    Quit,
}

fn require_name(keyword: &str, rest: &str) -> Result<String> {
    let name = rest.trim();
    if name.is_empty() {
        return Err(ScorerError::validation(format!(
            "'{}' needs a player name",
            keyword
        )));
    }
    Ok(name.to_string())
}

impl FromStr for Command {
    type Err = ScorerError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (keyword, rest) = line.split_once(' ').unwrap_or((line, ""));
        match keyword.to_ascii_lowercase().as_str() {
            "striker" => Ok(Self::Striker(require_name(keyword, rest)?)),
            "nonstriker" => Ok(Self::NonStriker(require_name(keyword, rest)?)),
            "bowler" => Ok(Self::Bowler(require_name(keyword, rest)?)),
            "next" => Ok(Self::NextInnings),
            "card" => Ok(Self::Card),
            "export" => Ok(Self::Export),
            "reset" => Ok(Self::Reset),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ if rest.is_empty() => line.parse().map(Self::Ball),
            _ => Err(ScorerError::validation(format!(
                "unknown command '{}'",
                line
            ))),
        }
    }
}

/// What the console should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

/// Line-oriented front-end over a single match engine.
pub struct ScoringConsole<S: Storage> {
    engine: MatchEngine,
    setup: MatchSetup,
    exporter: ReportExporter<S>,
}

impl<S: Storage> ScoringConsole<S> {
    /// Starts the configured match immediately.
    pub fn new(setup: MatchSetup, storage: S) -> Result<Self> {
        let mut engine = MatchEngine::new();
        engine.initialize_match(
            setup.batting_first.clone(),
            setup.bowling_first.clone(),
            setup.max_overs,
        )?;
        Ok(Self {
            engine,
            setup,
            exporter: ReportExporter::new(storage),
        })
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn execute(&mut self, command: Command) -> Result<Step> {
        let text = match command {
            Command::Ball(outcome) => {
                let status = self.engine.record_ball(outcome)?;
                let state = self.engine.state()?;
                let mut text = scoreboard(state);
                if let Some(message) = status_message(state, &status) {
                    text.push('\n');
                    text.push_str(&message);
                }
                text
            }
            Command::Striker(name) => {
                let state = self.engine.state()?;
                let partner = if name == state.non_striker() {
                    state.striker().to_string()
                } else {
                    state.non_striker().to_string()
                };
                self.engine.select_batters(&name, &partner)?;
                format!("{} is on strike", name)
            }
            Command::NonStriker(name) => {
                let state = self.engine.state()?;
                let partner = if name == state.striker() {
                    state.non_striker().to_string()
                } else {
                    state.striker().to_string()
                };
                self.engine.select_batters(&partner, &name)?;
                format!("{} is at the non-striker's end", name)
            }
            Command::Bowler(name) => {
                self.engine.select_bowler(&name)?;
                format!("{} to bowl", name)
            }
            Command::NextInnings => {
                let state = self.engine.switch_innings()?;
                format!(
                    "Chase mode: {} need {} runs from {} overs\n{}",
                    state.batting_team().name,
                    state.target().unwrap_or_default(),
                    state.max_overs(),
                    scoreboard(state)
                )
            }
            Command::Card => scorecard_text(self.engine.state()?),
            // A failed write must not end the match in progress.
            Command::Export => match self.exporter.export(self.engine.state()?) {
                Ok(written) => format!("Saved {}", written.join(", ")),
                Err(e) => {
                    tracing::warn!("Export failed: {}", e);
                    format!("❌ Export failed: {}\n💡 {}", e, e.recovery_suggestion())
                }
            },
            Command::Reset => {
                self.engine.reset_match();
                let state = self.engine.initialize_match(
                    self.setup.batting_first.clone(),
                    self.setup.bowling_first.clone(),
                    self.setup.max_overs,
                )?;
                format!("Match reset\n{}", scoreboard(state))
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Step::Quit),
        };
        Ok(Step::Print(text))
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Operator mistakes are reported and the session continues; anything
    /// more severe ends the loop with the error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", scoreboard(self.engine.state()?))?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let step = line.parse::<Command>().and_then(|cmd| self.execute(cmd));
            match step {
                Ok(Step::Print(text)) => writeln!(output, "{}", text)?,
                Ok(Step::Quit) => break,
                Err(e) if e.severity() == ErrorSeverity::Low => {
                    tracing::warn!("Rejected '{}': {}", line.trim(), e);
                    writeln!(output, "❌ {}", e.user_friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

pub fn scoreboard(state: &Match) -> String {
    let recent: Vec<String> = state.last_six().iter().map(|b| b.to_string()).collect();
    let mut line = format!(
        "{} {}-{} | Overs {}/{}",
        state.batting_team().name,
        state.score(),
        state.wickets(),
        state.overs_text(),
        state.max_overs()
    );
    match (state.runs_needed(), state.required_run_rate()) {
        (Some(needed), Some(rrr)) => {
            line.push_str(&format!(" | Need {} runs | Req. RR {:.2}", needed, rrr))
        }
        _ => line.push_str(&format!(" | CRR {:.2}", state.current_run_rate())),
    }
    line.push_str(&format!(" | Last 6: {}", recent.join(" | ")));
    format!(
        "{}\n{}* & {} vs {}",
        line,
        state.striker(),
        state.non_striker(),
        state.bowler()
    )
}

fn status_message(state: &Match, status: &InningsStatus) -> Option<String> {
    match status {
        InningsStatus::Continue => None,
        InningsStatus::InningsOneDone => Some(format!(
            "Innings 1 finished! {} {}/{}. Type 'next' to start the chase",
            state.batting_team().name,
            state.score(),
            state.wickets()
        )),
        finished => finished.result_text().map(|text| format!("Match over! {}!", text)),
    }
}

pub fn scorecard_text(state: &Match) -> String {
    let mut out = String::new();
    if let Some(first) = state.first_innings() {
        out.push_str(&format!(
            "Innings 1: {} {}/{} ({} overs)\n",
            first.team_name(),
            first.score(),
            first.wickets(),
            first.overs()
        ));
    }
    out.push_str(&format!("Batting: {}\n", state.batting_team().name));
    out.push_str(&format!("{:<16}{:>5}{:>5}{:>9}  Status\n", "Player", "R", "B", "SR"));
    for row in state.batting_rows() {
        out.push_str(&format!(
            "{:<16}{:>5}{:>5}{:>9.2}  {}\n",
            row.player, row.runs, row.balls, row.strike_rate, row.status
        ));
    }
    out.push_str(&format!("Bowling: {}\n", state.bowling_team().name));
    out.push_str(&format!("{:<16}{:>6}{:>4}{:>5}{:>8}\n", "Bowler", "O", "W", "R", "Econ"));
    for row in state.bowling_rows() {
        out.push_str(&format!(
            "{:<16}{:>6}{:>4}{:>5}{:>8.2}\n",
            row.bowler, row.overs, row.wickets, row.runs, row.economy
        ));
    }
    out
}
