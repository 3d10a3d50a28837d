pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::console::ScoringConsole;
pub use app::report::ReportExporter;
pub use config::{MatchConfig, MatchSetup};
pub use crate::core::{engine::MatchEngine, match_state::Match, session::SessionRegistry};
pub use domain::model::{BallOutcome, InningsStatus, Team};
pub use utils::error::{Result, ScorerError};
