pub mod engine;
pub mod match_state;
pub mod metrics;
pub mod scorecard;
pub mod session;

pub use crate::domain::model::{BallOutcome, BattingRecord, BowlingRecord, InningsStatus, Team};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
