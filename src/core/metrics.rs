//! Derived statistics. All functions are pure; a zero denominator yields 0.

pub const BALLS_PER_OVER: u32 = 6;

/// Formats a legal-ball count as cricket overs, e.g. 9 balls -> "1.3".
pub fn format_overs(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

/// Two decimals, exact halves to even (1.125 -> 1.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn overs_as_decimal(balls: u32) -> f64 {
    f64::from(balls) / f64::from(BALLS_PER_OVER)
}

/// Runs conceded per over.
pub fn economy(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    round2(f64::from(runs) / overs_as_decimal(balls))
}

/// Runs per hundred balls faced.
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    round2(f64::from(runs) / f64::from(balls) * 100.0)
}

pub fn current_run_rate(score: u32, balls: u32) -> f64 {
    if balls == 0 {
        return 0.0;
    }
    round2(f64::from(score) / overs_as_decimal(balls))
}

/// Run rate the chasing side needs over the remaining balls; never negative.
pub fn required_run_rate(target: u32, score: u32, balls_remaining: u32) -> f64 {
    if balls_remaining == 0 {
        return 0.0;
    }
    let needed = f64::from(runs_needed(target, score));
    round2(needed / overs_as_decimal(balls_remaining))
}

pub fn runs_needed(target: u32, score: u32) -> u32 {
    target.saturating_sub(score)
}
