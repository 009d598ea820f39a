use serde::Serialize;

/// One possible best-of-five result, seen from team1.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    /// Set score as shown to users, team1 first.
    pub score: &'static str,
    pub team1_won: bool,
    /// Set-score value (SSV) used by the normal-CDF model.
    pub set_score_value: f64,
}

impl ScoreOutcome {
    const fn new(score: &'static str, team1_won: bool, set_score_value: f64) -> Self {
        ScoreOutcome {
            score,
            team1_won,
            set_score_value,
        }
    }

    /// Actual result (1.0 win, 0.0 loss) used by the logistic model.
    pub fn actual(&self) -> f64 {
        if self.team1_won {
            1.0
        } else {
            0.0
        }
    }
}

/// Every outcome, best result for team1 first.
pub const OUTCOMES: [ScoreOutcome; 6] = [
    ScoreOutcome::new("3-0", true, 2.0),
    ScoreOutcome::new("3-1", true, 1.5),
    ScoreOutcome::new("3-2", true, 1.0),
    ScoreOutcome::new("2-3", false, -1.0),
    ScoreOutcome::new("1-3", false, -1.5),
    ScoreOutcome::new("0-3", false, -2.0),
];
