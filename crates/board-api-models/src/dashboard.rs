//! Aggregate datasets backing the dashboard charts.

use serde::{Deserialize, Serialize};

/// One week of the mood survey, in percent of respondents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyMoodTrend {
    /// ISO week start date, e.g. `2024-12-02`.
    pub week: String,
    /// Share answering "happy".
    pub happy: f64,
    /// Share answering "tired".
    pub tired: f64,
    /// Share answering "stressed".
    pub stressed: f64,
}

/// Market share for a single snack brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnackBrandShare {
    /// Brand name.
    pub name: String,
    /// Share in percent.
    pub share: f64,
}

/// One week of workout minutes per activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyWorkoutTrend {
    /// ISO week start date.
    pub week: String,
    /// Running minutes.
    pub running: f64,
    /// Cycling minutes.
    pub cycling: f64,
    /// Stretching minutes.
    pub stretching: f64,
}

/// Per-team metrics at a given consumption level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    /// Bugs filed.
    #[serde(default)]
    pub bugs: Option<f64>,
    /// Meetings missed.
    #[serde(default)]
    pub meeting_missed: Option<f64>,
    /// Productivity score.
    #[serde(default)]
    pub productivity: Option<f64>,
    /// Morale score.
    #[serde(default)]
    pub morale: Option<f64>,
}

/// Team metrics sampled at one consumption amount (x axis).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumptionImpact {
    /// Consumption amount (cups per day).
    pub amount: f64,
    /// Frontend team metrics.
    #[serde(rename = "Frontend")]
    pub frontend: TeamStats,
    /// Backend team metrics.
    #[serde(rename = "Backend")]
    pub backend: TeamStats,
    /// AI team metrics.
    #[serde(rename = "AI")]
    pub ai: TeamStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn consumption_impact_reads_team_keys() {
        let impact: ConsumptionImpact = serde_json::from_value(json!({
            "amount": 3,
            "Frontend": { "bugs": 2, "productivity": 80 },
            "Backend": { "meetingMissed": 1, "morale": 60 },
            "AI": {}
        }))
        .unwrap();
        assert_eq!(impact.frontend.bugs, Some(2.0));
        assert_eq!(impact.backend.meeting_missed, Some(1.0));
        assert_eq!(impact.ai, TeamStats::default());
    }
}
