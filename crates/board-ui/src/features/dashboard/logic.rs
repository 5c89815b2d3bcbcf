//! Dataset transforms feeding the chart components.

use board_api_models::dashboard::{
    ConsumptionImpact, SnackBrandShare, TeamStats, WeeklyMoodTrend, WeeklyWorkoutTrend,
};

/// One plotted series: stable key, legend label and colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesSpec {
    /// Key used for legend toggling.
    pub key: &'static str,
    /// Legend label.
    pub label: &'static str,
    /// Fill or stroke colour.
    pub color: &'static str,
}

/// Mood series in stacking order.
pub const MOOD_SERIES: [SeriesSpec; 3] = [
    SeriesSpec {
        key: "happy",
        label: "Happy",
        color: "#4ade80",
    },
    SeriesSpec {
        key: "tired",
        label: "Tired",
        color: "#fb923c",
    },
    SeriesSpec {
        key: "stressed",
        label: "Stressed",
        color: "#f87171",
    },
];

/// Workout series in stacking order.
pub const WORKOUT_SERIES: [SeriesSpec; 3] = [
    SeriesSpec {
        key: "running",
        label: "Running",
        color: "#3b82f6",
    },
    SeriesSpec {
        key: "cycling",
        label: "Cycling",
        color: "#22c55e",
    },
    SeriesSpec {
        key: "stretching",
        label: "Stretching",
        color: "#a855f7",
    },
];

/// Teams plotted on the coffee chart.
pub const TEAM_SERIES: [SeriesSpec; 3] = [
    SeriesSpec {
        key: "Frontend",
        label: "Frontend",
        color: "#3b82f6",
    },
    SeriesSpec {
        key: "Backend",
        label: "Backend",
        color: "#ef4444",
    },
    SeriesSpec {
        key: "AI",
        label: "AI",
        color: "#eab308",
    },
];

/// Bar colour for the snack brand chart.
pub const SNACK_BAR_COLOR: &str = "#ec4899";

/// A named value for bar and donut charts.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedValue {
    /// Category label.
    pub name: String,
    /// Value.
    pub value: f64,
    /// Explicit colour, when the series has one.
    pub color: Option<&'static str>,
}

/// Week labels plus one row of series values per week.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackedRows {
    /// X axis labels.
    pub labels: Vec<String>,
    /// Values per label in series order.
    pub rows: Vec<Vec<f64>>,
}

/// Mood survey as stacked rows.
#[must_use]
pub fn mood_rows(trend: &[WeeklyMoodTrend]) -> StackedRows {
    StackedRows {
        labels: trend.iter().map(|week| week.week.clone()).collect(),
        rows: trend
            .iter()
            .map(|week| vec![week.happy, week.tired, week.stressed])
            .collect(),
    }
}

/// Average share per mood, rounded to whole percent.
#[must_use]
pub fn mood_average(trend: &[WeeklyMoodTrend]) -> Vec<NamedValue> {
    let rows = mood_rows(trend).rows;
    MOOD_SERIES
        .iter()
        .enumerate()
        .map(|(index, series)| {
            let total: f64 = rows.iter().map(|row| row[index]).sum();
            let value = if rows.is_empty() {
                0.0
            } else {
                (total / f64::from(u32::try_from(rows.len()).unwrap_or(u32::MAX))).round()
            };
            NamedValue {
                name: series.label.to_string(),
                value,
                color: Some(series.color),
            }
        })
        .collect()
}

/// Snack brands as named values.
#[must_use]
pub fn snack_values(brands: &[SnackBrandShare]) -> Vec<NamedValue> {
    brands
        .iter()
        .map(|brand| NamedValue {
            name: brand.name.clone(),
            value: brand.share,
            color: None,
        })
        .collect()
}

/// Workout minutes as stacked rows.
#[must_use]
pub fn workout_rows(trend: &[WeeklyWorkoutTrend]) -> StackedRows {
    StackedRows {
        labels: trend.iter().map(|week| week.week.clone()).collect(),
        rows: trend
            .iter()
            .map(|week| vec![week.running, week.cycling, week.stretching])
            .collect(),
    }
}

/// Metric plotted on one axis of the coffee chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamMetric {
    /// Bugs filed (left axis).
    Bugs,
    /// Productivity score (right axis).
    Productivity,
}

impl TeamMetric {
    /// Axis label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bugs => "Bugs",
            Self::Productivity => "Productivity",
        }
    }

    const fn read(self, stats: &TeamStats) -> Option<f64> {
        match self {
            Self::Bugs => stats.bugs,
            Self::Productivity => stats.productivity,
        }
    }
}

/// Samples sorted by amount, with x labels.
#[must_use]
pub fn consumption_amounts(impacts: &[ConsumptionImpact]) -> Vec<String> {
    sorted(impacts)
        .iter()
        .map(|impact| format!("{}", impact.amount))
        .collect()
}

/// One line per team for `metric`, in [`TEAM_SERIES`] order, sorted by amount.
#[must_use]
pub fn consumption_lines(impacts: &[ConsumptionImpact], metric: TeamMetric) -> Vec<Vec<Option<f64>>> {
    let impacts = sorted(impacts);
    let teams: [fn(&ConsumptionImpact) -> &TeamStats; 3] =
        [|impact| &impact.frontend, |impact| &impact.backend, |impact| &impact.ai];
    teams
        .iter()
        .map(|team| impacts.iter().map(|impact| metric.read(team(impact))).collect())
        .collect()
}

/// Largest value across lines, ignoring gaps.
#[must_use]
pub fn lines_max(lines: &[Vec<Option<f64>>]) -> f64 {
    lines
        .iter()
        .flatten()
        .flatten()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max)
}

fn sorted(impacts: &[ConsumptionImpact]) -> Vec<&ConsumptionImpact> {
    let mut impacts: Vec<_> = impacts.iter().collect();
    impacts.sort_by(|a, b| a.amount.total_cmp(&b.amount));
    impacts
}
