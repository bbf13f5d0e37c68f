//! Ranked listings: sort teams descending by a chosen metric.

use crate::aggregate::TeamTable;
use crate::types::{round_to_tenth, RankedTeam, TeamRating};

/// Metric a ranked listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankMetric {
    /// Plain per-match average score.
    Average,
    /// Schedule-adjusted power rating.
    Power,
    /// Schedule-adjusted stacking rating.
    Stacking,
}

impl RankMetric {
    fn key(&self, entry: &TeamRating) -> f64 {
        match self {
            RankMetric::Average => entry.average,
            RankMetric::Power => entry.avg_power_score,
            RankMetric::Stacking => entry.avg_stack_score,
        }
    }
}

/// Build a ranked listing for one metric.
///
/// The sort compares the unrounded metric with a total float ordering and is
/// stable over first-encounter order, so tied teams keep the order they
/// first appeared in the record store. Row values are rounded to one decimal
/// place for display after sorting.
pub fn rank_by(table: &TeamTable, metric: RankMetric) -> Vec<RankedTeam> {
    let mut entries: Vec<&TeamRating> = table.teams().iter().collect();
    entries.sort_by(|a, b| metric.key(b).total_cmp(&metric.key(a)));
    entries.into_iter().map(display_row).collect()
}

fn display_row(entry: &TeamRating) -> RankedTeam {
    RankedTeam {
        team: entry.team,
        average: entry.average,
        power: round_to_tenth(entry.avg_power_score),
        auto: round_to_tenth(entry.avg_auto_score),
        coop: round_to_tenth(entry.avg_coop_score),
        stack: round_to_tenth(entry.avg_stack_score),
    }
}
