use crate::constants::ALLIANCE_SIZE;

/// Which side of the field an alliance record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllianceColor {
    Red,
    Blue,
}

/// One alliance's scoring line for one match.
///
/// Every match produces two of these, red and blue. Records are built by the
/// ingestion collaborator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllianceRecord {
    /// Match identifier as it appears in the export, e.g. "Qualification 12".
    pub match_id: String,
    pub color: AllianceColor,
    /// The three team numbers on this alliance.
    pub teams: [u32; ALLIANCE_SIZE],
    /// Autonomous-phase points scored by the alliance.
    pub auto_score: i32,
    /// Team credited with the autonomous points, when the scouting data
    /// attributes them to a single robot. `None` means unattributed.
    pub auto_team: Option<u32>,
    /// Cooperation bonus points, earned by the alliance as a whole.
    pub coop_score: i32,
    /// Final alliance score for the match.
    pub total_score: i32,
}

/// Rating state for one team, accumulated over every match it played.
///
/// `power_ratio` and `stack_ratio` are the proportional-split weights that
/// carry from one relaxation pass to the next; the `avg_*` fields hold the
/// most recent pass's derived per-match averages.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamRating {
    pub team: u32,
    /// Sum of alliance totals over every match played.
    pub total: i64,
    pub matches: u32,
    /// Plain per-match average, rounded to one decimal place.
    pub average: f64,
    pub power_ratio: f64,
    pub stack_ratio: f64,
    pub avg_power_score: f64,
    pub avg_auto_score: f64,
    pub avg_coop_score: f64,
    pub avg_stack_score: f64,
}

impl TeamRating {
    pub(crate) fn new(team: u32) -> Self {
        TeamRating {
            team,
            total: 0,
            matches: 0,
            average: 0.0,
            power_ratio: 0.0,
            stack_ratio: 0.0,
            avg_power_score: 0.0,
            avg_auto_score: 0.0,
            avg_coop_score: 0.0,
            avg_stack_score: 0.0,
        }
    }
}

/// One row of a ranked listing, with every score rounded for display.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedTeam {
    pub team: u32,
    pub average: f64,
    pub power: f64,
    pub auto: f64,
    pub coop: f64,
    pub stack: f64,
}

/// Round to one decimal place, the precision used for every displayed score.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
