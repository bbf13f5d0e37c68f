//! powerrank-core: Pure-computation alliance rating engine.
//!
//! Match records → per-team averages → schedule-adjusted power and stacking
//! ratings → ranked listings. No IO, no filesystem, just math. Bring your
//! own match data.
//!
//! # Quick start
//!
//! ```rust
//! use powerrank_core::{
//!     rank_by, run_ratings, AllianceColor, AllianceRecord, EngineConfig, RankMetric, TeamTable,
//! };
//!
//! let records = vec![AllianceRecord {
//!     match_id: "Qualification 1".to_string(),
//!     color: AllianceColor::Red,
//!     teams: [254, 1114, 2056],
//!     auto_score: 10,
//!     auto_team: Some(254),
//!     coop_score: 9,
//!     total_score: 100,
//! }];
//!
//! let mut table = TeamTable::build(&records);
//! table.compute_averages();
//! run_ratings(&records, &mut table, &EngineConfig::default());
//!
//! for row in rank_by(&table, RankMetric::Power) {
//!     println!("Team {}: {:.1}", row.team, row.power);
//! }
//! ```

pub mod aggregate;
pub mod constants;
pub mod engine;
pub mod rank;
pub mod types;

// Re-export primary public API at crate root.
pub use aggregate::TeamTable;
pub use engine::{run_ratings, EngineConfig};
pub use rank::{rank_by, RankMetric};
pub use types::{round_to_tenth, AllianceColor, AllianceRecord, RankedTeam, TeamRating};
