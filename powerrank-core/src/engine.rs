//! Iterative rating engine: fixed-point relaxation over the record store.
//!
//! Each pass reallocates every match's score components to its three teams
//! in proportion to each team's rating from the previous pass, then replaces
//! the ratings with the new per-match averages. A team's weight for the next
//! allocation is its own most recently derived rating, so the loop converges
//! toward a self-consistent, strength-of-schedule-adjusted score. The pass
//! count is a fixed budget; it stands in for a convergence criterion.

use crate::aggregate::TeamTable;
use crate::constants::{ALLIANCE_SIZE, DEFAULT_ITERATIONS};
use crate::types::AllianceRecord;

/// Configuration for the rating engine.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of relaxation passes. The engine always runs the full count.
    pub iterations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Per-team scratch accumulators for one relaxation pass.
///
/// Allocated fresh every pass and folded into the persistent ratio state at
/// the pass boundary, so no running sum can leak across passes.
#[derive(Clone, Copy, Default)]
struct Scratch {
    power: f64,
    auto: f64,
    coop: f64,
    stack: f64,
}

/// Run the full rating computation: seed the split weights from the plain
/// averages, then execute the configured number of passes.
///
/// The table must have been built from `records` with its averaging pass
/// already run. A record referencing a team missing from the table panics.
pub fn run_ratings(records: &[AllianceRecord], table: &mut TeamTable, config: &EngineConfig) {
    for entry in table.teams_mut() {
        entry.power_ratio = entry.average;
        entry.stack_ratio = entry.average;
    }

    // Resolve team numbers to table indices once, up front.
    let indexed: Vec<[usize; ALLIANCE_SIZE]> = records
        .iter()
        .map(|record| record.teams.map(|team| table.index_of(team)))
        .collect();

    for _ in 0..config.iterations {
        run_pass(records, &indexed, table);
    }
}

fn run_pass(records: &[AllianceRecord], indexed: &[[usize; ALLIANCE_SIZE]], table: &mut TeamTable) {
    let mut scratch = vec![Scratch::default(); table.len()];

    for (record, idx) in records.iter().zip(indexed) {
        let teams = table.teams();

        // Power: split the full match score by the current power weights.
        // A zero weight sum allocates nothing to anyone.
        let power_denom: f64 = idx.iter().map(|&i| teams[i].power_ratio).sum();
        if power_denom != 0.0 {
            for &i in idx {
                scratch[i].power += record.total_score as f64 * teams[i].power_ratio / power_denom;
            }
        }

        // Auto: full credit to the attributed team when it is on this
        // alliance, otherwise an equal truncating three-way split.
        if record.auto_score != 0 {
            let credited = record
                .auto_team
                .and_then(|team| record.teams.iter().position(|&t| t == team));
            match credited {
                Some(slot) => scratch[idx[slot]].auto += record.auto_score as f64,
                None => {
                    let share = (record.auto_score / ALLIANCE_SIZE as i32) as f64;
                    for &i in idx {
                        scratch[i].auto += share;
                    }
                }
            }
        }

        // Coop: always an equal truncating split.
        if record.coop_score != 0 {
            let share = (record.coop_score / ALLIANCE_SIZE as i32) as f64;
            for &i in idx {
                scratch[i].coop += share;
            }
        }

        // Stack: whatever the alliance scored outside auto and coop, split
        // by the current stack weights. May be negative; allocated as-is.
        let stack_raw = (record.total_score - record.auto_score - record.coop_score) as f64;
        let stack_denom: f64 = idx.iter().map(|&i| teams[i].stack_ratio).sum();
        if stack_denom != 0.0 {
            for &i in idx {
                scratch[i].stack += stack_raw * teams[i].stack_ratio / stack_denom;
            }
        }
    }

    // Pass boundary: fold the scratch sums into per-match averages and
    // promote the power/stack averages to the next pass's split weights.
    for (entry, acc) in table.teams_mut().iter_mut().zip(&scratch) {
        let matches = entry.matches as f64;
        entry.avg_power_score = acc.power / matches;
        entry.power_ratio = entry.avg_power_score;
        entry.avg_auto_score = acc.auto / matches;
        entry.avg_coop_score = acc.coop / matches;
        entry.avg_stack_score = acc.stack / matches;
        entry.stack_ratio = entry.avg_stack_score;
    }
}
