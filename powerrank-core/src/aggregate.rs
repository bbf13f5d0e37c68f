//! Team aggregate table: one `TeamRating` accumulator per distinct team.
//!
//! Teams are stored in first-encounter order (the record store's order) with
//! a number-to-index map alongside. First-encounter order doubles as the
//! tie-break order for ranked listings, so table iteration stays
//! deterministic without any extra bookkeeping.

use std::collections::HashMap;

use crate::types::{round_to_tenth, AllianceRecord, TeamRating};

pub struct TeamTable {
    teams: Vec<TeamRating>,
    index: HashMap<u32, usize>,
}

impl TeamTable {
    /// Scan the record store once, crediting each record's total score to its
    /// three teams.
    ///
    /// The first reference to a team number creates its entry and immediately
    /// counts a match, so every entry has `matches >= 1` by construction.
    pub fn build(records: &[AllianceRecord]) -> Self {
        let mut table = TeamTable {
            teams: Vec::new(),
            index: HashMap::new(),
        };

        for record in records {
            for &team in &record.teams {
                let idx = table.index_or_insert(team);
                let entry = &mut table.teams[idx];
                entry.total += record.total_score as i64;
                entry.matches += 1;
            }
        }

        table
    }

    fn index_or_insert(&mut self, team: u32) -> usize {
        let teams = &mut self.teams;
        *self.index.entry(team).or_insert_with(|| {
            teams.push(TeamRating::new(team));
            teams.len() - 1
        })
    }

    /// Plain averaging pass: `average = total / matches`, rounded to a tenth.
    /// Seeds the relaxation weights, so it must run before the rating engine.
    pub fn compute_averages(&mut self) {
        for entry in &mut self.teams {
            assert!(entry.matches > 0, "Team {} has no matches recorded", entry.team);
            entry.average = round_to_tenth(entry.total as f64 / entry.matches as f64);
        }
    }

    /// Index of a team's entry. Panics for a team the table has never seen.
    /// Records handed to the engine must come from the same store the table
    /// was built from.
    pub(crate) fn index_of(&self, team: u32) -> usize {
        *self
            .index
            .get(&team)
            .unwrap_or_else(|| panic!("Unknown team number: {}", team))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Teams in first-encounter order.
    pub fn teams(&self) -> &[TeamRating] {
        &self.teams
    }

    pub(crate) fn teams_mut(&mut self) -> &mut [TeamRating] {
        &mut self.teams
    }

    pub fn get(&self, team: u32) -> Option<&TeamRating> {
        self.index.get(&team).map(|&idx| &self.teams[idx])
    }
}
