//! Output formatting: terminal tables and JSON.

use powerrank_core::RankedTeam;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    teams: usize,
    records: usize,
    iterations: usize,
    average_rankings: &'a [RankedTeam],
    power_rankings: &'a [RankedTeam],
    stacking_rankings: &'a [RankedTeam],
}

/// Print the three ranked listings as aligned terminal tables, in the
/// traditional order: average, power, stacking.
pub fn print_tables(
    average: &[RankedTeam],
    power: &[RankedTeam],
    stacking: &[RankedTeam],
    record_count: usize,
) {
    print_table("Average Rankings", average);
    println!();
    print_table("Power Rankings", power);
    println!();
    print_table("Stacking Rankings", stacking);

    println!(
        "\n{} teams ranked from {} alliance records",
        average.len(),
        record_count,
    );
}

/// Print one ranked listing. Every row shows all five scores; only the sort
/// order differs between listings.
fn print_table(title: &str, rows: &[RankedTeam]) {
    println!("{title}");
    println!("  # |  Team | Average |  Power |   Auto |   Coop |  Stack");
    println!("----|-------|---------|--------|--------|--------|-------");

    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:>5} | {:>7.1} | {:>6.1} | {:>6.1} | {:>6.1} | {:>6.1}",
            i + 1,
            row.team,
            row.average,
            row.power,
            row.auto,
            row.coop,
            row.stack,
        );
    }
}

/// Print all three listings as one pretty JSON document.
pub fn print_json(
    average: &[RankedTeam],
    power: &[RankedTeam],
    stacking: &[RankedTeam],
    record_count: usize,
    iterations: usize,
) {
    let output = JsonOutput {
        teams: average.len(),
        records: record_count,
        iterations,
        average_rankings: average,
        power_rankings: power,
        stacking_rankings: stacking,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
