//! Ingestion of comma-delimited match-stats exports.
//!
//! The export carries four header lines, then one line per match with the
//! red and blue alliance columns side by side; every data line yields two
//! `AllianceRecord`s. Ingestion stops cleanly at the first unplayed match
//! (both alliance totals zero, the export lists the full schedule ahead of
//! time) or at a blank line. Anything else malformed is a hard error, so
//! the rating engine never sees an invalid record.

use powerrank_core::{AllianceColor, AllianceRecord};
use thiserror::Error;

/// Header lines before the first data line in a match-stats export.
pub const HEADER_LINES: usize = 4;

/// Minimum fields per data line (through the blue alliance total).
pub const MIN_FIELDS: usize = 17;

/// Errors for lines the parser refuses. `line` is the 1-based line number
/// in the input file, headers included.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("line {line}: expected at least 17 fields, got {found}")]
    ShortLine { line: usize, found: usize },

    #[error("line {line}, field {field}: invalid number {value:?}")]
    BadNumber {
        line: usize,
        field: usize,
        value: String,
    },

    #[error("line {line}, field {field}: negative team number {value}")]
    NegativeTeam {
        line: usize,
        field: usize,
        value: i32,
    },
}

/// Read alliance records from a match-stats export.
///
/// Returns the record store in file order, red before blue within each match.
pub fn ingest(text: &str) -> Result<Vec<AllianceRecord>, IngestError> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate().skip(HEADER_LINES) {
        // A blank line ends the data section; exports often carry trailing
        // empty rows.
        if line.trim().is_empty() {
            break;
        }

        let (red, blue) = parse_line(index + 1, line)?;

        // Both totals zero means the match has not been played yet.
        if red.total_score == 0 && blue.total_score == 0 {
            break;
        }

        records.push(red);
        records.push(blue);
    }

    Ok(records)
}

/// Parse one data line into its red and blue alliance records.
fn parse_line(line_no: usize, line: &str) -> Result<(AllianceRecord, AllianceRecord), IngestError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(IngestError::ShortLine {
            line: line_no,
            found: fields.len(),
        });
    }

    let number = |field: usize| parse_number(fields[field], line_no, field);
    let team = |field: usize| -> Result<u32, IngestError> {
        let value = number(field)?;
        u32::try_from(value).map_err(|_| IngestError::NegativeTeam {
            line: line_no,
            field,
            value,
        })
    };
    let auto_team = |field: usize| -> Result<Option<u32>, IngestError> {
        Ok(match team(field)? {
            0 => None,
            t => Some(t),
        })
    };

    let match_id = fields[0].trim().to_string();

    let red = AllianceRecord {
        match_id: match_id.clone(),
        color: AllianceColor::Red,
        teams: [team(2)?, team(3)?, team(4)?],
        auto_score: number(5)?,
        auto_team: auto_team(6)?,
        coop_score: number(7)?,
        total_score: number(8)?,
    };
    let blue = AllianceRecord {
        match_id,
        color: AllianceColor::Blue,
        teams: [team(10)?, team(11)?, team(12)?],
        auto_score: number(13)?,
        auto_team: auto_team(14)?,
        coop_score: number(15)?,
        total_score: number(16)?,
    };

    Ok((red, blue))
}

/// Numeric field: blank counts as 0, anything else parses as a decimal and
/// rounds to the nearest integer.
fn parse_number(raw: &str, line: usize, field: usize) -> Result<i32, IngestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let value: f64 = trimmed.parse().map_err(|_| IngestError::BadNumber {
        line,
        field,
        value: trimmed.to_string(),
    })?;
    Ok(value.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: &str = "\
St. Louis Regional\n\
Match Stats\n\
,,Red,,,,,,,Blue,,,,,,,\n\
Match,Time,Team 1,Team 2,Team 3,Auto,Auto Team,Coop,Total,Time,Team 1,Team 2,Team 3,Auto,Auto Team,Coop,Total\n";

    fn export(data_lines: &[&str]) -> String {
        let mut text = HEADERS.to_string();
        for line in data_lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_parses_red_and_blue_records() {
        let text = export(&[
            "Qualification 1,9:00,254,1114,2056,10,254,9,100,9:12,118,148,217,6,,0,75",
        ]);

        let records = ingest(&text).unwrap();
        assert_eq!(records.len(), 2);

        let red = &records[0];
        assert_eq!(red.match_id, "Qualification 1");
        assert_eq!(red.color, AllianceColor::Red);
        assert_eq!(red.teams, [254, 1114, 2056]);
        assert_eq!(red.auto_score, 10);
        assert_eq!(red.auto_team, Some(254));
        assert_eq!(red.coop_score, 9);
        assert_eq!(red.total_score, 100);

        let blue = &records[1];
        assert_eq!(blue.match_id, "Qualification 1");
        assert_eq!(blue.color, AllianceColor::Blue);
        assert_eq!(blue.teams, [118, 148, 217]);
        assert_eq!(blue.auto_score, 6);
        assert_eq!(blue.auto_team, None);
        assert_eq!(blue.coop_score, 0);
        assert_eq!(blue.total_score, 75);
    }

    #[test]
    fn test_skips_four_header_lines() {
        // Headers alone produce no records, however table-like they look.
        assert!(ingest(HEADERS).unwrap().is_empty());

        let text = export(&[
            "Qualification 1,,1,2,3,0,,0,10,,4,5,6,0,,0,20",
            "Qualification 2,,1,2,3,0,,0,30,,4,5,6,0,,0,40",
        ]);
        assert_eq!(ingest(&text).unwrap().len(), 4);
    }

    #[test]
    fn test_blank_numeric_fields_are_zero() {
        let text = export(&["Qualification 1,,1,2,3,,,,50,,4,5,6,,,,60"]);

        let records = ingest(&text).unwrap();
        assert_eq!(records[0].auto_score, 0);
        assert_eq!(records[0].auto_team, None);
        assert_eq!(records[0].coop_score, 0);
        assert_eq!(records[0].total_score, 50);
    }

    #[test]
    fn test_decimal_fields_round_to_nearest() {
        let text = export(&["Qualification 1,,1,2,3,2.4,,0,99.6,,4,5,6,0,,0,75.5"]);

        let records = ingest(&text).unwrap();
        assert_eq!(records[0].auto_score, 2);
        assert_eq!(records[0].total_score, 100);
        assert_eq!(records[1].total_score, 76);
    }

    #[test]
    fn test_stops_at_first_unplayed_match() {
        let text = export(&[
            "Qualification 1,,1,2,3,0,,0,55,,4,5,6,0,,0,48",
            "Qualification 2,,1,4,5,,,,0,,2,3,6,,,,0",
            "Qualification 3,,1,2,3,0,,0,60,,4,5,6,0,,0,50",
        ]);

        let records = ingest(&text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].match_id, "Qualification 1");
    }

    #[test]
    fn test_stops_at_blank_line() {
        let text = export(&[
            "Qualification 1,,1,2,3,0,,0,55,,4,5,6,0,,0,48",
            "   ",
            "Qualification 2,,1,2,3,0,,0,60,,4,5,6,0,,0,50",
        ]);

        assert_eq!(ingest(&text).unwrap().len(), 2);
    }

    #[test]
    fn test_short_line_is_an_error() {
        let text = export(&[
            "Qualification 1,,1,2,3,0,,0,55,,4,5,6,0,,0,48",
            "Qualification 2,truncated",
        ]);

        let err = ingest(&text).unwrap_err();
        // Line 6 of the file: four headers, then the second data line.
        assert!(matches!(err, IngestError::ShortLine { line: 6, found: 2 }));
    }

    #[test]
    fn test_bad_number_is_an_error() {
        let text = export(&["Qualification 1,,1,2,3,0,,0,n/a,,4,5,6,0,,0,48"]);

        let err = ingest(&text).unwrap_err();
        match err {
            IngestError::BadNumber { line, field, value } => {
                assert_eq!(line, 5);
                assert_eq!(field, 8);
                assert_eq!(value, "n/a");
            }
            other => panic!("expected BadNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_team_is_an_error() {
        let text = export(&["Qualification 1,,1,-2,3,0,,0,55,,4,5,6,0,,0,48"]);

        let err = ingest(&text).unwrap_err();
        assert!(matches!(
            err,
            IngestError::NegativeTeam { line: 5, field: 3, value: -2 }
        ));
    }

    #[test]
    fn test_error_messages_carry_location() {
        let err = ingest(&export(&["too,short"])).unwrap_err();
        assert_eq!(err.to_string(), "line 5: expected at least 17 fields, got 2");
    }
}
