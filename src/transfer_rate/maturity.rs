//! Parsing for the maturity ranges accepted by the pool-by-maturity endpoint.

use crate::Error;

/// A maturity band, either closed (`min-max`) or open-ended (`min+`).
///
/// Bounds are inclusive on both ends, so adjacent ranges such as `0-1` and
/// `1-3` both contain a maturity of exactly 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaturityRange {
    /// The inclusive lower bound.
    pub min: f64,
    /// The inclusive upper bound, or `None` for an open-ended range.
    pub max: Option<f64>,
}

impl MaturityRange {
    /// Whether `maturity` falls within this range.
    pub fn contains(&self, maturity: f64) -> bool {
        match self.max {
            Some(max) => maturity >= self.min && maturity <= max,
            None => maturity >= self.min,
        }
    }

    /// The label reported for this range, e.g. "0-1" or "3+".
    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{}-{}", self.min, max),
            None => format!("{}+", self.min),
        }
    }

    fn parse(raw: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidMaturityRange(raw.to_owned());

        if let Some(stripped) = raw.strip_suffix('+') {
            let min = parse_bound(stripped).ok_or_else(invalid)?;
            return Ok(Self { min, max: None });
        }

        let (min, max) = raw.split_once('-').ok_or_else(invalid)?;
        let min = parse_bound(min).ok_or_else(invalid)?;
        let max = parse_bound(max).ok_or_else(invalid)?;

        Ok(Self {
            min,
            max: Some(max),
        })
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse().ok().filter(|bound: &f64| bound.is_finite())
}

/// Parse a comma-separated list of maturity ranges, e.g. "0-1,1-3,3+".
///
/// # Errors
/// This function will return a:
/// - [Error::MissingRanges] if `raw` is empty or blank,
/// - or [Error::InvalidMaturityRange] if any entry is not of the form
///   "min-max" or "min+" with numeric bounds.
pub fn parse_ranges(raw: &str) -> Result<Vec<MaturityRange>, Error> {
    if raw.trim().is_empty() {
        return Err(Error::MissingRanges);
    }

    raw.split(',').map(MaturityRange::parse).collect()
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{MaturityRange, parse_ranges};

    #[test]
    fn parses_closed_and_open_ranges() {
        let ranges = parse_ranges("0-1,1-3,3+").unwrap();

        assert_eq!(
            ranges,
            [
                MaturityRange {
                    min: 0.0,
                    max: Some(1.0)
                },
                MaturityRange {
                    min: 1.0,
                    max: Some(3.0)
                },
                MaturityRange { min: 3.0, max: None },
            ]
        );
    }

    #[test]
    fn parses_fractional_bounds() {
        let ranges = parse_ranges("0.5-1.5").unwrap();

        assert_eq!(
            ranges,
            [MaturityRange {
                min: 0.5,
                max: Some(1.5)
            }]
        );
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(parse_ranges(""), Err(Error::MissingRanges));
        assert_eq!(parse_ranges("   "), Err(Error::MissingRanges));
    }

    #[test]
    fn rejects_non_numeric_bounds() {
        for raw in ["abc-1", "1-abc", "abc+", "1", ",", "0-1,oops"] {
            let result = parse_ranges(raw);

            assert!(
                matches!(
                    result,
                    Err(Error::MissingRanges | Error::InvalidMaturityRange(_))
                ),
                "expected {raw:?} to be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(parse_ranges("nan-1").is_err());
        assert!(parse_ranges("inf+").is_err());
    }

    #[test]
    fn closed_ranges_are_inclusive_on_both_ends() {
        let range = MaturityRange {
            min: 0.0,
            max: Some(1.0),
        };

        assert!(range.contains(0.0));
        assert!(range.contains(1.0));
        assert!(!range.contains(1.01));
    }

    #[test]
    fn open_ranges_are_inclusive_on_the_lower_bound() {
        let range = MaturityRange { min: 3.0, max: None };

        assert!(range.contains(3.0));
        assert!(range.contains(1000.0));
        assert!(!range.contains(2.99));
    }

    #[test]
    fn labels_match_the_input_syntax() {
        let ranges = parse_ranges("0-1,3+,0.5-1.5").unwrap();

        let labels: Vec<String> = ranges.iter().map(MaturityRange::label).collect();
        assert_eq!(labels, ["0-1", "3+", "0.5-1.5"]);
    }
}
