// The fixed problem catalog.
// The expression shapes, evaluation widths and decimal precisions are part
// of each demonstration and must not be "improved".

use crate::floats::{self, FloatWidth};
use crate::ints;
use std::fmt;

// Floats print with ten fixed decimal places, except the final group
// which uses six.
const LONG_PRECISION: usize = 10;
const SHORT_PRECISION: usize = 6;

/// What a problem prints: a fixed-point decimal with an explicit number of
/// places, or a 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Fixed { value: f64, places: usize },
    Int(i32),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Fixed { value, places } => write!(f, "{value:.places$}"),
            Value::Int(value) => write!(f, "{value}"),
        }
    }
}

/// One numbered demonstration. `Display` renders the full report line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    pub group: u32,
    pub part: Option<u32>,
    pub value: Value,
}

impl Problem {
    fn whole(group: u32, value: Value) -> Problem {
        Problem {
            group,
            part: None,
            value,
        }
    }

    fn part(group: u32, part: u32, value: Value) -> Problem {
        Problem {
            group,
            part: Some(part),
            value,
        }
    }

    /// The label between "Problem" and the colon: `"1"`, `"3.2"`, ...
    pub fn label(&self) -> String {
        match self.part {
            Some(part) => format!("{}.{}", self.group, part),
            None => self.group.to_string(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Problem {}: {}", self.label(), self.value)
    }
}

fn fixed(value: f64, places: usize) -> Value {
    Value::Fixed { value, places }
}

// Problem 1: 2.5 is a small dyadic rational, so f32 holds it exactly.
fn exact_fraction() -> Problem {
    Problem::whole(1, fixed(f64::from(2.5f32), LONG_PRECISION))
}

// Problem 2: a tenth has no finite binary expansion; the nearest f32 is
// off in the eighth decimal place.
fn inexact_fraction() -> Problem {
    let tenth = (-1.0 / 10.0) as f32;
    Problem::whole(2, fixed(f64::from(tenth), LONG_PRECISION))
}

// Problem 3: the quotient of 1 and 3 formed in integer arithmetic
// truncates to zero before the value ever becomes a float; formed in f64
// it keeps as many threes as the precision asks for.
fn thirds() -> Vec<Problem> {
    let truncated = (1 / 3) as f64;
    let quotient = 1.0 / 3.0;
    vec![
        Problem::part(3, 1, fixed(truncated, LONG_PRECISION)),
        Problem::part(3, 2, fixed(quotient, LONG_PRECISION)),
    ]
}

// Problem 4: seven integer digits plus a fraction need more significand
// than f32 has; past 2^23 adjacent f32 values are a whole unit apart, so
// narrowing rounds the fraction clean off.
fn narrowed_fraction() -> Vec<Problem> {
    let wide = 9999999.3399999999;
    let narrowed = floats::demote(wide, FloatWidth::Width32);
    vec![
        Problem::part(4, 1, fixed(wide, LONG_PRECISION)),
        Problem::part(4, 2, fixed(narrowed, LONG_PRECISION)),
    ]
}

// Problem 5: n*n in 32-bit signed arithmetic. 40000^2 still fits;
// from 50000 up the product wraps.
fn wrapped_squares() -> Vec<Problem> {
    [30000, 40000, 50000, 60000, 70000]
        .iter()
        .enumerate()
        .map(|(i, &n)| Problem::part(5, i as u32 + 1, Value::Int(ints::wrapping_square(n))))
        .collect()
}

// Problem 6: near 1e20 adjacent f32 values are about 8.8e12 apart.
// Adding 3.5e9 once, or a billion times one step at a time, moves the sum
// nowhere; only growing the addend past half the spacing registers.
fn absorbed_sums() -> Vec<Problem> {
    let base = 1e20f32;
    let one_addition = (1e20 + 3_500_000_000.0) as f32;
    let grown_addend = (1e20 + (3_500_000_000i64 * 1_000_000_000) as f64) as f32;
    let repeated = floats::accumulate(base, 3.5e9, 1_000_000_000);
    vec![
        Problem::part(6, 1, fixed(f64::from(base), SHORT_PRECISION)),
        Problem::part(6, 2, fixed(f64::from(one_addition), SHORT_PRECISION)),
        Problem::part(6, 3, fixed(f64::from(grown_addend), SHORT_PRECISION)),
        Problem::part(6, 4, fixed(f64::from(repeated), SHORT_PRECISION)),
    ]
}

/// The fifteen demonstrations, in report order.
pub fn catalog() -> Vec<Problem> {
    let mut problems = vec![exact_fraction(), inexact_fraction()];
    problems.extend(thirds());
    problems.extend(narrowed_fraction());
    problems.extend(wrapped_squares());
    problems.extend(absorbed_sums());
    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_LINES: [&str; 15] = [
        "Problem 1: 2.5000000000",
        "Problem 2: -0.1000000015",
        "Problem 3.1: 0.0000000000",
        "Problem 3.2: 0.3333333333",
        "Problem 4.1: 9999999.3399999999",
        "Problem 4.2: 9999999.0000000000",
        "Problem 5.1: 900000000",
        "Problem 5.2: 1600000000",
        "Problem 5.3: -1794967296",
        "Problem 5.4: -694967296",
        "Problem 5.5: 605032704",
        "Problem 6.1: 100000002004087734272.000000",
        "Problem 6.2: 100000002004087734272.000000",
        "Problem 6.3: 103500002601996386304.000000",
        "Problem 6.4: 100000002004087734272.000000",
    ];

    #[test]
    fn catalog_renders_the_published_lines_in_order() {
        let lines: Vec<String> = catalog().iter().map(|p| p.to_string()).collect();
        assert_eq!(lines, EXPECTED_LINES);
    }

    #[test]
    fn labels_join_group_and_part_with_a_dot() {
        assert_eq!(Problem::whole(1, Value::Int(0)).label(), "1");
        assert_eq!(Problem::part(6, 4, Value::Int(0)).label(), "6.4");
    }

    #[test]
    fn fixed_values_render_with_their_requested_places() {
        assert_eq!(fixed(2.5, 10).to_string(), "2.5000000000");
        assert_eq!(fixed(-0.5, 2).to_string(), "-0.50");
        assert_eq!(Value::Int(-1_794_967_296).to_string(), "-1794967296");
    }

    #[test]
    fn the_vanishing_addend_is_smaller_than_half_an_ulp() {
        // Why 6.2 and 6.4 cannot move: the addend is under the rounding
        // threshold at 1e20.
        let spacing = floats::ulp(1e20, FloatWidth::Width32);
        assert!(3.5e9 < spacing / 2.0);
        // ...and the grown addend of 6.3 is over it.
        assert!(3.5e18 > spacing / 2.0);
    }
}
