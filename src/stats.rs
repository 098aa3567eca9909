use crate::error::{LottoError, Result};
use crate::normalize::Drawing;

/// Minimum, maximum and arithmetic mean of a per-drawing quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub min: i64,
    pub max: i64,
    pub mean: f64,
}

impl Spread {
    /// Returns `None` for an empty input.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        // i128 holds any sum of u32::MAX i64 values.
        let (mut min, mut max, mut sum, mut count) = (first, first, i128::from(first), 1u32);
        for v in iter {
            min = min.min(v);
            max = max.max(v);
            sum += i128::from(v);
            count += 1;
        }
        Some(Self {
            min,
            max,
            mean: sum as f64 / f64::from(count),
        })
    }
}

/// Descriptive strings for a set of drawings.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub date_range: String,
    pub white_ball_range: String,
    pub all_ball_odd_even: String,
    pub all_ball_sum: String,
}

impl Statistics {
    pub fn compute(drawings: &[Drawing]) -> Result<Self> {
        let range = white_ball_range(drawings)?;
        let sum = ball_sum(drawings)?;
        Ok(Self {
            date_range: date_range(drawings)?,
            white_ball_range: format!(
                "Range min: {}, max: {}, mean: {}",
                range.min, range.max, range.mean
            ),
            all_ball_odd_even: odd_even_balance(drawings)?,
            all_ball_sum: format!("Sum min: {}, max: {}, mean: {}", sum.min, sum.max, sum.mean),
        })
    }
}

/// Parses a ball token as a base-10 integer.
pub fn parse_ball(token: &str) -> Result<i64> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| LottoError::input(format!("ball value '{}' is not a number", token)))
}

pub fn is_odd(token: &str) -> Result<bool> {
    Ok(parse_ball(token)? % 2 == 1)
}

pub fn date_range(drawings: &[Drawing]) -> Result<String> {
    let start = drawings.iter().map(|d| d.date).min();
    let end = drawings.iter().map(|d| d.date).max();
    match (start, end) {
        (Some(start), Some(end)) => Ok(format!("{} to {}", start, end)),
        _ => Err(no_drawings()),
    }
}

/// Mean odd and even balls per drawing, counting whites and the hued ball.
pub fn odd_even_balance(drawings: &[Drawing]) -> Result<String> {
    if drawings.is_empty() {
        return Err(no_drawings());
    }
    let (mut odds, mut evens) = (0u64, 0u64);
    for drawing in drawings {
        for ball in drawing.all_balls() {
            if is_odd(ball)? {
                odds += 1;
            } else {
                evens += 1;
            }
        }
    }
    let n = drawings.len() as f64;
    Ok(format!(
        "Mean {} odd balls : {} even balls",
        odds as f64 / n,
        evens as f64 / n
    ))
}

/// Spread of `max(white) - min(white)` across drawings.
pub fn white_ball_range(drawings: &[Drawing]) -> Result<Spread> {
    let ranges = drawings
        .iter()
        .map(|d| {
            let whites = d
                .white_balls
                .iter()
                .map(|b| parse_ball(b))
                .collect::<Result<Vec<_>>>()?;
            let min = whites.iter().min().copied().unwrap_or_default();
            let max = whites.iter().max().copied().unwrap_or_default();
            max.checked_sub(min).ok_or_else(overflow)
        })
        .collect::<Result<Vec<i64>>>()?;
    Spread::from_values(ranges).ok_or_else(no_drawings)
}

/// Spread of the sum of all six balls across drawings.
pub fn ball_sum(drawings: &[Drawing]) -> Result<Spread> {
    let sums = drawings
        .iter()
        .map(|d| {
            d.all_balls().try_fold(0i64, |acc, ball| {
                acc.checked_add(parse_ball(ball)?).ok_or_else(overflow)
            })
        })
        .collect::<Result<Vec<i64>>>()?;
    Spread::from_values(sums).ok_or_else(no_drawings)
}

fn overflow() -> LottoError {
    LottoError::input("ball values overflow")
}

fn no_drawings() -> LottoError {
    LottoError::input("no drawings in the selected date range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn drawing(date: &str, whites: [&str; 5], hued: &str) -> Drawing {
        Drawing {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            white_balls: whites.map(String::from),
            hued_ball: hued.to_string(),
        }
    }

    fn sample() -> Vec<Drawing> {
        vec![
            // range 40, sum 1+2+3+4+41+6 = 57, odd 1,3,41 / even 2,4,6
            drawing("2024-01-08", ["01", "02", "03", "04", "41"], "06"),
            // range 20, sum 10+20+30+25+15+7 = 107, odd 25,15,7 / even 10,20,30
            drawing("2024-01-01", ["10", "20", "30", "25", "15"], "07"),
            // range 4, sum 5+6+7+8+9+9 = 44, odd 5,7,9,9 / even 6,8
            drawing("2024-01-04", ["05", "06", "07", "08", "09"], "09"),
        ]
    }

    #[test]
    fn test_date_range_uses_min_and_max() {
        assert_eq!(date_range(&sample()).unwrap(), "2024-01-01 to 2024-01-08");
    }

    #[test]
    fn test_white_ball_range_spread() {
        let spread = white_ball_range(&sample()).unwrap();
        assert_eq!(spread.min, 4);
        assert_eq!(spread.max, 40);
        assert!((spread.mean - 64.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ball_sum_spread() {
        let spread = ball_sum(&sample()).unwrap();
        assert_eq!(spread.min, 44);
        assert_eq!(spread.max, 107);
        assert!((spread.mean - 208.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_odd_even_balance() {
        // 10 odd and 8 even over 3 drawings
        let expected = format!("Mean {} odd balls : {} even balls", 10.0 / 3.0, 8.0 / 3.0);
        assert_eq!(odd_even_balance(&sample()).unwrap(), expected);

        let two = &sample()[..2];
        assert_eq!(odd_even_balance(two).unwrap(), "Mean 3 odd balls : 3 even balls");
    }

    #[test]
    fn test_statistics_strings() {
        let drawings = vec![
            drawing("2024-01-01", ["01", "02", "03", "04", "05"], "06"),
            drawing("2024-01-08", ["01", "02", "03", "04", "09"], "07"),
        ];
        let stats = Statistics::compute(&drawings).unwrap();
        assert_eq!(stats.date_range, "2024-01-01 to 2024-01-08");
        assert_eq!(stats.white_ball_range, "Range min: 4, max: 8, mean: 6");
        assert_eq!(stats.all_ball_sum, "Sum min: 21, max: 26, mean: 23.5");
        assert_eq!(stats.all_ball_odd_even, "Mean 3.5 odd balls : 2.5 even balls");
    }

    #[test]
    fn test_empty_drawings_are_input_errors() {
        assert!(matches!(date_range(&[]), Err(LottoError::Input { .. })));
        assert!(matches!(odd_even_balance(&[]), Err(LottoError::Input { .. })));
        assert!(matches!(white_ball_range(&[]), Err(LottoError::Input { .. })));
        assert!(matches!(ball_sum(&[]), Err(LottoError::Input { .. })));
        assert!(Statistics::compute(&[]).is_err());
    }

    #[test]
    fn test_non_numeric_ball_is_input_error() {
        let drawings = vec![drawing("2024-01-01", ["01", "xx", "03", "04", "05"], "06")];
        let err = ball_sum(&drawings).unwrap_err();
        assert!(err.to_string().contains("'xx'"));
        assert!(white_ball_range(&drawings).is_err());
        assert!(odd_even_balance(&drawings).is_err());
    }

    #[test]
    fn test_huge_ball_values_are_input_errors() {
        let drawings = vec![drawing(
            "2024-01-01",
            ["9223372036854775807", "1", "1", "1", "1"],
            "1",
        )];
        let err = ball_sum(&drawings).unwrap_err();
        assert!(matches!(err, LottoError::Input { .. }));
        assert!(err.to_string().contains("overflow"));

        let drawings = vec![drawing(
            "2024-01-01",
            ["-9223372036854775808", "9223372036854775807", "1", "1", "1"],
            "1",
        )];
        assert!(matches!(
            white_ball_range(&drawings),
            Err(LottoError::Input { .. })
        ));
        assert!(Statistics::compute(&drawings).is_err());
    }

    #[test]
    fn test_spread_mean_does_not_overflow() {
        let spread = Spread::from_values([i64::MAX, i64::MAX]).unwrap();
        assert_eq!(spread.max, i64::MAX);
        assert_eq!(spread.mean, i64::MAX as f64);
    }

    #[test]
    fn test_spread_from_values() {
        assert_eq!(Spread::from_values(Vec::new()), None);
        let spread = Spread::from_values([3, 9, 6]).unwrap();
        assert_eq!((spread.min, spread.max), (3, 9));
        assert_eq!(spread.mean, 6.0);
    }
}
