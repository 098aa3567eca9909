use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{LottoError, Result};
use crate::game::{Game, HuedSource};

/// One drawing exactly as the remote API returned it.
pub type RawRecord = Map<String, Value>;

pub const WHITE_BALL_COUNT: usize = 5;

/// Start date used when none is supplied; earlier than any recorded drawing.
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1969, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A normalized drawing. Ball values stay as the API wrote them, so "01" and "1" are distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    pub date: NaiveDate,
    pub white_balls: [String; WHITE_BALL_COUNT],
    pub hued_ball: String,
}

impl Drawing {
    /// Every ball of the drawing, whites first.
    pub fn all_balls(&self) -> impl Iterator<Item = &str> {
        self.white_balls
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.hued_ball.as_str()))
    }
}

/// Parses an API or CLI date. Returns `None` for anything unrecognized.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Keeps records dated on or after `start` and converts them to drawings.
///
/// Records whose date is missing or unparseable never compare as on or after
/// `start`, so they are dropped rather than rejected.
pub fn normalize(game: Game, records: &[RawRecord], start: Option<NaiveDate>) -> Result<Vec<Drawing>> {
    let start = start.unwrap_or_else(default_start_date);
    let mut undated = 0usize;
    let mut drawings = Vec::with_capacity(records.len());

    for record in records {
        let date = match text_field(record, game.date_field()).and_then(parse_date) {
            Some(date) => date,
            None => {
                undated += 1;
                continue;
            }
        };
        if date < start {
            continue;
        }
        drawings.push(to_drawing(game, record, date)?);
    }

    if undated > 0 {
        warn!(
            action = "filter",
            component = "normalizer",
            game = game.slug(),
            dropped = undated,
            "Records with unparseable dates were excluded"
        );
    }
    info!(
        action = "complete",
        component = "normalizer",
        game = game.slug(),
        start_date = %start,
        record_count = records.len(),
        drawing_count = drawings.len(),
        "Normalized drawings"
    );
    Ok(drawings)
}

fn to_drawing(game: Game, record: &RawRecord, date: NaiveDate) -> Result<Drawing> {
    let numbers = text_field(record, game.numbers_field()).ok_or_else(|| {
        LottoError::input(format!(
            "drawing {} has no '{}' field",
            date,
            game.numbers_field()
        ))
    })?;
    let tokens: Vec<&str> = numbers.split_whitespace().collect();
    if tokens.len() < WHITE_BALL_COUNT {
        return Err(LottoError::input(format!(
            "drawing {} has {} winning numbers, expected at least {}",
            date,
            tokens.len(),
            WHITE_BALL_COUNT
        )));
    }

    let white_balls: [String; WHITE_BALL_COUNT] = std::array::from_fn(|i| tokens[i].to_string());

    let hued_ball = match game.hued_source() {
        HuedSource::Field(name) => text_field(record, name)
            .map(|s| s.trim().to_string())
            .ok_or_else(|| LottoError::input(format!("drawing {} has no '{}' field", date, name)))?,
        HuedSource::Token(index) => tokens
            .get(index)
            .map(|s| s.to_string())
            .ok_or_else(|| {
                LottoError::input(format!(
                    "drawing {} has no bonus ball at position {}",
                    date,
                    index + 1
                ))
            })?,
    };

    Ok(Drawing {
        date,
        white_balls,
        hued_ball,
    })
}

fn text_field<'a>(record: &'a RawRecord, name: &str) -> Option<&'a str> {
    record.get(name).and_then(Value::as_str)
}
