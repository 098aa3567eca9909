use serde::Serialize;
use std::collections::HashMap;

use crate::normalize::Drawing;

/// Number of hued/white pairs kept in a pair ranking.
pub const HOT_PAIR_LIMIT: usize = 21;

/// Ball values ordered by how often they were drawn, most frequent first.
///
/// Equal counts keep the order in which the values were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyRanking {
    entries: Vec<(String, u32)>,
}

impl FrequencyRanking {
    /// Counts `values` and sorts the result by descending count.
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counter = FirstSeenCounter::default();
        for value in values {
            counter.add(value);
        }
        counter.into_ranking()
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(ball, count)| (ball.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| u64::from(*count)).sum()
    }

    pub fn count_of(&self, ball: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| key == ball)
            .map(|(_, count)| *count)
    }

    pub fn truncated(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }
}

/// Counter that remembers first-seen order, so a stable sort reproduces the tie-break.
#[derive(Default)]
struct FirstSeenCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, u32)>,
}

impl FirstSeenCounter {
    fn add(&mut self, value: &str) {
        match self.index.get(value) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(value.to_string(), self.entries.len());
                self.entries.push((value.to_string(), 1));
            }
        }
    }

    fn into_ranking(self) -> FrequencyRanking {
        let mut entries = self.entries;
        // slice::sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        FrequencyRanking { entries }
    }
}

pub fn white_ball_ranking(drawings: &[Drawing]) -> FrequencyRanking {
    FrequencyRanking::from_values(
        drawings
            .iter()
            .flat_map(|d| d.white_balls.iter().map(String::as_str)),
    )
}

pub fn hued_ball_ranking(drawings: &[Drawing]) -> FrequencyRanking {
    FrequencyRanking::from_values(drawings.iter().map(|d| d.hued_ball.as_str()))
}

/// Ranks every (hued, white) combination drawn together, keeping the top [`HOT_PAIR_LIMIT`].
pub fn hued_white_pair_ranking(drawings: &[Drawing], hued_name: &str) -> FrequencyRanking {
    let keys: Vec<String> = drawings
        .iter()
        .flat_map(|d| {
            d.white_balls
                .iter()
                .map(move |white| format!("{} {}, white {}", hued_name, d.hued_ball, white))
        })
        .collect();
    FrequencyRanking::from_values(keys.iter().map(String::as_str)).truncated(HOT_PAIR_LIMIT)
}
