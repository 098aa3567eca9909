use rand::Rng;
use serde::Serialize;

use crate::error::{LottoError, Result};
use crate::frequency::FrequencyRanking;
use crate::normalize::WHITE_BALL_COUNT;

pub const DEFAULT_MAX_ATTEMPTS: u64 = 10_000_000;

/// Multiset in which every ball appears once per historical occurrence.
///
/// A uniform draw from the pool is a frequency-weighted draw over distinct balls.
#[derive(Debug, Clone)]
pub struct WeightedPool<'a> {
    pool: Vec<&'a str>,
}

impl<'a> WeightedPool<'a> {
    pub fn from_ranking(ranking: &'a FrequencyRanking) -> Self {
        let mut pool = Vec::with_capacity(ranking.total() as usize);
        for (ball, count) in ranking.iter() {
            pool.extend(std::iter::repeat(ball).take(count as usize));
        }
        Self { pool }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a str> {
        if self.pool.is_empty() {
            return None;
        }
        Some(self.pool[rng.random_range(0..self.pool.len())])
    }
}

/// Rejection sampler with an explicit attempt cap.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    pub max_attempts: u64,
}

impl Default for Sampler {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Sampler {
    pub fn new(max_attempts: u64) -> Self {
        Self { max_attempts }
    }

    /// Draws from `pool` with replacement until `n` distinct balls are collected.
    ///
    /// Results are in the order they were first drawn.
    pub fn select_unique<R: Rng + ?Sized>(
        &self,
        pool: &WeightedPool<'_>,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<String>> {
        let mut picked: Vec<String> = Vec::with_capacity(n);
        let mut attempts = 0u64;

        while picked.len() < n {
            if attempts >= self.max_attempts {
                return Err(LottoError::Sampling {
                    message: format!(
                        "found {} of {} unique balls after {} attempts",
                        picked.len(),
                        n,
                        attempts
                    ),
                });
            }
            attempts += 1;

            let Some(ball) = pool.draw(rng) else {
                return Err(LottoError::Sampling {
                    message: format!("cannot pick {} balls from an empty pool", n),
                });
            };
            if !picked.iter().any(|p| p == ball) {
                picked.push(ball.to_string());
            }
        }
        Ok(picked)
    }

    pub fn lucky_pick<R: Rng + ?Sized>(
        &self,
        white: &FrequencyRanking,
        hued: &FrequencyRanking,
        rng: &mut R,
    ) -> Result<LuckyPick> {
        let white_balls = self.select_unique(&WeightedPool::from_ranking(white), WHITE_BALL_COUNT, rng)?;
        let mut hued_ball = self.select_unique(&WeightedPool::from_ranking(hued), 1, rng)?;
        Ok(LuckyPick {
            white_balls,
            hued_ball: hued_ball.pop().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyPick {
    pub white_balls: Vec<String>,
    pub hued_ball: String,
}
