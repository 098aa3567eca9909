use chrono::NaiveDate;
use rand::Rng;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::time::Instant;
use tracing::info;

use crate::error::{LottoError, Result};
use crate::frequency::{self, FrequencyRanking};
use crate::game::Game;
use crate::normalize::{self, RawRecord};
use crate::sampler::{LuckyPick, Sampler};
use crate::stats::Statistics;
use crate::utils::format_number;

/// Everything reported about one game since one start date.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub game: Game,
    pub date_range: String,
    pub total_drawings: usize,
    pub white_balls: FrequencyRanking,
    pub hued_balls: FrequencyRanking,
    pub hued_white_pairs: FrequencyRanking,
    pub white_ball_range: String,
    pub all_ball_odd_even: String,
    pub all_ball_sum: String,
    pub lucky_fun_pick: Option<LuckyPick>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder {
    game: Game,
    start: Option<NaiveDate>,
    sampler: Option<Sampler>,
}

impl ReportBuilder {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            start: None,
            sampler: Some(Sampler::default()),
        }
    }

    pub fn start_date(mut self, start: Option<NaiveDate>) -> Self {
        self.start = start;
        self
    }

    /// `None` leaves the lucky pick out of the report.
    pub fn sampler(mut self, sampler: Option<Sampler>) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn build<R: Rng + ?Sized>(&self, records: &[RawRecord], rng: &mut R) -> Result<Report> {
        let start_time = Instant::now();
        let drawings = normalize::normalize(self.game, records, self.start)?;
        if drawings.is_empty() {
            return Err(LottoError::input(format!(
                "no {} drawings on or after {}",
                self.game,
                self.start.unwrap_or_else(normalize::default_start_date)
            )));
        }

        let stats = Statistics::compute(&drawings)?;
        let white_balls = frequency::white_ball_ranking(&drawings);
        let hued_balls = frequency::hued_ball_ranking(&drawings);
        let hued_white_pairs = frequency::hued_white_pair_ranking(&drawings, self.game.hued_name());

        let lucky_fun_pick = match &self.sampler {
            Some(sampler) => Some(sampler.lucky_pick(&white_balls, &hued_balls, rng)?),
            None => None,
        };

        info!(
            action = "complete",
            component = "report",
            game = self.game.slug(),
            total_drawings = drawings.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Report built"
        );

        Ok(Report {
            game: self.game,
            date_range: stats.date_range,
            total_drawings: drawings.len(),
            white_balls,
            hued_balls,
            hued_white_pairs,
            white_ball_range: stats.white_ball_range,
            all_ball_odd_even: stats.all_ball_odd_even,
            all_ball_sum: stats.all_ball_sum,
            lucky_fun_pick,
        })
    }
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Report", 10)?;
        state.serialize_field("dateRange", &self.date_range)?;
        state.serialize_field("totalDrawings", &self.total_drawings)?;
        state.serialize_field("whiteBalls", &self.white_balls)?;
        state.serialize_field(self.game.hued_label(), &self.hued_balls)?;
        state.serialize_field(self.game.pairs_label(), &self.hued_white_pairs)?;
        state.serialize_field("whiteBallRange", &self.white_ball_range)?;
        state.serialize_field("allBallOddEven", &self.all_ball_odd_even)?;
        state.serialize_field("allBallSum", &self.all_ball_sum)?;
        match &self.lucky_fun_pick {
            Some(pick) => state.serialize_field("luckyFunPick", pick)?,
            None => state.skip_field("luckyFunPick")?,
        }
        state.end()
    }
}

pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| LottoError::input(format!("failed to encode report: {}", e)))
}

/// Human-readable report. `top` limits the rows shown per ranking.
pub fn render_text(report: &Report, top: Option<usize>) -> String {
    TextReport { report, top }.to_string()
}

struct TextReport<'a> {
    report: &'a Report,
    top: Option<usize>,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let hued = report.game.hued_name();

        writeln!(f, "\n--- {} Report ---", report.game)?;
        writeln!(f, "Date range: {}", report.date_range)?;
        writeln!(
            f,
            "Total drawings: {}",
            format_number(report.total_drawings as u64)
        )?;
        writeln!(f, "White ball spread: {}", report.white_ball_range)?;
        writeln!(f, "Odd/even balance: {}", report.all_ball_odd_even)?;
        writeln!(f, "Ball sums: {}", report.all_ball_sum)?;

        self.write_ranking(f, "White balls", &report.white_balls)?;
        self.write_ranking(f, &format!("{} balls", capitalize(hued)), &report.hued_balls)?;
        self.write_ranking(
            f,
            &format!("{}/white pairs", capitalize(hued)),
            &report.hued_white_pairs,
        )?;

        if let Some(pick) = &report.lucky_fun_pick {
            writeln!(
                f,
                "\nLucky fun pick: {} + {} {}",
                pick.white_balls.join(" "),
                hued,
                pick.hued_ball
            )?;
        }
        Ok(())
    }
}

impl TextReport<'_> {
    fn write_ranking(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        ranking: &FrequencyRanking,
    ) -> fmt::Result {
        let shown = self.top.unwrap_or(ranking.len()).min(ranking.len());
        if shown < ranking.len() {
            writeln!(f, "\n{} (top {} of {}):", title, shown, ranking.len())?;
        } else {
            writeln!(f, "\n{}:", title)?;
        }
        for (ball, count) in ranking.iter().take(shown) {
            writeln!(f, "- {}: {} draws", ball, format_number(u64::from(count)))?;
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
