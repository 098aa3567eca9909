pub mod args;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod frequency;
pub mod game;
pub mod normalize;
pub mod report;
pub mod sampler;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use config::GameConfig;
pub use error::{LottoError, Result};
pub use fetch::get_game_data;
pub use frequency::FrequencyRanking;
pub use game::Game;
pub use normalize::{Drawing, RawRecord};
pub use report::{Report, ReportBuilder};
pub use sampler::{LuckyPick, Sampler, WeightedPool};
