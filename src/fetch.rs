use reqwest::Client;
use std::path::Path;
use std::time::{Instant, SystemTime};
use tracing::info;
use url::Url;

use crate::cache;
use crate::config::GameConfig;
use crate::error::{LottoError, Result};
use crate::game::Game;
use crate::normalize::RawRecord;

/// Upper bound on drawings requested per download.
pub const RES_LIMIT: u32 = 5000;

pub fn request_url(config: &GameConfig) -> Result<Url> {
    let mut url = Url::parse(&config.uri).map_err(|e| LottoError::Configuration {
        message: format!("Invalid endpoint URI '{}': {}", config.uri, e),
    })?;
    url.query_pairs_mut()
        .append_pair("$limit", &RES_LIMIT.to_string());
    Ok(url)
}

pub async fn download(client: &Client, config: &GameConfig) -> Result<Vec<u8>> {
    let start_time = Instant::now();
    let url = request_url(config)?;
    info!(action = "start", component = "download", url = %url, "GET drawing history");

    let response = client
        .get(url.clone())
        .header("X-App-Token", &config.token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(LottoError::transport(format!(
            "{} returned status {}",
            url,
            response.status()
        )));
    }

    let body = response.bytes().await?;
    info!(
        action = "complete",
        component = "download",
        bytes = body.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Download completed"
    );
    Ok(body.to_vec())
}

/// Returns the full drawing history for `game`, refreshing the local cache first when stale.
pub async fn get_game_data(
    game: Game,
    config: &GameConfig,
    cache_dir: &Path,
) -> Result<Vec<RawRecord>> {
    let cache_path = cache_dir.join(game.cache_file_name());

    if cache::is_stale(&cache_path, SystemTime::now(), cache::max_age()).await? {
        info!(action = "refresh", component = "cache", file_path = ?cache_path, "Stale local data, refreshing");
        let body = download(&Client::new(), config).await?;
        cache::write(&cache_path, &body).await?;
    } else {
        info!(action = "hit", component = "cache", file_path = ?cache_path, "Using local cache");
    }

    let data = cache::read(&cache_path).await?;
    parse_records(&data)
}

pub fn parse_records(data: &str) -> Result<Vec<RawRecord>> {
    let records: Vec<RawRecord> = serde_json::from_str(data)?;
    info!(action = "decode", component = "fetch", record_count = records.len(), "Decoded drawing records");
    Ok(records)
}
