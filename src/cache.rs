use std::io::ErrorKind;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tokio::fs;
use tracing::info;

use crate::error::Result;

pub const HOURS_TO_CACHE: u64 = 6;

pub fn max_age() -> Duration {
    Duration::from_secs(HOURS_TO_CACHE * 60 * 60)
}

/// A cache file is stale when it is missing or older than `max_age` at `now`.
pub async fn is_stale(path: &Path, now: SystemTime, max_age: Duration) -> Result<bool> {
    let modified = match fs::metadata(path).await {
        Ok(meta) => meta.modified()?,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(action = "check", component = "cache", file_path = ?path, "Cache file does not exist, will create it");
            return Ok(true);
        }
        Err(e) => return Err(e.into()),
    };

    // A modification time in the future reads as zero age.
    let age = now.duration_since(modified).unwrap_or_default();
    info!(
        action = "check",
        component = "cache",
        file_path = ?path,
        age_ms = age.as_millis(),
        "Cache age"
    );
    Ok(age > max_age)
}

pub async fn read(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path).await?)
}

pub async fn write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, data).await?;
    info!(action = "write", component = "cache", file_path = ?path, bytes = data.len(), "Cache refreshed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "lotto-report-cache-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[tokio::test]
    async fn test_missing_file_is_stale() {
        let dir = scratch_dir("missing");
        let stale = is_stale(&dir.join("absent.json"), SystemTime::now(), max_age())
            .await
            .unwrap();
        assert!(stale);
    }

    #[tokio::test]
    async fn test_fresh_file_then_aged_file() {
        let dir = scratch_dir("aging");
        let path = dir.join("powerball.json");
        write(&path, b"[]").await.unwrap();

        let now = SystemTime::now();
        assert!(!is_stale(&path, now, max_age()).await.unwrap());

        let later = now + max_age() + Duration::from_secs(60);
        assert!(is_stale(&path, later, max_age()).await.unwrap());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_write_then_read_creates_directory() {
        let dir = scratch_dir("nested");
        let path = dir.join("deeper").join("mega-millions.json");
        write(&path, br#"[{"draw_date":"2024-01-01"}]"#).await.unwrap();
        let data = read(&path).await.unwrap();
        assert!(data.contains("2024-01-01"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
