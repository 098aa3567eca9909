use std::env;
use tracing::info;

use crate::error::{LottoError, Result};
use crate::game::Game;

/// Token shared by every game when no per-game token is set.
pub const SHARED_TOKEN_VAR: &str = "NYDATA_APP_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub uri: String,
    pub token: String,
}

impl GameConfig {
    pub fn from_env(game: Game) -> Result<Self> {
        Self::from_lookup(game, |name| env::var(name).ok())
    }

    /// Resolves the endpoint and token through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(game: Game, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let uri = get(game.uri_var()).ok_or_else(|| missing(game.uri_var()))?;
        let token = get(game.token_var())
            .or_else(|| get(SHARED_TOKEN_VAR))
            .ok_or_else(|| missing(game.token_var()))?;

        info!(
            action = "resolve",
            component = "config",
            game = game.slug(),
            uri = %uri,
            "Game configuration resolved"
        );
        Ok(Self { uri, token })
    }
}

fn missing(name: &str) -> LottoError {
    LottoError::Configuration {
        message: format!("Set {} in your environment", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_resolves_per_game_values() {
        let lookup = lookup_from(&[
            ("POWERBALL_URI", "https://example.org/pb.json"),
            ("POWERBALL_APP_TOKEN", "nonsense"),
        ]);
        let config = GameConfig::from_lookup(Game::Powerball, lookup).unwrap();
        assert_eq!(config.uri, "https://example.org/pb.json");
        assert_eq!(config.token, "nonsense");
    }

    #[test]
    fn test_falls_back_to_shared_token() {
        let lookup = lookup_from(&[
            ("MEGA_MILLIONS_URI", "https://example.org/mm.json"),
            ("NYDATA_APP_TOKEN", "shared"),
        ]);
        let config = GameConfig::from_lookup(Game::MegaMillions, lookup).unwrap();
        assert_eq!(config.token, "shared");
    }

    #[test]
    fn test_missing_uri_is_configuration_error() {
        let lookup = lookup_from(&[("NYDATA_APP_TOKEN", "shared")]);
        let err = GameConfig::from_lookup(Game::Powerball, lookup).unwrap_err();
        match err {
            LottoError::Configuration { message } => assert!(message.contains("POWERBALL_URI")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let lookup = lookup_from(&[
            ("MEGA_MILLIONS_URI", "https://example.org/mm.json"),
            ("MEGA_MILLIONS_APP_TOKEN", ""),
        ]);
        let err = GameConfig::from_lookup(Game::MegaMillions, lookup).unwrap_err();
        assert!(matches!(err, LottoError::Configuration { .. }));
        assert!(err.to_string().contains("MEGA_MILLIONS_APP_TOKEN"));
    }
}
