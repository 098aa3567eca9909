use clap::ValueEnum;
use std::fmt;

/// Where a game's hued ball lives in its raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuedSource {
    /// A dedicated field, separate from the winning numbers.
    Field(&'static str),
    /// A position inside the split winning numbers string.
    Token(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Game {
    MegaMillions,
    Powerball,
}

impl Game {
    pub fn slug(&self) -> &'static str {
        match self {
            Game::MegaMillions => "mega-millions",
            Game::Powerball => "powerball",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Game::MegaMillions => "Mega Millions",
            Game::Powerball => "Powerball",
        }
    }

    pub fn date_field(&self) -> &'static str {
        "draw_date"
    }

    pub fn numbers_field(&self) -> &'static str {
        "winning_numbers"
    }

    pub fn hued_source(&self) -> HuedSource {
        match self {
            Game::MegaMillions => HuedSource::Field("mega_ball"),
            Game::Powerball => HuedSource::Token(5),
        }
    }

    /// Short color name of the bonus ball, used in pair keys and output labels.
    pub fn hued_name(&self) -> &'static str {
        match self {
            Game::MegaMillions => "gold",
            Game::Powerball => "red",
        }
    }

    pub fn hued_label(&self) -> &'static str {
        match self {
            Game::MegaMillions => "goldBalls",
            Game::Powerball => "redBalls",
        }
    }

    pub fn pairs_label(&self) -> &'static str {
        match self {
            Game::MegaMillions => "goldWhitePairs",
            Game::Powerball => "redWhitePairs",
        }
    }

    pub fn uri_var(&self) -> &'static str {
        match self {
            Game::MegaMillions => "MEGA_MILLIONS_URI",
            Game::Powerball => "POWERBALL_URI",
        }
    }

    pub fn token_var(&self) -> &'static str {
        match self {
            Game::MegaMillions => "MEGA_MILLIONS_APP_TOKEN",
            Game::Powerball => "POWERBALL_APP_TOKEN",
        }
    }

    pub fn cache_file_name(&self) -> String {
        format!("{}.json", self.slug())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hued_source_per_game() {
        assert_eq!(
            Game::MegaMillions.hued_source(),
            HuedSource::Field("mega_ball")
        );
        assert_eq!(Game::Powerball.hued_source(), HuedSource::Token(5));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Game::MegaMillions.hued_label(), "goldBalls");
        assert_eq!(Game::Powerball.hued_label(), "redBalls");
        assert_eq!(Game::Powerball.pairs_label(), "redWhitePairs");
    }

    #[test]
    fn test_cache_file_name() {
        assert_eq!(Game::MegaMillions.cache_file_name(), "mega-millions.json");
        assert_eq!(Game::Powerball.cache_file_name(), "powerball.json");
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(
            Game::from_str("mega-millions", false),
            Ok(Game::MegaMillions)
        );
        assert_eq!(Game::from_str("powerball", false), Ok(Game::Powerball));
    }
}
