//! Game modes
//!
//! Each mode defines how often a new puzzle appears: daily at local
//! midnight, hourly on the hour, or effectively per-session for infinite
//! play. All modes share one epoch so word numbers stay comparable.

/// Milliseconds per second
pub const MS_SECOND: i64 = 1_000;
/// Milliseconds per minute
pub const MS_MINUTE: i64 = 60 * MS_SECOND;
/// Milliseconds per hour
pub const MS_HOUR: i64 = 60 * MS_MINUTE;
/// Milliseconds per day
pub const MS_DAY: i64 = 24 * MS_HOUR;

/// Epoch all modes count word numbers from (2025-08-11 00:00 UTC+2)
pub const MODE_START_EPOCH_MS: i64 = 1_754_863_200_000;

/// How often a new puzzle becomes available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// One shared puzzle per local calendar day
    #[default]
    Daily,
    /// One shared puzzle per clock hour
    Hourly,
    /// A fresh puzzle every play session
    Infinite,
}

impl GameMode {
    /// All modes, in display order
    pub const ALL: [Self; 3] = [Self::Daily, Self::Hourly, Self::Infinite];

    /// Length of one puzzle window in milliseconds
    #[must_use]
    pub const fn unit_millis(self) -> i64 {
        match self {
            Self::Daily => MS_DAY,
            Self::Hourly => MS_HOUR,
            Self::Infinite => MS_SECOND,
        }
    }

    /// Epoch the mode's word numbers count from
    #[must_use]
    pub const fn start_millis(self) -> i64 {
        MODE_START_EPOCH_MS
    }

    /// Whether wins in this mode extend a streak
    ///
    /// Infinite puzzles are per-session, so streaks are meaningless there.
    #[must_use]
    pub const fn has_streak(self) -> bool {
        !matches!(self, Self::Infinite)
    }

    /// Whether the puzzle boundary follows the player's local midnight
    #[must_use]
    pub const fn uses_time_zone(self) -> bool {
        matches!(self, Self::Daily)
    }

    /// Polish display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Daily => "Dzienny",
            Self::Hourly => "Godzinny",
            Self::Infinite => "Nieskończony",
        }
    }

    /// Parse a mode from a CLI name
    ///
    /// Accepts English CLI spellings; unknown names fall back to daily.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "hourly" | "godzinny" => Self::Hourly,
            "infinite" | "nieskończony" | "nieskonczony" => Self::Infinite,
            _ => Self::Daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_millis_per_mode() {
        assert_eq!(GameMode::Daily.unit_millis(), 86_400_000);
        assert_eq!(GameMode::Hourly.unit_millis(), 3_600_000);
        assert_eq!(GameMode::Infinite.unit_millis(), 1_000);
    }

    #[test]
    fn streaks_everywhere_but_infinite() {
        assert!(GameMode::Daily.has_streak());
        assert!(GameMode::Hourly.has_streak());
        assert!(!GameMode::Infinite.has_streak());
    }

    #[test]
    fn only_daily_uses_time_zone() {
        assert!(GameMode::Daily.uses_time_zone());
        assert!(!GameMode::Hourly.uses_time_zone());
        assert!(!GameMode::Infinite.uses_time_zone());
    }

    #[test]
    fn from_name_parses_known_modes() {
        assert_eq!(GameMode::from_name("daily"), GameMode::Daily);
        assert_eq!(GameMode::from_name("HOURLY"), GameMode::Hourly);
        assert_eq!(GameMode::from_name("infinite"), GameMode::Infinite);
        assert_eq!(GameMode::from_name("godzinny"), GameMode::Hourly);
        assert_eq!(GameMode::from_name("anything"), GameMode::Daily);
    }
}
