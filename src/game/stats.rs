//! Win/loss statistics
//!
//! Tracks games played, the win distribution by attempt count and the
//! current streak. Like the rest of the game layer the record is
//! immutable; recording a result returns the updated statistics.

use crate::board::DEFAULT_MAX_ATTEMPTS;
use crate::puzzle::GameMode;

/// Aggregate results across games of one mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    played: u32,
    fail: u32,
    /// Wins indexed by attempts used, `wins[0]` for a first-guess win
    wins: Vec<u32>,
    streak: u32,
    max_streak: u32,
    /// Seed of the last completed game, for streak continuity
    last_game_seed: Option<i64>,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl Stats {
    /// Empty statistics for boards with `max_attempts` rows
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            played: 0,
            fail: 0,
            wins: vec![0; max_attempts],
            streak: 0,
            max_streak: 0,
            last_game_seed: None,
        }
    }

    /// Record a win after `attempts` guesses
    ///
    /// The streak continues only if the won game's window immediately
    /// follows the last completed one; a gap longer than one puzzle unit
    /// restarts it at 1. Infinite games never carry a streak.
    #[must_use]
    pub fn record_win(&self, mode: GameMode, seed: i64, attempts: usize) -> Self {
        let mut next = self.clone();
        next.played += 1;

        let slot = attempts.saturating_sub(1).min(next.wins.len() - 1);
        next.wins[slot] += 1;

        if mode.has_streak() {
            next.streak = match self.last_game_seed {
                Some(last) if seed - last > mode.unit_millis() => 1,
                Some(_) => self.streak + 1,
                None => 1,
            };
            next.max_streak = next.max_streak.max(next.streak);
        }
        next.last_game_seed = Some(seed);
        next
    }

    /// Record a loss
    #[must_use]
    pub fn record_loss(&self, mode: GameMode, seed: i64) -> Self {
        let mut next = self.clone();
        next.played += 1;
        next.fail += 1;
        if mode.has_streak() {
            next.streak = 0;
        }
        next.last_game_seed = Some(seed);
        next
    }

    /// Games completed
    #[inline]
    #[must_use]
    pub fn played(&self) -> u32 {
        self.played
    }

    /// Games lost
    #[inline]
    #[must_use]
    pub fn losses(&self) -> u32 {
        self.fail
    }

    /// Games won
    #[must_use]
    pub fn won(&self) -> u32 {
        self.wins.iter().sum()
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won()) / f64::from(self.played) * 100.0
        }
    }

    /// Wins by attempt count, index 0 for first-guess wins
    #[inline]
    #[must_use]
    pub fn distribution(&self) -> &[u32] {
        &self.wins
    }

    /// Current streak of consecutive wins
    #[inline]
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak ever reached
    #[inline]
    #[must_use]
    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Seed of the most recently completed game
    #[inline]
    #[must_use]
    pub fn last_game_seed(&self) -> Option<i64> {
        self.last_game_seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{MS_DAY, MS_HOUR};

    #[test]
    fn empty_stats() {
        let stats = Stats::default();
        assert_eq!(stats.played(), 0);
        assert_eq!(stats.won(), 0);
        assert!((stats.win_rate()).abs() < f64::EPSILON);
        assert_eq!(stats.distribution(), &[0; 6]);
    }

    #[test]
    fn win_updates_distribution() {
        let stats = Stats::default().record_win(GameMode::Daily, 0, 3);
        assert_eq!(stats.played(), 1);
        assert_eq!(stats.won(), 1);
        assert_eq!(stats.distribution(), &[0, 0, 1, 0, 0, 0]);
        assert!((stats.win_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn consecutive_daily_wins_extend_streak() {
        let stats = Stats::default()
            .record_win(GameMode::Daily, 0, 3)
            .record_win(GameMode::Daily, MS_DAY, 4)
            .record_win(GameMode::Daily, 2 * MS_DAY, 2);

        assert_eq!(stats.streak(), 3);
        assert_eq!(stats.max_streak(), 3);
    }

    #[test]
    fn skipped_day_restarts_streak() {
        let stats = Stats::default()
            .record_win(GameMode::Daily, 0, 3)
            .record_win(GameMode::Daily, MS_DAY, 4)
            .record_win(GameMode::Daily, 3 * MS_DAY, 2);

        assert_eq!(stats.streak(), 1);
        assert_eq!(stats.max_streak(), 2);
    }

    #[test]
    fn loss_breaks_streak_but_keeps_max() {
        let stats = Stats::default()
            .record_win(GameMode::Daily, 0, 3)
            .record_win(GameMode::Daily, MS_DAY, 4)
            .record_loss(GameMode::Daily, 2 * MS_DAY);

        assert_eq!(stats.streak(), 0);
        assert_eq!(stats.max_streak(), 2);
        assert_eq!(stats.losses(), 1);
        assert_eq!(stats.played(), 3);
    }

    #[test]
    fn hourly_streak_uses_hour_unit() {
        let stats = Stats::default()
            .record_win(GameMode::Hourly, 0, 3)
            .record_win(GameMode::Hourly, MS_HOUR, 3);
        assert_eq!(stats.streak(), 2);

        let stats = stats.record_win(GameMode::Hourly, 4 * MS_HOUR, 3);
        assert_eq!(stats.streak(), 1);
    }

    #[test]
    fn infinite_mode_has_no_streak() {
        let stats = Stats::default()
            .record_win(GameMode::Infinite, 0, 3)
            .record_win(GameMode::Infinite, 1, 3);

        assert_eq!(stats.streak(), 0);
        assert_eq!(stats.won(), 2);
    }

    #[test]
    fn attempts_clamped_to_distribution() {
        // attempts beyond the board size land in the last slot
        let stats = Stats::default().record_win(GameMode::Daily, 0, 9);
        assert_eq!(stats.distribution(), &[0, 0, 0, 0, 0, 1]);
    }
}
