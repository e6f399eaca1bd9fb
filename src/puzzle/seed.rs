//! Time-derived puzzle seeds
//!
//! A seed is the millisecond timestamp of the start of the current puzzle
//! window. All players inside the same window share a seed, and therefore a
//! puzzle. The engine never reads the clock or the local time zone itself;
//! callers pass both in, keeping every function here deterministic.

use super::mode::{GameMode, MS_MINUTE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic seed for the puzzle window containing `now_millis`
///
/// `utc_offset_minutes` is the player's offset east of UTC (for example 120
/// for UTC+2) and only affects daily mode, where the window boundary is the
/// player's local midnight: local time is truncated to whole days and the
/// seed is the UTC timestamp of that day boundary.
#[must_use]
pub fn new_seed(mode: GameMode, now_millis: i64, utc_offset_minutes: i64) -> i64 {
    match mode {
        GameMode::Daily => {
            let local = now_millis + utc_offset_minutes * MS_MINUTE;
            local.div_euclid(mode.unit_millis()) * mode.unit_millis()
        }
        GameMode::Hourly | GameMode::Infinite => {
            now_millis - now_millis.rem_euclid(mode.unit_millis())
        }
    }
}

/// Sequential number of the puzzle since the mode's epoch, starting at 1
#[must_use]
pub fn word_number(mode: GameMode, seed: i64) -> i64 {
    (seed - mode.start_millis()).div_euclid(mode.unit_millis()) + 1
}

/// Milliseconds until the next puzzle window opens
#[must_use]
pub fn time_remaining(mode: GameMode, seed: i64, now_millis: i64, utc_offset_minutes: i64) -> i64 {
    if mode.uses_time_zone() {
        // The daily seed is a UTC day boundary; shift it back to the local
        // window start before measuring elapsed time
        mode.unit_millis() - (now_millis - (seed - utc_offset_minutes * MS_MINUTE))
    } else {
        mode.unit_millis() - (now_millis - seed)
    }
}

/// Deterministically pick the solution index for a seed
///
/// Same `(seed, list_length)` always yields the same index, so everyone in
/// a puzzle window plays the same word.
///
/// # Panics
/// Panics if `list_length` is zero.
#[must_use]
pub fn pick_solution_index(seed: i64, list_length: usize) -> usize {
    assert!(list_length > 0, "cannot pick from an empty word list");
    let mut rng = StdRng::seed_from_u64(seed.unsigned_abs());
    rng.random_range(0..list_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::mode::{MS_DAY, MS_HOUR, MS_SECOND};

    const UTC_PLUS_2: i64 = 120;

    #[test]
    fn daily_seed_stable_within_local_day() {
        // Two times inside the same local calendar day
        let morning = MS_DAY * 20_000 + 6 * MS_HOUR;
        let evening = MS_DAY * 20_000 + 21 * MS_HOUR;

        assert_eq!(
            new_seed(GameMode::Daily, morning, UTC_PLUS_2),
            new_seed(GameMode::Daily, evening, UTC_PLUS_2)
        );
    }

    #[test]
    fn daily_seed_changes_at_local_midnight() {
        // 23:30 local is 21:30 UTC at UTC+2
        let before_midnight = MS_DAY * 20_000 + 21 * MS_HOUR + 30 * MS_MINUTE;
        let after_midnight = before_midnight + MS_HOUR;

        let seed_before = new_seed(GameMode::Daily, before_midnight, UTC_PLUS_2);
        let seed_after = new_seed(GameMode::Daily, after_midnight, UTC_PLUS_2);
        assert_eq!(seed_after - seed_before, MS_DAY);
    }

    #[test]
    fn daily_seed_depends_on_time_zone() {
        // 23:00 UTC: still today at UTC-2, already tomorrow at UTC+2
        let now = MS_DAY * 20_000 + 23 * MS_HOUR;
        let east = new_seed(GameMode::Daily, now, 120);
        let west = new_seed(GameMode::Daily, now, -120);
        assert_eq!(east - west, MS_DAY);
    }

    #[test]
    fn hourly_seed_truncates_to_hour() {
        let now = MS_DAY * 20_000 + 7 * MS_HOUR + 42 * MS_MINUTE + 13 * MS_SECOND;
        let seed = new_seed(GameMode::Hourly, now, UTC_PLUS_2);
        assert_eq!(seed, MS_DAY * 20_000 + 7 * MS_HOUR);
        assert_eq!(seed % MS_HOUR, 0);
    }

    #[test]
    fn infinite_seed_truncates_to_second() {
        let now = 1_754_863_200_123;
        let seed = new_seed(GameMode::Infinite, now, UTC_PLUS_2);
        assert_eq!(seed, 1_754_863_200_000);
    }

    #[test]
    fn word_number_starts_at_one() {
        let mode = GameMode::Hourly;
        assert_eq!(word_number(mode, mode.start_millis()), 1);
        assert_eq!(word_number(mode, mode.start_millis() + MS_HOUR), 2);
        assert_eq!(word_number(mode, mode.start_millis() + 24 * MS_HOUR), 25);
    }

    #[test]
    fn word_number_is_monotonic() {
        let mode = GameMode::Daily;
        let mut previous = word_number(mode, mode.start_millis());
        for day in 1..30 {
            let n = word_number(mode, mode.start_millis() + day * MS_DAY);
            assert!(n > previous);
            previous = n;
        }
    }

    #[test]
    fn time_remaining_full_window_at_seed() {
        let mode = GameMode::Hourly;
        let seed = new_seed(mode, MS_DAY * 20_000, 0);
        assert_eq!(time_remaining(mode, seed, seed, 0), MS_HOUR);
        assert_eq!(
            time_remaining(mode, seed, seed + 15 * MS_MINUTE, 0),
            45 * MS_MINUTE
        );
    }

    #[test]
    fn daily_time_remaining_accounts_for_offset() {
        let now = MS_DAY * 20_000 + 10 * MS_HOUR; // 12:00 local at UTC+2
        let seed = new_seed(GameMode::Daily, now, UTC_PLUS_2);
        let remaining = time_remaining(GameMode::Daily, seed, now, UTC_PLUS_2);
        assert_eq!(remaining, 12 * MS_HOUR);
    }

    #[test]
    fn pick_solution_index_is_deterministic() {
        for seed in [0, 1_754_863_200_000, 1_754_949_600_000] {
            let a = pick_solution_index(seed, 45);
            let b = pick_solution_index(seed, 45);
            assert_eq!(a, b);
            assert!(a < 45);
        }
    }

    #[test]
    fn pick_solution_index_varies_with_seed() {
        // Not a hard guarantee, but over many windows the pick must move
        let distinct: std::collections::HashSet<usize> = (0..50)
            .map(|day| pick_solution_index(MODE_EPOCH_TEST + day * MS_DAY, 45))
            .collect();
        assert!(distinct.len() > 1);
    }

    const MODE_EPOCH_TEST: i64 = 1_754_863_200_000;
}
