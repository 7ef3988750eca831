//! Season membership and match selection.

use chrono::NaiveDate;

use crate::cli::types::SeasonKey;

/// Whether `match_date` falls in the same July-June season as `today`.
pub fn in_current_season(match_date: NaiveDate, today: NaiveDate) -> bool {
    SeasonKey::for_date(match_date) == SeasonKey::for_date(today)
}

/// Whether a match dated `match_date` has been played by `today`.
/// Matches dated today still count as not played.
pub fn is_played(match_date: NaiveDate, today: NaiveDate) -> bool {
    match_date < today
}

/// Keep the played matches of the current season, oldest first.
///
/// The sort is stable, so matches on the same day keep their listing order.
pub fn select_season<T, F>(items: impl IntoIterator<Item = T>, today: NaiveDate, date_of: F) -> Vec<T>
where
    F: Fn(&T) -> NaiveDate,
{
    let mut selected: Vec<T> = items
        .into_iter()
        .filter(|item| {
            let date = date_of(item);
            is_played(date, today) && in_current_season(date, today)
        })
        .collect();
    selected.sort_by_key(|item| date_of(item));
    selected
}

/// Split chronologically sorted matches into those to score and the most
/// recent one, which is held back as not yet final.
pub fn split_latest<T>(sorted: &[T]) -> (&[T], Option<&T>) {
    match sorted.split_last() {
        Some((latest, rest)) => (rest, Some(latest)),
        None => (sorted, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_season_autumn_and_spring() {
        let today = date(2025, 3, 1);
        assert!(in_current_season(date(2024, 8, 10), today));
        assert!(in_current_season(date(2024, 11, 30), today));
        assert!(in_current_season(date(2025, 4, 20), today));
        assert!(in_current_season(date(2025, 6, 30), today));
    }

    #[test]
    fn test_other_seasons_rejected() {
        let today = date(2025, 3, 1);
        assert!(!in_current_season(date(2024, 6, 30), today));
        assert!(!in_current_season(date(2025, 7, 1), today));
        assert!(!in_current_season(date(2023, 9, 1), today));
    }

    #[test]
    fn test_today_is_not_played() {
        let today = date(2024, 9, 14);
        assert!(!is_played(today, today));
        assert!(is_played(date(2024, 9, 13), today));
        assert!(!is_played(date(2024, 9, 15), today));
    }

    #[test]
    fn test_select_season_filters_and_sorts_stably() {
        let today = date(2024, 10, 1);
        let items = vec![
            (date(2024, 9, 7), "c"),
            (date(2024, 8, 17), "a"),
            (date(2024, 10, 5), "future"),
            (date(2024, 5, 20), "last season"),
            (date(2024, 9, 7), "d"),
            (date(2024, 8, 24), "b"),
            (date(2024, 10, 1), "today"),
        ];

        let selected = select_season(items, today, |(d, _)| *d);
        let labels: Vec<&str> = selected.iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_latest() {
        let sorted = [1, 2, 3];
        assert_eq!(split_latest(&sorted), (&sorted[..2], Some(&3)));

        let empty: [i32; 0] = [];
        assert_eq!(split_latest(&empty), (&empty[..], None));
    }
}
