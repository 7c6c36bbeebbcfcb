//! Frontier referer URL and the launcher's 32-bit millisecond clock.

use chrono::{DateTime, Utc};

use crate::language::{ClientLanguage, LanguageSource};

const FRONTIER_INDEX_URL: &str = "https://frontier.ffxiv.com/version_4_0_win/index.html";

/// UTC hour stamp used by the frontier pages, e.g. `2024-03-09-17`.
const FRONTIER_TIME_FORMAT: &str = "%Y-%m-%d-%H";

/// Build the frontier referer for `language` at the current UTC hour.
pub fn frontier_referer(language: ClientLanguage) -> String {
    frontier_referer_at(language, Utc::now())
}

/// Build the frontier referer using the language from a settings provider.
pub fn frontier_referer_for<S: LanguageSource + ?Sized>(settings: &S) -> String {
    frontier_referer(settings.language())
}

/// Build the frontier referer for a fixed point in time.
///
/// Minutes and below are dropped, so every call within one UTC hour yields
/// the same string.
pub fn frontier_referer_at(language: ClientLanguage, now: DateTime<Utc>) -> String {
    format!(
        "{FRONTIER_INDEX_URL}?rc_lang={}&time={}",
        language.locale_code(),
        now.format(FRONTIER_TIME_FORMAT)
    )
}

/// Milliseconds since the Unix epoch, wrapped to an `i32`.
pub fn unix_millis_now() -> i32 {
    unix_millis_at(Utc::now())
}

/// Milliseconds since the Unix epoch for `time`, keeping only the low 32 bits.
///
/// Current dates already exceed `i32::MAX` milliseconds, so the result wraps.
/// Consumers compare these values as-is; do not widen.
pub fn unix_millis_at(time: DateTime<Utc>) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let wrapped = time.timestamp_millis() as i32;
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, h, m, s).unwrap()
    }

    #[test]
    fn referer_matches_template() {
        let url = frontier_referer_at(ClientLanguage::German, at(7, 5, 0));
        assert_eq!(
            url,
            "https://frontier.ffxiv.com/version_4_0_win/index.html?rc_lang=de&time=2024-03-09-07"
        );
    }

    #[test]
    fn referer_is_stable_within_an_hour() {
        let a = frontier_referer_at(ClientLanguage::Japanese, at(17, 0, 0));
        let b = frontier_referer_at(ClientLanguage::Japanese, at(17, 59, 59));
        assert_eq!(a, b);
    }

    #[test]
    fn referer_changes_only_time_across_hours() {
        let before = frontier_referer_at(ClientLanguage::French, at(17, 59, 59));
        let after = frontier_referer_at(ClientLanguage::French, at(18, 0, 0));
        assert_ne!(before, after);

        let (before_head, before_time) = before.split_once("&time=").unwrap();
        let (after_head, after_time) = after.split_once("&time=").unwrap();
        assert_eq!(before_head, after_head);
        assert_eq!(before_time, "2024-03-09-17");
        assert_eq!(after_time, "2024-03-09-18");
    }

    #[test]
    fn referer_uses_settings_language() {
        let url = frontier_referer_for(&ClientLanguage::Other(9));
        assert!(url.contains("rc_lang=en-gb&time="));
    }

    #[test]
    fn unix_millis_small_values_are_exact() {
        let t = Utc.timestamp_millis_opt(123_456_789).unwrap();
        assert_eq!(unix_millis_at(t), 123_456_789);
    }

    #[test]
    fn unix_millis_keeps_low_32_bits() {
        // 2024-03-09T00:00:00Z
        let millis: i64 = 1_709_942_400_000;
        let t = Utc.timestamp_millis_opt(millis).unwrap();
        let expected = i32::from_le_bytes(millis.to_le_bytes()[..4].try_into().unwrap());
        assert_eq!(unix_millis_at(t), expected);
    }

    #[test]
    fn unix_millis_just_past_i32_max_wraps_negative() {
        let t = Utc.timestamp_millis_opt(i64::from(i32::MAX) + 1).unwrap();
        assert_eq!(unix_millis_at(t), i32::MIN);
    }
}
