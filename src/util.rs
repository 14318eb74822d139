use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Local;

pub fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }

    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }

    if max <= 3 {
        return s.chars().take(max).collect();
    }

    let truncated: String = s.chars().take(max - 3).collect();
    format!("{}...", truncated)
}

/// Wall-clock display label for freshly sent messages, e.g. "10:14 AM".
pub fn clock_label() -> String {
    Local::now().format("%-I:%M %p").to_string()
}

/// Short date label for freshly added comments, e.g. "8/21/2026".
pub fn date_label() -> String {
    Local::now().format("%-m/%-d/%Y").to_string()
}

static LAST_MINTED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp that never repeats within a process.
///
/// Back-to-back calls inside the same millisecond bump past the previous
/// value instead of colliding, so ids derived from it stay session-unique.
pub fn mint_millis() -> i64 {
    let now = Local::now().timestamp_millis();
    let mut prev = LAST_MINTED_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST_MINTED_MILLIS.compare_exchange_weak(
            prev,
            next,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return next,
            Err(actual) => prev = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{mint_millis, truncate};

    #[test]
    fn test_truncate_unicode_safe() {
        let input = "ééééé";
        assert_eq!(truncate(input, 4), "é...");
    }

    #[test]
    fn test_truncate_small_max() {
        let input = "こんにちは";
        assert_eq!(truncate(input, 3), "こんに");
        assert_eq!(truncate(input, 0), "");
    }

    #[test]
    fn test_mint_millis_never_repeats() {
        let a = mint_millis();
        let b = mint_millis();
        let c = mint_millis();
        assert!(b > a);
        assert!(c > b);
    }
}
