//! Tolerant numeric parsing for scraped counter text.

/// Parses a scraped count like `"950"`, `"1,204"`, or `"1.2k"`.
///
/// Supports the thousands shorthand GitHub renders on profile counters:
/// a trailing `k` (case-insensitive) multiplies by 1000, so `"1.2k"` → 1200.
/// Commas are ignored. Empty or unparseable text yields 0 — scraped
/// counters degrade, they never error.
pub(crate) fn parse_count(raw: &str) -> u64 {
    let cleaned = raw.trim().replace(',', "").to_lowercase();
    if cleaned.is_empty() {
        return 0;
    }

    if let Some(stripped) = cleaned.strip_suffix('k') {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        return stripped
            .parse::<f64>()
            .map(|v| (v * 1000.0).max(0.0) as u64)
            .unwrap_or(0);
    }

    // Drop any stray non-digit noise ("123 followers" → "123").
    let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().unwrap_or(0)
}
