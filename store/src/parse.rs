/// Best-effort string-to-integer conversion with C `atoi` semantics.
///
/// Skips leading ASCII whitespace, honors one optional `+`/`-` sign, then
/// consumes the longest run of leading ASCII digits. Anything after the
/// digits is ignored, and an input with no leading digits at all yields 0.
/// Magnitudes out of range for `i64` saturate at `i64::MIN`/`i64::MAX`.
///
/// ```
/// use condstore::parse::best_effort_i64;
///
/// assert_eq!(best_effort_i64("42"), 42);
/// assert_eq!(best_effort_i64("  -12abc"), -12);
/// assert_eq!(best_effort_i64("abc"), 0);
/// ```
#[must_use]
pub fn best_effort_i64(s: &str) -> i64 {
    let rest = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    // Accumulate on the negative side so that `i64::MIN` is reachable.
    let mut acc: i64 = 0;
    for d in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = acc.saturating_mul(10).saturating_sub(i64::from(d - b'0'));
    }
    if negative {
        acc
    } else {
        acc.checked_neg().unwrap_or(i64::MAX)
    }
}
