/// Smallest quantity the card ever holds.
pub const MIN_QUANTITY: u32 = 1;

/// Parses raw quantity text, clamping anything unusable to [`MIN_QUANTITY`].
///
/// Parsing is lenient: leading whitespace and an optional sign are accepted,
/// then the longest run of ASCII digits is taken and the rest ignored. So
/// `"3.7"` yields 3 and `"12abc"` yields 12, while `""`, `"abc"`, `"0"` and
/// `"-5"` all yield 1. Values too large for `u32` saturate.
pub fn parse_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() || negative {
        return MIN_QUANTITY;
    }

    // Only overflow can fail here: the slice is all ASCII digits.
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    value.max(MIN_QUANTITY)
}

/// Clamps a signed step result into the valid quantity range.
pub fn clamp_quantity(value: i64) -> u32 {
    u32::try_from(value.max(i64::from(MIN_QUANTITY))).unwrap_or(u32::MAX)
}
