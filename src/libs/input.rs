//! Classification of raw operator input.
//!
//! Counts use a leading-integer parse: leading whitespace and an optional
//! sign are accepted, then the longest run of digits is read and anything
//! after it is ignored. `"5abc"` and `"5.5"` therefore both count as 5.

/// What a line typed at the prompt means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Exit,
    Count(u32),
    Invalid,
}

/// Classifies a line; the exit command wins over any numeric reading.
///
/// ```rust
/// use headcount::libs::input::{classify, InputKind};
///
/// assert_eq!(classify("X"), InputKind::Exit);
/// assert_eq!(classify("4"), InputKind::Count(4));
/// assert_eq!(classify("zero"), InputKind::Invalid);
/// ```
pub fn classify(input: &str) -> InputKind {
    if is_exit_command(input) {
        return InputKind::Exit;
    }
    match parse_count(input) {
        Some(people) => InputKind::Count(people),
        None => InputKind::Invalid,
    }
}

/// True when the trimmed input is `exit` or `x`, ignoring case.
pub fn is_exit_command(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "exit" | "x")
}

/// True when the leading integer of `input` is positive.
pub fn is_valid_count(input: &str) -> bool {
    parse_count(input).is_some()
}

/// Leading-integer parse of a group size.
///
/// Returns `None` for input without leading digits, for zero, for negative
/// values and for values that do not fit in a `u32`.
pub fn parse_count(input: &str) -> Option<u32> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned.find(|c: char| !c.is_ascii_digit()).unwrap_or(unsigned.len());
    // Group sizes are stored as u32; a digit run past u32::MAX is rejected
    // as invalid input rather than clamped or widened.
    let value: u32 = unsigned[..end].parse().ok()?;

    if negative || value == 0 {
        return None;
    }
    Some(value)
}
