//! Low-level fixed-column line utilities
//!
//! Trans files are 80+ column ASCII; every decoder addresses fields by
//! byte column. `sanitize_line` maps stray non-ASCII or control bytes to
//! spaces up front so that byte index and column index stay identical,
//! and the accessors below clamp out-of-range columns instead of
//! panicking on short lines.

/// Replace non-ASCII and control characters with spaces and drop a
/// trailing carriage return.
///
/// Lines come out of this with one byte per column, so the column
/// helpers can slice by byte index.
pub fn sanitize_line(raw: &str) -> String {
    raw.trim_end_matches('\r')
        .chars()
        .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { ' ' })
        .collect()
}

/// Columns `[start, end)` of a line, clamped, untrimmed.
pub fn field(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

/// Columns `[start, end)` of a line, right-trimmed.
pub fn field_rtrim(line: &str, start: usize, end: usize) -> &str {
    field(line, start, end).trim_end()
}

/// Columns `[start, end)` of a line, trimmed on both sides.
pub fn field_trim(line: &str, start: usize, end: usize) -> &str {
    field(line, start, end).trim()
}

/// The byte at column `idx`, with short lines reading as virtual
/// trailing spaces.
pub fn col(line: &str, idx: usize) -> u8 {
    line.as_bytes().get(idx).copied().unwrap_or(b' ')
}

/// True if the line is at least `n` columns long and its first `n`
/// columns are all spaces.
pub fn leading_spaces(line: &str, n: usize) -> bool {
    let bytes = line.as_bytes();
    bytes.len() >= n && bytes[..n].iter().all(|&b| b == b' ')
}
