use regex::Regex;

/// Closing line of the array declaration, compared against trimmed content.
const END_SENTINEL: &str = "];";

/// Finds the declaration block of `array_name` in `lines`.
///
/// Returns the inclusive (start, end) line indices: start is the first line
/// declaring the array, end is the first subsequent line whose trimmed
/// content is exactly `];`. First match wins on both; `None` if either is
/// missing.
pub fn locate_block(lines: &[&str], array_name: &str) -> Option<(usize, usize)> {
    let pattern = format!(r"\bconst\s+{}\s*=", regex::escape(array_name));
    let decl = Regex::new(&pattern).unwrap();

    let start = lines.iter().position(|line| decl.is_match(line))?;
    let end = lines[start..]
        .iter()
        .position(|line| line.trim() == END_SENTINEL)?
        + start;

    Some((start, end))
}
