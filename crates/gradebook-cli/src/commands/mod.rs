pub mod add;
pub mod list;
pub mod marks;
pub mod shell;
pub mod topper;

/// Parse a `SUBJECT:MARK` argument into a pair.
pub fn parse_subject_mark(s: &str) -> Result<(String, f64), String> {
    let (subject, mark) = s
        .split_once(':')
        .ok_or_else(|| format!("expected SUBJECT:MARK, got {s:?}"))?;
    let mark: f64 = mark
        .parse()
        .map_err(|_| format!("invalid mark in {s:?}"))?;
    Ok((subject.to_string(), mark))
}
