use chrono::{DateTime, NaiveDateTime};

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max_len: usize) -> String {
  if s.chars().count() <= max_len {
    s.to_string()
  } else {
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
  }
}

/// Render a server timestamp as "YYYY-MM-DD HH:MM", or verbatim if it doesn't parse
pub fn format_timestamp(raw: &str) -> String {
  const DISPLAY: &str = "%Y-%m-%d %H:%M";

  if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
    return dt.format(DISPLAY).to_string();
  }
  // Servers often omit the offset
  if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
    return dt.format(DISPLAY).to_string();
  }
  raw.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_truncate_short_string() {
    assert_eq!(truncate("hello", 10), "hello");
  }

  #[test]
  fn test_truncate_exact_length() {
    assert_eq!(truncate("hello", 5), "hello");
  }

  #[test]
  fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 8), "hello...");
  }

  #[test]
  fn test_truncate_multibyte() {
    assert_eq!(truncate("Conceição Gonçalves", 10), "Conceiç...");
  }

  #[test]
  fn test_format_rfc3339() {
    assert_eq!(format_timestamp("2024-03-01T12:34:56Z"), "2024-03-01 12:34");
    assert_eq!(
      format_timestamp("2024-03-01T12:34:56.123-03:00"),
      "2024-03-01 12:34"
    );
  }

  #[test]
  fn test_format_naive() {
    assert_eq!(format_timestamp("2024-03-01T08:05:00"), "2024-03-01 08:05");
    assert_eq!(
      format_timestamp("2024-03-01T08:05:00.1234567"),
      "2024-03-01 08:05"
    );
  }

  #[test]
  fn test_format_unparseable_is_verbatim() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp(""), "");
  }
}
