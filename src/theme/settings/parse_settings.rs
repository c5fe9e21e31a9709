use crate::theme::types::Settings;

/// What: Strip a trailing `# comment` from a config value.
///
/// Details:
/// - Only a `#` at the start or preceded by whitespace opens a comment, so URL
///   fragments and `//` in `http://` survive.
fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Split a comma-separated list into trimmed, non-empty items.
fn split_list(val: &str) -> Vec<String> {
    val.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - `key = value` lines; `#` and `//` lines are comments.
/// - Keys are case-insensitive and `.`/`-`/space normalize to `_`.
/// - Unknown keys are ignored; unparsable values leave the default in place.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val);
        match key.as_str() {
            "catalog_base" | "catalog" | "catalog_url" => {
                if !val.is_empty() {
                    settings.catalog_base = val.to_string();
                }
            }
            "majors_catalog" | "majors_file" => {
                if !val.is_empty() {
                    settings.majors_catalog = val.to_string();
                }
            }
            "liberal_arts_catalog" | "liberal_arts_file" => {
                if !val.is_empty() {
                    settings.liberal_arts_catalog = val.to_string();
                }
            }
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "tables" | "schedule_tables" => {
                settings.tables = split_list(val);
            }
            "day_labels" | "days" => {
                settings.day_labels = split_list(val);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Recognized keys, aliases, and comments
    ///
    /// - Input: URL with `//` and a fragment-like `#x`, aliased keys, unknown key
    /// - Output: URL kept intact; aliases applied; unknown key ignored
    fn parse_keys_aliases_and_comments() {
        let mut s = Settings::default();
        parse_settings(
            "Catalog-URL = https://uni.example/data#x # mirror\n\
             // old = value\n\
             majors.file = majors.json\n\
             timeout = 5\n\
             days = mon, tue ,wed\n\
             colour = blue\n",
            &mut s,
        );
        assert_eq!(s.catalog_base, "https://uni.example/data#x");
        assert_eq!(s.majors_catalog, "majors.json");
        assert_eq!(s.request_timeout_secs, 5);
        assert_eq!(s.day_labels, vec!["mon", "tue", "wed"]);
        assert_eq!(s.liberal_arts_catalog, "schedules-liberal-arts.json");
    }

    #[test]
    /// What: Inline comment stripping only honours `#` after whitespace
    fn inline_comment_rules() {
        assert_eq!(strip_inline_comment(" a # b"), "a");
        assert_eq!(strip_inline_comment("a#b"), "a#b");
        assert_eq!(strip_inline_comment("# all"), "");
    }
}
