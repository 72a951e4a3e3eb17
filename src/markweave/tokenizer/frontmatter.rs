//! Frontmatter skipping (§4.2.5).
//!
//!     The core consumes only a single Markdown input string; a TOML frontmatter
//!     deserializer is an external collaborator (§1). This module only recognizes
//!     the `+++ ... +++` delimiter lines and skips the body between them — it never
//!     parses the TOML itself.

/// If `source` starts with a `+++` line, returns the slice after the matching
/// closing `+++` line. Otherwise returns `source` unchanged.
pub fn strip(source: &str) -> &str {
    let rest = match source.strip_prefix("+++") {
        Some(r) => r,
        None => return source,
    };
    // The opening `+++` must be alone on its line (only trailing whitespace before
    // the newline).
    let after_open = match rest.split_once('\n') {
        Some((first_line, after)) if first_line.trim().is_empty() => after,
        _ => return source,
    };

    let mut search_from = 0usize;
    loop {
        let line_end = after_open[search_from..]
            .find('\n')
            .map(|i| search_from + i);
        let (line, next_search) = match line_end {
            Some(end) => (&after_open[search_from..end], end + 1),
            None => (&after_open[search_from..], after_open.len()),
        };
        if line.trim_end() == "+++" {
            return &after_open[next_search..];
        }
        if line_end.is_none() {
            // Reached EOF without a closing `+++`: no frontmatter after all.
            return source;
        }
        search_from = next_search;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_well_formed_frontmatter() {
        let src = "+++\ntitle = \"x\"\n+++\n# Hi\n";
        assert_eq!(strip(src), "# Hi\n");
    }

    #[test]
    fn leaves_source_without_frontmatter_untouched() {
        let src = "# Hi\n";
        assert_eq!(strip(src), src);
    }

    #[test]
    fn leaves_source_with_unterminated_frontmatter_untouched() {
        let src = "+++\ntitle = \"x\"\n# Hi\n";
        assert_eq!(strip(src), src);
    }
}
