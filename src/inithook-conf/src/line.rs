//! Locating and rewriting the `HOOKS=(...)` line.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Matches an uncommented hook list line. Anchored per line; the capture is
/// the space-separated token list between the parentheses.
static HOOKS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^HOOKS=\((.*?)\)$").expect("HOOKS regex pattern is valid and tested")
});

/// The `HOOKS=(...)` line of a boot configuration file: its byte span within
/// the file contents and the ordered list of hook tokens it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HooksLine {
    /// Byte range of the full matched line within the original contents.
    pub span: Range<usize>,
    /// Ordered hook tokens from the interior of the parentheses.
    pub hooks: Vec<String>,
}

impl HooksLine {
    /// Find the first `HOOKS=(...)` line in `contents`.
    ///
    /// The contract assumes exactly one such line exists; if the file has
    /// more, the first match wins.
    pub fn find(contents: &str) -> Option<HooksLine> {
        let captures = HOOKS_REGEX.captures(contents)?;
        let whole = captures.get(0)?;
        let interior = captures.get(1)?;

        Some(HooksLine {
            span: whole.range(),
            hooks: interior
                .as_str()
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
        })
    }

    /// Zero-based index of the first occurrence of `hook`, if present.
    pub fn position(&self, hook: &str) -> Option<usize> {
        self.hooks.iter().position(|h| h == hook)
    }

    /// Whether `hook` appears anywhere in the list.
    pub fn contains(&self, hook: &str) -> bool {
        self.position(hook).is_some()
    }

    /// Reassemble the line as `HOOKS=(<tokens joined by single space>)`.
    pub fn render(&self) -> String {
        format!("HOOKS=({})", self.hooks.join(" "))
    }

    /// Splice the rendered line back into `contents`, leaving every byte
    /// outside the original span untouched.
    pub fn splice(&self, contents: &str) -> String {
        let head = &contents[..self.span.start];
        let tail = &contents[self.span.end..];

        let mut out = String::with_capacity(head.len() + tail.len() + self.span.len() + 16);
        out.push_str(head);
        out.push_str(&self.render());
        out.push_str(tail);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_simple_line() {
        let contents = "HOOKS=(base udev block filesystems)\n";
        let line = HooksLine::find(contents).unwrap();
        assert_eq!(line.hooks, vec!["base", "udev", "block", "filesystems"]);
        assert_eq!(line.span, 0..35);
    }

    #[test]
    fn test_find_skips_commented_line() {
        let contents = "# HOOKS=(old list)\nHOOKS=(base block)\n";
        let line = HooksLine::find(contents).unwrap();
        assert_eq!(line.hooks, vec!["base", "block"]);
        assert_eq!(&contents[line.span.clone()], "HOOKS=(base block)");
    }

    #[test]
    fn test_find_none_when_absent() {
        assert!(HooksLine::find("MODULES=()\nBINARIES=()\n").is_none());
        // An indented line is not a top-level HOOKS line.
        assert!(HooksLine::find("  HOOKS=(base block)\n").is_none());
    }

    #[test]
    fn test_find_first_match_wins() {
        let contents = "HOOKS=(one)\nHOOKS=(two)\n";
        let line = HooksLine::find(contents).unwrap();
        assert_eq!(line.hooks, vec!["one"]);
    }

    #[test]
    fn test_render_normalizes_spacing() {
        let contents = "HOOKS=(base   udev  block)\n";
        let line = HooksLine::find(contents).unwrap();
        assert_eq!(line.render(), "HOOKS=(base udev block)");
    }

    #[test]
    fn test_splice_preserves_surroundings() {
        let contents = "# comment\nMODULES=()\nHOOKS=(base block)\n# trailing\n";
        let mut line = HooksLine::find(contents).unwrap();
        line.hooks.insert(2, "lvm2".to_owned());

        let out = line.splice(contents);
        assert_eq!(out, "# comment\nMODULES=()\nHOOKS=(base block lvm2)\n# trailing\n");
    }

    #[test]
    fn test_splice_without_trailing_newline() {
        let contents = "HOOKS=(base block)";
        let line = HooksLine::find(contents).unwrap();
        assert_eq!(line.splice(contents), "HOOKS=(base block)");
    }

    #[test]
    fn test_position_and_contains() {
        let line = HooksLine::find("HOOKS=(base block filesystems)\n").unwrap();
        assert_eq!(line.position("block"), Some(1));
        assert!(line.contains("filesystems"));
        assert!(!line.contains("lvm2"));
    }
}
