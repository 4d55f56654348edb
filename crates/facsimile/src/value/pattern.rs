//! Regular expression values

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::{FacsimileError, Result};

/// Flags accepted by a [`Pattern`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PatternFlags {
    /// `d`: report match indices
    pub has_indices: bool,
    /// `g`: search from the cursor and advance it
    pub global: bool,
    /// `i`: case-insensitive
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries
    pub multiline: bool,
    /// `s`: `.` matches newlines
    pub dot_all: bool,
    /// `u`: unicode mode (always on for matching)
    pub unicode: bool,
    /// `y`: match only at the cursor
    pub sticky: bool,
}

impl PatternFlags {
    /// Parse a flag string such as `"gi"`.
    ///
    /// Unknown or repeated flags are rejected.
    pub fn parse(flags: &str) -> Result<Self> {
        let mut parsed = Self::default();
        for c in flags.chars() {
            let slot = match c {
                'd' => &mut parsed.has_indices,
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multiline,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                _ => return Err(FacsimileError::InvalidFlags(flags.to_string())),
            };
            if *slot {
                return Err(FacsimileError::InvalidFlags(flags.to_string()));
            }
            *slot = true;
        }
        Ok(parsed)
    }

    /// Whether the pattern keeps a search cursor between calls
    pub fn uses_cursor(&self) -> bool {
        self.global || self.sticky
    }
}

impl fmt::Display for PatternFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = [
            (self.has_indices, 'd'),
            (self.global, 'g'),
            (self.ignore_case, 'i'),
            (self.multiline, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ];
        for (set, c) in pairs {
            if set {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset of the match start
    pub start: usize,
    /// Byte offset one past the match end
    pub end: usize,
    /// The matched text
    pub text: String,
}

/// A compiled regular expression plus its search cursor.
///
/// `last_index` is a byte offset into the haystack. It is read and
/// updated by [`Pattern::exec`] when the `g` or `y` flag is set.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: PatternFlags,
    regex: Regex,
    /// Search cursor
    pub last_index: usize,
}

impl Pattern {
    /// Compile a pattern from its text and flag string.
    pub fn new(source: &str, flags: &str) -> Result<Self> {
        let flags = PatternFlags::parse(flags)?;
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multiline)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|e| FacsimileError::InvalidPattern {
                pattern: source.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            source: source.to_string(),
            flags,
            regex,
            last_index: 0,
        })
    }

    /// A new pattern with the same text and flags and a reset cursor.
    ///
    /// Reuses the compiled program, so it cannot fail.
    pub fn rebuild(&self) -> Self {
        Self {
            source: self.source.clone(),
            flags: self.flags,
            regex: self.regex.clone(),
            last_index: 0,
        }
    }

    /// The pattern text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed flags
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Run the pattern against `haystack`.
    ///
    /// With `g` or `y` the search starts at `last_index`; a match moves
    /// the cursor to its end and a miss resets it to zero. `y` only
    /// accepts a match starting exactly at the cursor.
    pub fn exec(&mut self, haystack: &str) -> Option<PatternMatch> {
        let start = if self.flags.uses_cursor() {
            self.last_index
        } else {
            0
        };

        if start > haystack.len() || !haystack.is_char_boundary(start) {
            self.last_index = 0;
            return None;
        }

        let found = self
            .regex
            .find_at(haystack, start)
            .filter(|m| !self.flags.sticky || m.start() == start);

        match found {
            Some(m) => {
                if self.flags.uses_cursor() {
                    self.last_index = m.end();
                }
                Some(PatternMatch {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                })
            }
            None => {
                if self.flags.uses_cursor() {
                    self.last_index = 0;
                }
                None
            }
        }
    }

    /// Whether the pattern matches; advances the cursor like [`Pattern::exec`]
    pub fn test(&mut self, haystack: &str) -> bool {
        self.exec(haystack).is_some()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.flags == other.flags
            && self.last_index == other.last_index
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (last_index: {})", self, self.last_index)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.source.is_empty() {
            "(?:)"
        } else {
            &self.source
        };
        write!(f, "/{}/{}", source, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse_and_display() {
        let flags = PatternFlags::parse("yig").unwrap();
        assert!(flags.global && flags.ignore_case && flags.sticky);
        assert_eq!(flags.to_string(), "giy");
        assert!(PatternFlags::parse("gg").is_err());
        assert!(PatternFlags::parse("x").is_err());
    }

    #[test]
    fn test_invalid_source() {
        let err = Pattern::new("(", "").unwrap_err();
        assert!(matches!(err, FacsimileError::InvalidPattern { .. }));
    }

    #[test]
    fn test_global_advances_cursor() {
        let mut p = Pattern::new("o", "g").unwrap();
        assert_eq!(p.exec("foo").map(|m| m.start), Some(1));
        assert_eq!(p.last_index, 2);
        assert_eq!(p.exec("foo").map(|m| m.start), Some(2));
        assert!(p.exec("foo").is_none());
        assert_eq!(p.last_index, 0);
    }

    #[test]
    fn test_non_global_ignores_cursor() {
        let mut p = Pattern::new("o", "").unwrap();
        p.last_index = 2;
        assert_eq!(p.exec("foo").map(|m| m.start), Some(1));
        assert_eq!(p.last_index, 2);
    }

    #[test]
    fn test_sticky() {
        let mut p = Pattern::new("o", "y").unwrap();
        assert!(!p.test("foo"));
        p.last_index = 1;
        assert!(p.test("foo"));
        assert_eq!(p.last_index, 2);
    }

    #[test]
    fn test_case_insensitive() {
        let mut p = Pattern::new("ab+c", "i").unwrap();
        assert!(p.test("xABBC"));
    }

    #[test]
    fn test_rebuild_resets_cursor() {
        let mut p = Pattern::new("a", "g").unwrap();
        p.last_index = 3;
        let q = p.rebuild();
        assert_eq!(q.source(), "a");
        assert_eq!(q.flags(), p.flags());
        assert_eq!(q.last_index, 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pattern::new("ab+c", "gi").unwrap().to_string(), "/ab+c/gi");
        assert_eq!(Pattern::new("", "").unwrap().to_string(), "/(?:)/");
    }
}
