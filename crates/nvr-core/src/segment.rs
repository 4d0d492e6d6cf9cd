//! Segment tokenizer for version and release labels.
//!
//! A label such as `1.10.2rc3` is read as the segments `1`, `10`, `2`,
//! `rc`, `3`. Anything that is neither an ASCII letter nor an ASCII digit
//! only separates segments and is never yielded, except `~`, which is
//! yielded as [`Segment::Tilde`] because it carries ordering meaning.

/// One comparable unit of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Maximal run of ASCII digits, leading zeros included.
    Numeric(&'a str),
    /// Maximal run of ASCII letters.
    Alpha(&'a str),
    /// Pre-release marker; sorts below everything, end of label included.
    Tilde,
}

/// Iterator over the [`Segment`]s of a label.
///
/// # Example
///
/// ```
/// use nvr_core::segment::{Segment, Segments};
///
/// let segments: Vec<_> = Segments::new("2.el6").collect();
/// assert_eq!(
///     segments,
///     [Segment::Numeric("2"), Segment::Alpha("el"), Segment::Numeric("6")]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Segments<'a> {
    /// Start tokenizing `label`.
    pub fn new(label: &'a str) -> Self {
        Self { rest: label }
    }
}

fn is_separator(c: char) -> bool {
    !c.is_ascii_alphanumeric() && c != '~'
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest = self.rest.trim_start_matches(is_separator);

        if let Some(rest) = self.rest.strip_prefix('~') {
            self.rest = rest;
            return Some(Segment::Tilde);
        }

        let numeric = self.rest.chars().next()?.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| {
                if numeric {
                    !c.is_ascii_digit()
                } else {
                    !c.is_ascii_alphabetic()
                }
            })
            .unwrap_or(self.rest.len());
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if numeric {
            Segment::Numeric(run)
        } else {
            Segment::Alpha(run)
        })
    }
}
