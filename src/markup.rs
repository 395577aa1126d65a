//! Removal of the `<doc ...>`/`</doc>` wrapper that wikiextractor puts around articles.
//!
//! ```text
//! <doc id="5" url="https://ja.wikipedia.org/wiki?curid=5" title="アンパサンド">
//! アンパサンド
//!
//! アンパサンド（&、英語: ampersand）は...
//! </doc>
//! ```
//!
//! becomes
//!
//! ```text
//! アンパサンド
//!
//! アンパサンド（&、英語: ampersand）は...
//! ```
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DOC_BEGIN: Regex = Regex::new(r"<doc[^>]*>\n").unwrap();
    static ref DOC_END: Regex = Regex::new(r"</doc>\n").unwrap();
    static ref NEWLINE: Regex = Regex::new(r"\r\n?").unwrap();
}

/// Turn `\r\n` and lone `\r` line endings into `\n`.
pub fn unify_newlines(text: &str) -> Cow<'_, str> {
    NEWLINE.replace_all(text, "\n")
}

/// Remove every opening and closing document tag (with their trailing newline).
///
/// Removing a tag can glue its surroundings into a new one (`<do</doc>\nc>\n`),
/// so substitutions are repeated until none applies.
pub fn strip_doc_tags(text: &str) -> Cow<'_, str> {
    let mut stripped = Cow::Borrowed(text);
    loop {
        let next = {
            let begin = DOC_BEGIN.replace_all(&stripped, "");
            let end = DOC_END.replace_all(&begin, "");
            match (&begin, end) {
                (Cow::Borrowed(_), Cow::Borrowed(_)) => None,
                (_, end) => Some(end.into_owned()),
            }
        };
        match next {
            Some(next) => stripped = Cow::Owned(next),
            None => return stripped,
        }
    }
}

/// Newline separated lines of `text`, empty ones left out.
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_doc() {
        let text = "<doc id=\"1\">\nこれはテストです。\n</doc>\n";
        assert_eq!(strip_doc_tags(text), "これはテストです。\n");
    }

    #[test]
    fn strip_bare_doc() {
        assert_eq!(strip_doc_tags("<doc>\n</doc>\n"), "");
    }

    #[test]
    fn strip_every_occurrence() {
        let text = r#"<doc id="1" url="https://ja.wikipedia.org/wiki?curid=1" title="a">
一つ目
</doc>
<doc id="2" url="https://ja.wikipedia.org/wiki?curid=2" title="b">
二つ目

三つ目
</doc>
"#;
        let stripped = strip_doc_tags(text);
        assert_eq!(stripped, "一つ目\n二つ目\n\n三つ目\n");
        assert!(!stripped.contains("<doc"));
        assert!(!stripped.contains("</doc>"));
    }

    #[test]
    fn strip_is_idempotent() {
        let text = "<do</doc>\nc>\nbody\n";
        let once = strip_doc_tags(text).into_owned();
        assert_eq!(once, "body\n");
        assert_eq!(strip_doc_tags(&once), once);
    }

    #[test]
    fn strip_nested_closing_tags() {
        assert_eq!(strip_doc_tags("</do</doc>\nc>\nfoo\n"), "foo\n");
    }

    #[test]
    fn crlf_newlines() {
        let text = "<doc id=\"1\">\r\nbody\r\n</doc>\r\nold\rmac\n";
        let unified = unify_newlines(text);
        assert_eq!(unified, "<doc id=\"1\">\nbody\n</doc>\nold\nmac\n");
        assert_eq!(strip_doc_tags(&unified), "body\nold\nmac\n");
    }

    #[test]
    fn lf_newlines_are_borrowed() {
        assert!(matches!(unify_newlines("foo\nbar\n"), Cow::Borrowed(_)));
    }

    #[test]
    fn no_markup_is_borrowed() {
        let text = "foo\nbar\n";
        assert!(matches!(strip_doc_tags(text), Cow::Borrowed(_)));
    }

    #[test]
    fn closing_tag_without_newline_is_kept() {
        assert_eq!(strip_doc_tags("foo</doc>"), "foo</doc>");
    }

    #[test]
    fn empty_lines_are_skipped() {
        let lines: Vec<&str> = content_lines("foo\n\nbar\n\n\n").collect();
        assert_eq!(lines, vec!["foo", "bar"]);
    }

    #[test]
    fn whitespace_lines_are_kept() {
        let lines: Vec<&str> = content_lines(" \nfoo").collect();
        assert_eq!(lines, vec![" ", "foo"]);
    }
}
