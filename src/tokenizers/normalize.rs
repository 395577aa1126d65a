//! Text normalization applied before tokenization when `--norm` is set.
//!
//! Follows the mecab-ipadic-NEologd normalization rules:
//! - NFKC (full width alphanumerics become half width, half width katakana become full width)
//! - hyphen and minus variants become `-`
//! - prolonged sound mark variants become `ー`, and repeated ones are squashed
//! - tildes are removed
//! - spaces are squashed, and removed when between two Japanese characters
//!   or between a Japanese character and a latin one.
use unicode_normalization::UnicodeNormalization;

const HYPHENS: &[char] = &[
    '\u{02D7}', '\u{058A}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2043}', '\u{207B}',
    '\u{208B}', '\u{2212}',
];
const CHOONPUS: &[char] = &['\u{2014}', '\u{2015}', '\u{2500}', '\u{2501}', '\u{30FC}'];
const TILDES: &[char] = &['~', '\u{223C}', '\u{223E}', '\u{301C}', '\u{3030}', '\u{FF5E}'];

/// CJK ideographs, kana, CJK punctuation and full width forms.
fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3040}'..='\u{309F}'
        | '\u{30A0}'..='\u{30FF}'
        | '\u{3000}'..='\u{303F}'
        | '\u{FF00}'..='\u{FFEF}')
}

/// chars whose runs are squashed into one
fn squashes(c: char) -> bool {
    matches!(c, '-' | 'ー' | ' ')
}

/// Normalize `text`. Idempotent.
pub fn normalize(text: &str) -> String {
    let mut squashed: Vec<char> = Vec::with_capacity(text.len());
    for c in text.nfkc() {
        let c = if HYPHENS.contains(&c) {
            '-'
        } else if CHOONPUS.contains(&c) {
            'ー'
        } else if c.is_whitespace() {
            ' '
        } else if TILDES.contains(&c) {
            continue;
        } else {
            c
        };

        if squashes(c) && squashed.last() == Some(&c) {
            continue;
        }
        squashed.push(c);
    }

    let mut out = String::with_capacity(text.len());
    for (idx, &c) in squashed.iter().enumerate() {
        if c == ' ' {
            let prev = idx.checked_sub(1).and_then(|i| squashed.get(i));
            let next = squashed.get(idx + 1);
            match (prev, next) {
                // leading/trailing
                (None, _) | (_, None) => continue,
                (Some(&p), Some(&n)) => {
                    let removable = (is_japanese(p) && (is_japanese(n) || n.is_ascii()))
                        || (p.is_ascii() && is_japanese(n));
                    if removable {
                        continue;
                    }
                }
            }
        }
        // removing a space can make two squashable chars adjacent
        if squashes(c) && out.ends_with(c) {
            continue;
        }
        out.push(c);
    }
    // dropped tildes and spaces can leave a combining mark right after its base
    out.nfkc().collect()
}
