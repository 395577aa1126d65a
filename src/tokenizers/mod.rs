/*! Tokenizers

All tokenizers should implement [Tokenizer] to be useable by [crate::processing::Wakachi].

[VibratoTokenizer] is the morphological analyzer used by the `wakachi` binary.
!*/
mod normalize;
mod vibrato;

use crate::error::Error;

pub use self::normalize::normalize;
pub use self::vibrato::{analyzer, load_analyzer, VibratoTokenizer};

pub trait Tokenizer {
    /// Split `line` into an ordered sequence of tokens.
    fn tokenize(&self, line: &str) -> Result<Vec<String>, Error>;
}
