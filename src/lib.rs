//! # wakachi
//!
//! Turns [wikiextractor](https://github.com/attardi/wikiextractor) outputs
//! of the Japanese Wikipedia into wakachi-gaki text: one line per paragraph,
//! tokens separated by a single space.
//!
//! The crate can be used as a tool (see the `wakachi` binary) or as a lib,
//! plugging any [tokenizers::Tokenizer] into [processing::Wakachi].
pub mod corpus;
pub mod error;
pub mod io;
pub mod markup;
pub mod processing;
pub mod tokenizers;
