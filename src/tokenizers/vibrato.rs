//! MeCab compatible morphological analysis, backed by [vibrato].
use std::borrow::Cow;
use std::cell::RefCell;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use vibrato::tokenizer::worker::Worker;
use vibrato::Dictionary;

use super::{normalize, Tokenizer};
use crate::error::Error;

/// Build the analyzer shared by [VibratoTokenizer]s.
///
/// Fails if the dictionary does not define the `SPACE` character category.
pub fn analyzer(dict: Dictionary) -> Result<vibrato::Tokenizer, Error> {
    Ok(vibrato::Tokenizer::new(dict).ignore_space(true)?)
}

/// Load a compiled system dictionary (`system.dic`) and build its analyzer.
/// Dictionaries ending in `.zst` are decompressed on the fly.
pub fn load_analyzer(path: &Path) -> Result<vibrato::Tokenizer, Error> {
    info!("loading dictionary {:?}", path);
    let file = File::open(path)?;
    let dict = if path.extension().map_or(false, |ext| ext == "zst") {
        Dictionary::read(zstd::stream::read::Decoder::new(file)?)?
    } else {
        Dictionary::read(BufReader::new(file))?
    };
    debug!("dictionary {:?} loaded", path);

    analyzer(dict)
}

/// Surface-form tokenizer.
///
/// When `normalize` is set, lines are normalized (see [normalize()]) before being analyzed.
/// Spaces are never emitted as tokens.
///
/// The lattice worker is allocated once and reused for every line.
pub struct VibratoTokenizer<'a> {
    worker: RefCell<Worker<'a>>,
    normalize: bool,
}

impl<'a> VibratoTokenizer<'a> {
    pub fn new(analyzer: &'a vibrato::Tokenizer, normalize: bool) -> Self {
        Self {
            worker: RefCell::new(analyzer.new_worker()),
            normalize,
        }
    }

    fn analyze(&self, line: &str) -> Vec<String> {
        let mut worker = self.worker.borrow_mut();
        worker.reset_sentence(line);
        worker.tokenize();
        worker
            .token_iter()
            .map(|token| token.surface().to_string())
            .filter(|surface| !surface.trim().is_empty())
            .collect()
    }
}

impl Tokenizer for VibratoTokenizer<'_> {
    fn tokenize(&self, line: &str) -> Result<Vec<String>, Error> {
        let line = if self.normalize {
            Cow::Owned(normalize(line))
        } else {
            Cow::Borrowed(line)
        };

        Ok(self.analyze(&line))
    }
}
