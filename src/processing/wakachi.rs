//! Wakachi-gaki generation
//!
//! For each sub folder `XX` of the corpus root, every `wiki*` file is
//! 1. read as a whole,
//! 1. stripped of its `<doc ...>`/`</doc>` tags,
//! 1. split in lines, empty ones being skipped,
//! 1. tokenized line by line, each line being written in `<output_dir>/full_ja_XX.wakachi`.
//!
//! A tokenizer failure (error or panic) on any line skips the rest of the file:
//! lines already written for that file are kept, and processing goes on with the next file.
//! Filesystem errors are not recovered.
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::corpus;
use crate::error::Error;
use crate::io::WakachiWriter;
use crate::markup::{content_lines, strip_doc_tags, unify_newlines};
use crate::tokenizers::Tokenizer;

use super::{Config, Pipeline};

/// Counters of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub folders: usize,
    pub files: usize,
    /// files abandoned on a tokenizer failure
    pub skipped: Vec<PathBuf>,
    pub lines: u64,
}

/// Marker line printed for a file abandoned on a tokenizer failure.
fn skip_diagnostic(path: &Path) -> String {
    format!("!!! Tokenizer failed. Skipped: {}", path.display())
}

/// What happened to a single input file.
#[derive(Debug)]
enum FileOutcome {
    Done { lines: u64 },
    Skipped { lines: u64, error: Error },
}

pub struct Wakachi<T: Tokenizer> {
    config: Config,
    tokenizer: T,
}

impl<T: Tokenizer> Wakachi<T> {
    pub fn new(config: Config, tokenizer: T) -> Self {
        Self { config, tokenizer }
    }

    /// Explicit sub folders, or every two-character sub folder of the root if none were given.
    fn sub_folders(&self) -> Result<Vec<String>, Error> {
        if self.config.sub_folders().is_empty() {
            let folders = corpus::discover_sub_folders(self.config.root())?;
            info!("discovered {} sub folders", folders.len());
            debug!("sub folders: {:?}", folders);
            Ok(folders)
        } else {
            Ok(self.config.sub_folders().to_vec())
        }
    }

    /// Tokenize a line, turning panics into [Error::Tokenize].
    fn tokenize_line(&self, line: &str) -> Result<Vec<String>, Error> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.tokenizer.tokenize(line))) {
            Ok(result) => result,
            Err(payload) => {
                let msg = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "tokenizer panicked".to_string());
                Err(Error::Tokenize(msg))
            }
        }
    }

    /// Tokenize `text` into `writer`, stopping at the first tokenizer failure.
    fn tokenize_text<W: Write>(
        &self,
        text: &str,
        writer: &mut WakachiWriter<W>,
    ) -> Result<FileOutcome, Error> {
        let mut lines = 0;
        for line in content_lines(text) {
            let tokens = match self.tokenize_line(line) {
                Ok(tokens) => tokens,
                Err(error) => return Ok(FileOutcome::Skipped { lines, error }),
            };
            writer.write_tokens(&tokens)?;
            lines += 1;
        }
        Ok(FileOutcome::Done { lines })
    }

    fn process_file<W: Write>(
        &self,
        path: &Path,
        writer: &mut WakachiWriter<W>,
    ) -> Result<FileOutcome, Error> {
        println!("Processing {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let text = unify_newlines(&text);
        let text = strip_doc_tags(&text);
        self.tokenize_text(&text, writer)
    }

    fn process_folder(&self, folder_id: &str, summary: &mut Summary) -> Result<(), Error> {
        let folder = self.config.root().join(folder_id);
        info!("[{}] processing {:?}", folder_id, folder);

        let mut writer = WakachiWriter::create(&self.config.output_file(folder_id))?;
        for path in corpus::input_files(&folder)? {
            summary.files += 1;
            match self.process_file(&path, &mut writer)? {
                FileOutcome::Done { lines } => {
                    debug!("[{}] {:?}: {} lines", folder_id, path, lines);
                    summary.lines += lines;
                }
                FileOutcome::Skipped { lines, error } => {
                    warn!(
                        "[{}] {:?}: {} (skipped after {} lines)",
                        folder_id, path, error, lines
                    );
                    println!("{}", skip_diagnostic(&path));
                    summary.skipped.push(path);
                    summary.lines += lines;
                }
            }
        }
        writer.finish()?;

        summary.folders += 1;
        info!("[{}] done", folder_id);
        Ok(())
    }
}

impl<T: Tokenizer> Pipeline<Summary> for Wakachi<T> {
    fn run(&self) -> Result<Summary, Error> {
        let sub_folders = self.sub_folders()?;

        let output_dir = self.config.output_dir();
        std::fs::create_dir_all(&output_dir)?;
        println!("Output to {}", output_dir.display());

        let mut summary = Summary::default();
        for folder_id in &sub_folders {
            self.process_folder(folder_id, &mut summary)?;
        }

        debug!("{:?}", summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// one token per char, fails on lines containing `!fail`
    struct Chars;

    impl Tokenizer for Chars {
        fn tokenize(&self, line: &str) -> Result<Vec<String>, Error> {
            if line.contains("!fail") {
                return Err(Error::Tokenize(format!("cannot tokenize {:?}", line)));
            }
            Ok(line.chars().map(String::from).collect())
        }
    }

    struct Panicking;

    impl Tokenizer for Panicking {
        fn tokenize(&self, _line: &str) -> Result<Vec<String>, Error> {
            panic!("lattice exploded");
        }
    }

    fn wakachi<T: Tokenizer>(tokenizer: T) -> Wakachi<T> {
        Wakachi::new(Config::new(PathBuf::from("."), false, Vec::new()), tokenizer)
    }

    fn tokenize_to_string<T: Tokenizer>(w: &Wakachi<T>, text: &str) -> (FileOutcome, String) {
        let mut writer = WakachiWriter::new(PathBuf::from("mem"), Vec::new());
        let outcome = w.tokenize_text(text, &mut writer).unwrap();
        let out = String::from_utf8(writer.finish().unwrap()).unwrap();
        (outcome, out)
    }

    #[test]
    fn empty_lines_are_skipped() {
        let (outcome, out) = tokenize_to_string(&wakachi(Chars), "ab\n\ncd\n");
        assert!(matches!(outcome, FileOutcome::Done { lines: 2 }));
        assert_eq!(out, "a b\nc d\n");
    }

    #[test]
    fn failure_keeps_previous_lines() {
        let (outcome, out) = tokenize_to_string(&wakachi(Chars), "ab\n!fail\ncd\n");
        match outcome {
            FileOutcome::Skipped { lines, error } => {
                assert_eq!(lines, 1);
                assert!(matches!(error, Error::Tokenize(_)));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(out, "a b\n");
    }

    #[test]
    fn panics_are_failures() {
        let w = wakachi(Panicking);
        match w.tokenize_line("foo") {
            Err(Error::Tokenize(msg)) => assert_eq!(msg, "lattice exploded"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn skip_diagnostic_names_file() {
        let path = Path::new("wiki/AA/wiki_03");
        assert_eq!(
            skip_diagnostic(path),
            "!!! Tokenizer failed. Skipped: wiki/AA/wiki_03"
        );
    }

    #[test]
    fn explicit_sub_folders_are_kept_in_order() {
        let config = Config::new(
            PathBuf::from("does/not/exist"),
            false,
            vec!["AC".to_string(), "AA".to_string()],
        );
        let w = Wakachi::new(config, Chars);
        assert_eq!(
            w.sub_folders().unwrap(),
            vec!["AC".to_string(), "AA".to_string()]
        );
    }
}
