//! # wakachi
//!
//! Converts [wikiextractor](https://github.com/attardi/wikiextractor) outputs into tokenized (wakachi-gaki) text.
//!
//! ## Usage
//!
//! ```sh
//! $ cd dataset/nlp/wikipedia
//! $ wakachi --path . --norm --dict /path/to/system.dic.zst `find . -name '??' -printf '%f '`
//! ```
//!
//! ## Expected files before processing
//!
//! ```sh
//! $ ls dataset/nlp/wikipedia/
//! AA  AC  AE  AG  AI  AK  AM  AO  AQ  AS  AU  AW  AY  BA
//! AB  AD  AF  AH  AJ  AL  AN  AP  AR  AT  AV  AX  AZ
//! ```
//!
//! ## Expected files after processing
//!
//! If normalized, files are created under the `norm` folder,
//! otherwise they are stored under the `asis` folder.
//!
//! ```sh
//! $ ls dataset/nlp/wikipedia/norm
//! full_ja_AA.wakachi  full_ja_AB.wakachi  full_ja_AC.wakachi
//! full_ja_AD.wakachi  full_ja_AE.wakachi  full_ja_AF.wakachi
//! ...
//! ```
use structopt::StructOpt;

use wakachi::error::Error;
use wakachi::processing::{Config, Pipeline, Wakachi};
use wakachi::tokenizers::{load_analyzer, VibratoTokenizer};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Wakachi::from_args();
    debug!("cli args\n{:#?}", opt);

    let analyzer = load_analyzer(&opt.dict)?;
    let tokenizer = VibratoTokenizer::new(&analyzer, opt.norm);
    let config = Config::from(opt);

    Wakachi::new(config, tokenizer).run()?;
    Ok(())
}
