//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use wakachi::processing::Config;

#[derive(Debug, StructOpt)]
#[structopt(name = "wakachi", about = "Wikipedia tokenizer")]
/// Tokenize wikiextractor outputs into wakachi-gaki text.
///
/// ```sh
/// wakachi 0.1.0
/// Wikipedia tokenizer
///
/// USAGE:
///     wakachi [FLAGS] [OPTIONS] [sub-folders]...
///
/// FLAGS:
///     -h, --help       Prints help information
///     -n, --norm       Normalize words if set, default is False.
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -d, --dict <dict>    Path to the tokenizer system dictionary [env: WAKACHI_DICT=]  [default: system.dic.zst]
///     -p, --path <path>    Full pathname for full wikiextractor outputs, and will also output tokened data there.
///                          [default: dataset/nlp/wikipedia]
///
/// ARGS:
///     <sub-folders>...    Sub folders to process (ex. AA AB ...), blank will process all sub folders.
/// ```
pub struct Wakachi {
    #[structopt(
        parse(from_os_str),
        short = "p",
        long = "path",
        default_value = "dataset/nlp/wikipedia",
        help = "Full pathname for full wikiextractor outputs, and will also output tokened data there."
    )]
    pub path: PathBuf,
    #[structopt(
        short = "n",
        long = "norm",
        help = "Normalize words if set, default is False."
    )]
    pub norm: bool,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dict",
        env = "WAKACHI_DICT",
        default_value = "system.dic.zst",
        help = "Path to the tokenizer system dictionary"
    )]
    pub dict: PathBuf,
    #[structopt(
        help = "Sub folders to process (ex. AA AB ...), blank will process all sub folders."
    )]
    pub sub_folders: Vec<String>,
}

impl From<Wakachi> for Config {
    fn from(args: Wakachi) -> Self {
        Config::new(args.path, args.norm, args.sub_folders)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use structopt::StructOpt;

    use super::Wakachi;
    use wakachi::processing::Config;

    #[test]
    fn defaults() {
        let args = Wakachi::from_iter_safe(vec!["wakachi"]).unwrap();
        assert_eq!(args.path, Path::new("dataset/nlp/wikipedia"));
        assert!(!args.norm);
        assert!(args.sub_folders.is_empty());
    }

    #[test]
    fn short_flags_and_folders() {
        let args =
            Wakachi::from_iter_safe(vec!["wakachi", "-p", "wiki", "-n", "AA", "AB"]).unwrap();
        let config = Config::from(args);
        assert_eq!(config.root(), Path::new("wiki"));
        assert!(config.normalize());
        assert_eq!(config.sub_folders(), &["AA".to_string(), "AB".to_string()]);
    }
}
