/*! Corpus layout

wikiextractor writes its output as
```text
<root>/AA/wiki_00
<root>/AA/wiki_01
...
<root>/AB/wiki_00
...
```
Sub folders are named with two characters, input files start with `wiki`.
!*/
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::{debug, warn};

use crate::error::Error;

const SUB_FOLDER_PATTERN: &str = "??";
const INPUT_FILE_PATTERN: &str = "wiki*";

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    }
}

/// Glob `pattern` inside `dir`, escaping `dir` so that only `pattern` is interpreted.
fn glob_in(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, Error> {
    let dir = dir
        .to_str()
        .ok_or_else(|| format!("non UTF-8 path: {:?}", dir))?;
    let full_pattern = format!("{}/{}", Pattern::escape(dir), pattern);
    debug!("globbing {}", full_pattern);

    let mut paths = Vec::new();
    for path in glob::glob_with(&full_pattern, match_options())? {
        paths.push(path?);
    }
    Ok(paths)
}

/// Names of the two-character sub folders of `root`, sorted.
///
/// Files with two-character names are ignored.
/// Fails if `root` is not a readable directory.
pub fn discover_sub_folders(root: &Path) -> Result<Vec<String>, Error> {
    if !std::fs::metadata(root)?.is_dir() {
        return Err(Error::Custom(format!("{:?} is not a directory", root)));
    }

    let mut folders: Vec<String> = glob_in(root, SUB_FOLDER_PATTERN)?
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
        })
        .collect();
    folders.sort();
    Ok(folders)
}

/// Files of `folder` whose name starts with `wiki`.
///
/// The order is the one of the underlying directory walk and should not be relied upon.
/// A missing folder yields no files.
pub fn input_files(folder: &Path) -> Result<Vec<PathBuf>, Error> {
    if !folder.exists() {
        warn!("sub folder {:?} does not exist", folder);
        return Ok(Vec::new());
    }

    Ok(glob_in(folder, INPUT_FILE_PATTERN)?
        .into_iter()
        .filter(|path| path.is_file())
        .collect())
}
