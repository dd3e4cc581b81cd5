use std::{collections::BTreeSet, fs, path::PathBuf};

use libautomata::{
    error::{AutomataError, Result},
    pattern::{Pattern, PatternSource},
};

/// A directory where every regular file is a pattern named after its file stem.
/// Each line of a file is a row of comma separated cell values (0, 1 or 2).
#[derive(Debug, Clone)]
pub struct CsvPatternDir {
    dir: PathBuf,
}

impl CsvPatternDir {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { dir: dir.into() }
    }

    fn pattern_files(&self) -> std::io::Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                files.push((stem.to_owned(), path));
            }
        }

        Ok(files)
    }
}

impl PatternSource for CsvPatternDir {
    fn list_patterns(&self) -> BTreeSet<String> {
        match self.pattern_files() {
            Ok(files) => files.into_iter().map(|(name, _)| name).collect(),
            Err(e) => {
                log::warn!("Couldn't list patterns in {}: {e}", self.dir.display());
                BTreeSet::new()
            }
        }
    }

    fn load_pattern(&self, name: &str) -> Result<Pattern> {
        let load_error = |reason: String| AutomataError::PatternLoad {
            name: name.to_owned(),
            reason,
        };

        let path = self
            .pattern_files()
            .map_err(|e| load_error(e.to_string()))?
            .into_iter()
            .find(|(stem, _)| stem == name)
            .map(|(_, path)| path)
            .ok_or_else(|| AutomataError::UnknownPattern(name.to_owned()))?;

        let content = fs::read_to_string(&path).map_err(|e| load_error(e.to_string()))?;
        log::info!("Loading pattern {name:?} from {}", path.display());

        parse_csv(name, &content)
    }
}

pub fn parse_csv(name: &str, content: &str) -> Result<Pattern> {
    let rows = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.split(',')
                .map(|value| {
                    value.trim().parse::<u8>().map_err(|_| AutomataError::PatternLoad {
                        name: name.to_owned(),
                        reason: format!("row {row} has non-numeric value {value:?}"),
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Pattern::from_rows(name, rows)
}
