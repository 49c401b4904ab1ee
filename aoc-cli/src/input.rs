//! Local store of puzzle inputs

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(format!("day{day:02}.txt"))
    }

    /// Read the whole input, or None if there is no file for the day
    ///
    /// Windows line endings are normalised; leading whitespace is kept since
    /// some puzzles draw pictures with it.
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.input_path(year, day);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|source| InputError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Some(content.replace("\r\n", "\n")))
    }
}
