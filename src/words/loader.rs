//! Word list loading utilities
//!
//! Reads newline-delimited word sources from disk and turns them into a
//! `WordBank`, applying the degraded fallback when the source is unusable.

use super::WordBank;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word bank from a file, falling back if the content is unusable
///
/// Invalid lines are skipped; a file with no valid words at all produces
/// the degraded fallback bank rather than an error. Only I/O failures
/// propagate.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordplay::words::loader::load_from_file;
///
/// let bank = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let content = fs::read_to_string(path)?;
    Ok(WordBank::parse_or_fallback(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nbogus!").unwrap();

        let bank = load_from_file(file.path()).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(!bank.is_degraded());
    }

    #[test]
    fn load_from_file_falls_back_on_unusable_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not a word list").unwrap();

        let bank = load_from_file(file.path()).unwrap();
        assert!(bank.is_degraded());
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn load_from_file_missing_path_is_io_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
