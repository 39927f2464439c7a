//! Loading and saving rings as decimal text files
//!
//! The first line of a file holds the number in decimal. Parse failures
//! are reported as `io::ErrorKind::InvalidData`.
//!

use crate::*;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;


impl DigitRing {
    /// Load decimal number from the first line of a file into a ring of
    /// [`DEFAULT_BASE`] digits
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<DigitRing> {
        DigitRing::load_with_base(path, DEFAULT_BASE)
    }

    /// Load decimal number from the first line of a file into a ring of
    /// `base` digits
    pub fn load_with_base<P: AsRef<Path>>(path: P, base: u32) -> io::Result<DigitRing> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut line = String::new();
        reader.read_line(&mut line)?;

        DigitRing::from_decimal_str(&line, base)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Write the ring's value in decimal to a file, replacing its contents
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.to_decimal_string())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        let ring = DigitRing::from_digits(3, [1, 0, 0]).unwrap();
        ring.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "9");

        let loaded = DigitRing::load_with_base(&path, 3).unwrap();
        assert_eq!(loaded, ring);

        let octal = DigitRing::load_with_base(&path, 8).unwrap();
        assert_eq!(octal.to_vec(), vec![1, 1]);
    }

    #[test]
    fn load_reads_only_first_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        fs::write(&path, "  26\nignored\n").unwrap();

        let loaded = DigitRing::load(&path).unwrap();
        assert_eq!(loaded.base(), DEFAULT_BASE);
        assert_eq!(loaded.to_decimal_string(), "26");
    }

    #[test]
    fn save_empty_ring_writes_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        DigitRing::new(3).unwrap().save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "0");
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        fs::write(&path, "123456789\n").unwrap();

        DigitRing::from_u64(5, 10).unwrap().save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "5");
    }

    #[test]
    fn load_invalid_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        fs::write(&path, "-5\n").unwrap();

        let err = DigitRing::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(err.to_string(), "Number must not be negative");
    }

    #[test]
    fn load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        fs::write(&path, "").unwrap();

        let err = DigitRing::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.txt");
        let err = DigitRing::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
