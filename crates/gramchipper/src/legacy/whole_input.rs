//! # Whole Input Reads

use std::io;

use crate::source::{CharSource, read_fully};

/// The read cap of the legacy engines, in UTF-16 units.
pub const LEGACY_READ_LIMIT: usize = 1024;

/// A trimmed prefix of the input, and the number of units it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WholeInput {
    /// The trimmed units.
    pub units: Vec<u16>,

    /// Every unit read from the source, including drained ones.
    pub units_read: usize,
}

impl WholeInput {
    /// Read up to `limit` units, trim them, then drain and count the rest.
    ///
    /// Storage grows with the units actually read, not with `limit`.
    pub fn read<S: CharSource + ?Sized>(
        source: &mut S,
        limit: usize,
    ) -> io::Result<Self> {
        let mut units = Vec::with_capacity(limit.min(LEGACY_READ_LIMIT));
        let mut chunk = [0u16; LEGACY_READ_LIMIT];
        loop {
            let want = (limit - units.len()).min(LEGACY_READ_LIMIT);
            if want == 0 {
                break;
            }
            let n = read_fully(source, &mut chunk[..want])?;
            units.extend_from_slice(&chunk[..n]);
            if n < want {
                break;
            }
        }

        let mut units_read = units.len();
        if units_read == limit {
            loop {
                let n = read_fully(source, &mut chunk)?;
                if n == 0 {
                    break;
                }
                units_read += n;
            }
            log::debug!("legacy read: dropped {} units past the cap", units_read - limit);
        }

        let range = trim_range(&units);
        units.truncate(range.end);
        units.drain(..range.start);

        Ok(Self { units, units_read })
    }

    /// Number of trimmed units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Is the trimmed input empty?
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units in `start..end`, as text.
    ///
    /// A surrogate split by the range renders as `U+FFFD`.
    pub fn text(
        &self,
        start: usize,
        end: usize,
    ) -> String {
        String::from_utf16_lossy(&self.units[start..end])
    }
}

/// The range left after removing leading and trailing units `<= U+0020`.
fn trim_range(units: &[u16]) -> core::ops::Range<usize> {
    let start = units
        .iter()
        .position(|&u| u > 0x20)
        .unwrap_or(units.len());
    let end = units
        .iter()
        .rposition(|&u| u > 0x20)
        .map_or(start, |i| i + 1);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Utf16Source;

    #[test]
    fn test_trim_range() {
        let units: Vec<u16> = " \t ab c\n".encode_utf16().collect();
        assert_eq!(trim_range(&units), 3..7);
        assert_eq!(trim_range(&[0x20, 0x0A]), 2..2);
        assert_eq!(trim_range(&[]), 0..0);
    }

    #[test]
    fn test_read_and_drain() {
        let mut source = Utf16Source::from("  abcdef");
        let input = WholeInput::read(&mut source, 5).unwrap();
        assert_eq!(input.text(0, input.len()), "abc");
        assert_eq!(input.units_read, 8);

        let mut source = Utf16Source::from(" ab ");
        let input = WholeInput::read(&mut source, 1024).unwrap();
        assert_eq!(input.text(0, input.len()), "ab");
        assert_eq!(input.units_read, 4);
    }

    #[test]
    fn test_unbounded_limit_allocates_by_input() {
        let mut source = Utf16Source::from(" ab ");
        let input = WholeInput::read(&mut source, usize::MAX).unwrap();
        assert_eq!(input.text(0, input.len()), "ab");
        assert_eq!(input.units_read, 4);
        assert!(input.units.capacity() <= LEGACY_READ_LIMIT);

        let text = "x".repeat(3 * LEGACY_READ_LIMIT + 5);
        let mut source = Utf16Source::from(text.as_str());
        let input = WholeInput::read(&mut source, 2 * LEGACY_READ_LIMIT + 1).unwrap();
        assert_eq!(input.len(), 2 * LEGACY_READ_LIMIT + 1);
        assert_eq!(input.units_read, text.len());
    }
}
