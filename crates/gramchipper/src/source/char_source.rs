//! # Character Sources

use std::io;

/// A sequential source of UTF-16 code units.
///
/// This is the only input contract of the tokenizers in this crate;
/// offsets reported by them are counted in these units.
pub trait CharSource: Send {
    /// Read up to `buf.len()` code units into `buf`.
    ///
    /// ## Returns
    /// The number of units written; `0` signals end of stream
    /// (for a non-empty `buf`).
    fn read_chars(
        &mut self,
        buf: &mut [u16],
    ) -> io::Result<usize>;
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read_chars(
        &mut self,
        buf: &mut [u16],
    ) -> io::Result<usize> {
        (**self).read_chars(buf)
    }
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_chars(
        &mut self,
        buf: &mut [u16],
    ) -> io::Result<usize> {
        (**self).read_chars(buf)
    }
}

/// An in-memory [`CharSource`] over UTF-16 code units.
///
/// Built from text (`&str`, `String`) or from raw units, which may
/// contain unpaired surrogates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utf16Source {
    units: Vec<u16>,
    pos: usize,
}

impl Utf16Source {
    /// Build a source over raw UTF-16 code units.
    pub fn from_units<U: Into<Vec<u16>>>(units: U) -> Self {
        Self {
            units: units.into(),
            pos: 0,
        }
    }

    /// Build a source over the UTF-16 encoding of `text`.
    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        Self::from_units(text.as_ref().encode_utf16().collect::<Vec<_>>())
    }

    /// The total number of units in the source.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Is the source empty?
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The number of units not yet read.
    pub fn remaining(&self) -> usize {
        self.units.len() - self.pos
    }
}

impl From<&str> for Utf16Source {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Utf16Source {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl CharSource for Utf16Source {
    fn read_chars(
        &mut self,
        buf: &mut [u16],
    ) -> io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.units[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Read from `source` until `buf` is full or the stream ends.
///
/// ## Returns
/// The number of units read; less than `buf.len()` only at end of stream.
pub fn read_fully<S: CharSource + ?Sized>(
    source: &mut S,
    buf: &mut [u16],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read_chars(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_source() {
        let mut source = Utf16Source::from("h\u{1F600}!");
        assert_eq!(source.len(), 4);
        assert!(!source.is_empty());

        let mut buf = [0u16; 3];
        assert_eq!(source.read_chars(&mut buf).unwrap(), 3);
        assert_eq!(buf, [b'h' as u16, 0xD83D, 0xDE00]);
        assert_eq!(source.remaining(), 1);

        assert_eq!(source.read_chars(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'!' as u16);
        assert_eq!(source.read_chars(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_read_fully_boxed() {
        let mut source: Box<dyn CharSource> = Box::new(Utf16Source::from("abcdef"));

        let mut buf = [0u16; 4];
        assert_eq!(read_fully(&mut source, &mut buf).unwrap(), 4);
        assert_eq!(read_fully(&mut source, &mut buf).unwrap(), 2);
        assert_eq!(read_fully(&mut source, &mut buf).unwrap(), 0);
    }
}
