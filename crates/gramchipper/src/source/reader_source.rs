//! # UTF-8 Reader Source

use std::io::{self, Read};

use crate::source::CharSource;

const BYTE_CHUNK: usize = 4096;

/// A [`CharSource`] over a UTF-8 byte stream.
///
/// Bytes are decoded incrementally; a multibyte sequence split across
/// reads is carried to the next read. Invalid sequences decode to
/// `U+FFFD`, as does a truncated sequence at end of stream.
pub struct ReaderSource<R: Read + Send> {
    reader: R,
    bytes: Vec<u8>,
    units: Vec<u16>,
    unit_pos: usize,
    eof: bool,
}

impl<R: Read + Send> ReaderSource<R> {
    /// Wrap a byte reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: Vec::with_capacity(BYTE_CHUNK),
            units: Vec::with_capacity(BYTE_CHUNK),
            unit_pos: 0,
            eof: false,
        }
    }

    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decode the largest valid prefix of the carried bytes into `units`.
    fn decode_pending(&mut self) {
        let mut consumed = 0;
        loop {
            let rest = &self.bytes[consumed..];
            if rest.is_empty() {
                break;
            }
            match std::str::from_utf8(rest) {
                Ok(s) => {
                    self.units.extend(s.encode_utf16());
                    consumed = self.bytes.len();
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    if let Ok(s) = std::str::from_utf8(&rest[..valid]) {
                        self.units.extend(s.encode_utf16());
                    }
                    consumed += valid;
                    match e.error_len() {
                        Some(n) => {
                            log::trace!("replacing {n} invalid utf-8 byte(s)");
                            self.units.push(char::REPLACEMENT_CHARACTER as u16);
                            consumed += n;
                        }
                        None if self.eof => {
                            log::trace!("replacing truncated utf-8 sequence at end of stream");
                            self.units.push(char::REPLACEMENT_CHARACTER as u16);
                            consumed = self.bytes.len();
                        }
                        None => break,
                    }
                }
            }
        }
        self.bytes.drain(..consumed);
    }

    /// Refill `units`; returns `false` at end of stream.
    fn refill(&mut self) -> io::Result<bool> {
        self.units.clear();
        self.unit_pos = 0;

        while self.units.is_empty() {
            if self.eof {
                return Ok(false);
            }
            let mut chunk = [0u8; BYTE_CHUNK];
            let n = match self.reader.read(&mut chunk) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if n == 0 {
                self.eof = true;
            } else {
                self.bytes.extend_from_slice(&chunk[..n]);
            }
            self.decode_pending();
        }
        Ok(true)
    }
}

impl<R: Read + Send> CharSource for ReaderSource<R> {
    fn read_chars(
        &mut self,
        buf: &mut [u16],
    ) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.unit_pos == self.units.len() && !self.refill()? {
            return Ok(0);
        }
        let n = buf.len().min(self.units.len() - self.unit_pos);
        buf[..n].copy_from_slice(&self.units[self.unit_pos..self.unit_pos + n]);
        self.unit_pos += n;
        Ok(n)
    }
}
