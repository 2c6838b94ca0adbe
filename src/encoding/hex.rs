//! Uppercase hexadecimal encoding of byte buffers.
//!
//! Every byte is rendered as two chars from `0-9A-F`, high nibble first.
//! There is no prefix and no separator, so output is always twice as long as input.

use std::cmp::min;
use std::fmt;
use std::io::{self, Error, ErrorKind, Read, Write};

use crate::encoding::{Decoder, Encoder};
use crate::utils::hex::{encode_hex_char, hex_to_nibble};

/// hex_string returns uppercase hex representation of given bytes.
/// It can't fail. Empty input gives empty string.
pub fn hex_string<B: AsRef<[u8]>>(data: B) -> String {
    let mut res = String::new();
    HexEncoder::encode_to_string(data.as_ref(), &mut res);
    res
}

/// hex_decode parses text produced by `hex_string`.
/// Lowercase digits are accepted too.
pub fn hex_decode<B: AsRef<[u8]>>(text: B) -> Result<Vec<u8>, HexDecodingError> {
    HexDecoder::decode(text.as_ref())
}

/// HexString adds `hex_string` method to anything that can be viewed as bytes.
pub trait HexString {
    fn hex_string(&self) -> String;
}

impl<T> HexString for T
    where T: AsRef<[u8]> + ?Sized
{
    #[inline]
    fn hex_string(&self) -> String {
        hex_string(self)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HexDecodingError {
    OddLength { len: usize },
    InvalidDigit { byte: u8, offset: usize },
}

impl fmt::Display for HexDecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexDecodingError::OddLength { len } => write!(f, "Hex input has odd length: {}", len),
            HexDecodingError::InvalidDigit { byte, offset } => {
                write!(f, "Invalid hex digit 0x{:02X} at offset {}", byte, offset)
            }
        }
    }
}

impl std::error::Error for HexDecodingError {}

pub struct HexEncoder {}

impl Encoder for HexEncoder {
    fn encode_to_string(input: &[u8], res: &mut String) -> usize {
        res.reserve(input.len() * 2);
        for b in input.iter().cloned() {
            let [high, low] = encode_hex_char(b);
            res.push(high as char);
            res.push(low as char);
        }
        input.len() * 2
    }
}

pub struct HexDecoder {}

impl Decoder for HexDecoder {
    type Error = HexDecodingError;

    fn decode_to_vec(input: &[u8], res: &mut Vec<u8>) -> Result<usize, Self::Error> {
        if input.len() % 2 != 0 {
            return Err(HexDecodingError::OddLength { len: input.len() });
        }

        let original_len = res.len();
        res.reserve(input.len() / 2);
        for (i, pair) in input.chunks_exact(2).enumerate() {
            let offset = i * 2;
            let decoded = hex_to_nibble(pair[0])
                .ok_or(HexDecodingError::InvalidDigit { byte: pair[0], offset })
                .and_then(|high| {
                    hex_to_nibble(pair[1])
                        .map(|low| high << 4 | low)
                        .ok_or(HexDecodingError::InvalidDigit { byte: pair[1], offset: offset + 1 })
                });
            match decoded {
                Ok(b) => res.push(b),
                Err(e) => {
                    res.truncate(original_len);
                    return Err(e);
                }
            }
        }
        Ok(input.len() / 2)
    }
}

// bytes encoded per single write on inner writer
const WRITE_CHUNK_SZ: usize = 64;

/// HexWriter encodes everything written into it and passes hex text to underlying writer.
pub struct HexWriter<W> {
    writer: W,
}

impl<W> HexWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Write for HexWriter<W>
    where W: Write
{
    /// Returns number of *input* bytes consumed, not number of hex chars produced.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        let sz = min(buf.len(), WRITE_CHUNK_SZ);
        let mut w_buf = [0u8; WRITE_CHUNK_SZ * 2];
        for (i, b) in buf[..sz].iter().cloned().enumerate() {
            let enc = encode_hex_char(b);
            w_buf[i * 2] = enc[0];
            w_buf[i * 2 + 1] = enc[1];
        }
        // both digits of a byte have to land or byte is not written at all
        self.writer.write_all(&w_buf[..sz * 2])?;
        Ok(sz)
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()
    }
}

// hex digits read from inner reader at once
const READ_CHUNK_SZ: usize = 128;

/// HexReader decodes hex text from underlying reader.
///
/// It does not tolerate whitespace. Once an error is returned all subsequent reads fail.
pub struct HexReader<R> {
    reader: R,

    // high nibble which is waiting for it's low pair
    pending: Option<u8>,
    // offset of next digit in the input stream, used in error messages
    offset: u64,
    is_err: bool,
}

impl<R> HexReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            offset: 0,
            is_err: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> Read for HexReader<R>
    where R: Read
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        if self.is_err {
            return Err(Error::new(ErrorKind::Other, "Hex reader is unusable after previous error"));
        }
        if buf.is_empty() {
            return Ok(0);
        }

        let mut in_buf = [0u8; READ_CHUNK_SZ];
        let mut buffer_offset = 0;
        // loop only until at least one byte is produced; single digit reads are not enough
        while buffer_offset == 0 {
            let pending_sz = if self.pending.is_some() { 1 } else { 0 };
            let wanted = min(buf.len() * 2 - pending_sz, in_buf.len());

            let sz = match self.reader.read(&mut in_buf[..wanted]) {
                Ok(sz) => sz,
                Err(e) => match e.kind() {
                    ErrorKind::Interrupted => continue,
                    _ => return Err(e),
                }
            };
            if sz == 0 {
                if self.pending.is_some() {
                    self.is_err = true;
                    return Err(Error::new(ErrorKind::UnexpectedEof, "Hex stream ended in the middle of a byte"));
                }
                break;
            }

            for digit in in_buf[..sz].iter().cloned() {
                let nibble = match hex_to_nibble(digit) {
                    Some(n) => n,
                    None => {
                        self.is_err = true;
                        return Err(Error::new(
                            ErrorKind::InvalidData,
                            format!("Invalid hex digit 0x{:02X} at offset {}", digit, self.offset),
                        ));
                    }
                };
                self.offset += 1;
                match self.pending.take() {
                    Some(high) => {
                        debug_assert!(buffer_offset < buf.len());
                        buf[buffer_offset] = high << 4 | nibble;
                        buffer_offset += 1;
                    }
                    None => {
                        self.pending = Some(nibble);
                    }
                }
            }
        }

        Ok(buffer_offset)
    }
}
