//! Tokio codecs for the tinted line protocol.
//!
//! [`LineCodec`] decodes inbound newline-terminated UTF-8 text (the server's
//! read side). [`PackCodec`] encodes [`Styled`] messages to wire bytes and
//! decodes them back (the server's write side, and the read side of test
//! clients).

use bytes::BytesMut;
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

use crate::styled::Styled;

/// Maximum accepted line length in bytes, terminator included.
pub const MAX_LINE_LEN: usize = 512;

/// Codec errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A line exceeded the length limit.
    #[error("line too long: {actual} bytes (limit {limit})")]
    LineTooLong {
        /// Observed length in bytes.
        actual: usize,
        /// The configured limit.
        limit: usize,
    },
    /// A line was not valid UTF-8.
    #[error("invalid utf-8 at byte {byte_pos}")]
    InvalidUtf8 {
        /// Offset of the first invalid byte.
        byte_pos: usize,
    },
    /// A line was not a tinted-text frame.
    #[error("invalid frame: {0:?}")]
    InvalidFrame(String),
    /// Underlying transport error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decodes newline-terminated UTF-8 lines, stripped of their terminator.
pub struct LineCodec {
    /// Index of next byte to check for a newline.
    next_index: usize,
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with the default length limit.
    pub fn new() -> Self {
        Self {
            next_index: 0,
            max_len: MAX_LINE_LEN,
        }
    }

    /// Create a codec with a custom length limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>, CodecError> {
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(CodecError::LineTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            let text = std::str::from_utf8(&line).map_err(|e| CodecError::InvalidUtf8 {
                byte_pos: e.valid_up_to(),
            })?;

            Ok(Some(text.trim_end_matches(['\r', '\n']).to_string()))
        } else {
            // No complete line yet - remember where we stopped.
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(CodecError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }
}

/// Encodes [`Styled`] messages to wire bytes and decodes wire lines back
/// into [`Styled`] values.
pub struct PackCodec {
    line: LineCodec,
}

impl PackCodec {
    /// Create a codec.
    pub fn new() -> Self {
        Self {
            line: LineCodec::new(),
        }
    }
}

impl Default for PackCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder<Styled> for PackCodec {
    type Error = CodecError;

    fn encode(&mut self, msg: Styled, dst: &mut BytesMut) -> Result<(), CodecError> {
        dst.extend_from_slice(&msg.pack());
        Ok(())
    }
}

impl Decoder for PackCodec {
    type Item = Styled;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Styled>, CodecError> {
        match self.line.decode(src)? {
            Some(line) => Styled::unpack(&line)
                .map(Some)
                .ok_or(CodecError::InvalidFrame(line)),
            None => Ok(None),
        }
    }
}
