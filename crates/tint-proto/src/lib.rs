//! # tint-proto
//!
//! The wire protocol shared by the tintd chat server and its clients.
//!
//! Inbound traffic is plain newline-terminated UTF-8 text. Outbound traffic
//! is *tinted*: every message carries exactly one color from a fixed palette,
//! serialized with mIRC-style formatting codes (`0x03` + two-digit color
//! code, closed by a `0x0F` reset).
//!
//! ## Quick Start
//!
//! ```rust
//! use tint_proto::{Color, Styled};
//!
//! let msg = Styled::new("hello", Color::Green);
//! let bytes = msg.pack();
//! assert_eq!(&bytes[..], b"\x0303hello\x0f\r\n");
//!
//! let parsed = Styled::unpack("\x0303hello\x0f").expect("valid frame");
//! assert_eq!(parsed, msg);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod color;
pub mod styled;

pub use self::color::{Color, UnknownColor};
pub use self::styled::{pack, Styled};

#[cfg(feature = "tokio")]
pub mod codec;
#[cfg(feature = "tokio")]
pub use self::codec::{CodecError, LineCodec, PackCodec, MAX_LINE_LEN};
