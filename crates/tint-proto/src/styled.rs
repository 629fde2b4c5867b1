//! Styled text: one line of chat, one color, and its wire form.

use bytes::Bytes;

use crate::color::Color;

/// Formatting control bytes. `COLOR` introduces a two-digit palette code,
/// `RESET` closes the tinted run before the line terminator.
const COLOR: char = '\x03';
const RESET: char = '\x0f';

/// A single outbound message: text plus the color it is rendered in.
///
/// Styled values are transient. They are built immediately before delivery,
/// serialized once per recipient queue, and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    /// The message text, without any framing or terminator.
    pub text: String,
    /// The palette color the text is rendered in.
    pub color: Color,
}

impl Styled {
    /// Create a styled message.
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Serialize to wire bytes: `0x03` + two-digit code + text + `0x0F` + CRLF.
    pub fn pack(&self) -> Bytes {
        Bytes::from(format!(
            "{}{:02}{}{}\r\n",
            COLOR,
            self.color.code(),
            self.text,
            RESET
        ))
    }

    /// Parse one wire line (with or without its terminator) back into a
    /// `Styled`. Returns `None` if the frame is not tinted text.
    pub fn unpack(line: &str) -> Option<Styled> {
        let line = line.trim_end_matches(['\r', '\n']);
        let rest = line.strip_prefix(COLOR)?;
        let code: u8 = rest.get(..2)?.parse().ok()?;
        let color = Color::from_code(code)?;
        let text = rest[2..].strip_suffix(RESET).unwrap_or(&rest[2..]);
        Some(Styled::new(text, color))
    }
}

/// Serialize `text` in `color` to wire bytes.
///
/// Convenience for callers that do not hold a [`Styled`] value.
pub fn pack(text: &str, color: Color) -> Bytes {
    Styled::new(text, color).pack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_frames_text_with_color_code() {
        let bytes = pack("hello", Color::Green);
        assert_eq!(&bytes[..], b"\x0303hello\x0f\r\n");

        let bytes = pack("", Color::Blue);
        assert_eq!(&bytes[..], b"\x0302\x0f\r\n");
    }

    #[test]
    fn pack_uses_two_digit_codes() {
        let bytes = pack("x", Color::Cyan);
        assert_eq!(&bytes[..], b"\x0311x\x0f\r\n");
    }

    #[test]
    fn unpack_round_trips() {
        for color in Color::ALL {
            let msg = Styled::new("bob: hello world", color);
            let packed = String::from_utf8(msg.pack().to_vec()).unwrap();
            assert_eq!(Styled::unpack(&packed), Some(msg));
        }
    }

    #[test]
    fn unpack_rejects_untinted_lines() {
        assert_eq!(Styled::unpack("plain text"), None);
        assert_eq!(Styled::unpack("\x03xxnope"), None);
        assert_eq!(Styled::unpack("\x0399bad code"), None);
        assert_eq!(Styled::unpack(""), None);
    }

    #[test]
    fn unpack_tolerates_missing_reset() {
        assert_eq!(
            Styled::unpack("\x0304hi"),
            Some(Styled::new("hi", Color::Red))
        );
    }
}
