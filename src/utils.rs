//! Buffer helpers for the line-oriented wire format.

use bytes::{Buf, BytesMut};

use crate::error::{ClientError, ClientResult};

/// Split the next complete line off the front of `buf`.
///
/// Returns `None` until a `\n` has been buffered. The terminator, and a
/// `\r` right before it, are not part of the returned frame.
pub fn take_line(buf: &mut BytesMut) -> Option<BytesMut> {
    let end = buf.iter().position(|b| *b == b'\n')?;
    let mut line = buf.split_to(end);
    buf.advance(1);
    if line.last() == Some(&b'\r') {
        line.truncate(line.len() - 1);
    }
    Some(line)
}

/// Check that `word` can travel as a single wire token.
pub fn check_word(what: &str, word: &str) -> ClientResult<()> {
    if word.is_empty() {
        return Err(ClientError::InvalidArgument(format!("{} is empty", what)));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(ClientError::InvalidArgument(format!(
            "{} '{}' contains whitespace",
            what, word
        )));
    }
    Ok(())
}

/// Encode a request line from its words.
pub fn encode_request(words: &[&str]) -> BytesMut {
    let len = words.iter().map(|w| w.len() + 1).sum();
    let mut out = BytesMut::with_capacity(len);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(b" ");
        }
        out.extend_from_slice(word.as_bytes());
    }
    out.extend_from_slice(b"\n");
    out
}
