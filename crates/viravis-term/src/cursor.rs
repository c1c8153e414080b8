//! Cursor visibility for the in-place graph.

use std::io::{self, Write};

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Hides the cursor on creation and shows it again on drop, including when
/// the caller bails out with `?`.
pub struct CursorGuard<W: Write> {
    out: W,
}

impl<W: Write> CursorGuard<W> {
    pub fn hide(mut out: W) -> io::Result<Self> {
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(SHOW_CURSOR.as_bytes());
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hides_then_shows() {
        let mut buf = Vec::new();
        {
            let _cursor = CursorGuard::hide(&mut buf).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1b[?25l\x1b[?25h");
    }

    #[test]
    fn cursor_is_restored_when_an_error_propagates() {
        fn fail_midway(buf: &mut Vec<u8>) -> io::Result<()> {
            let _cursor = CursorGuard::hide(&mut *buf)?;
            Err(io::Error::other("stdout closed"))
        }

        let mut buf = Vec::new();
        assert!(fail_midway(&mut buf).is_err());
        assert!(String::from_utf8(buf).unwrap().ends_with(SHOW_CURSOR));
    }
}
