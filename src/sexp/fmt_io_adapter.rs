//! Use a fmt::Write as an io::Write.
//!
//! Value::write_list is generic over io::Write so the same traversal serves
//! stdout, buffers and the REPL's colored printer, but fmt::Display hands us a
//! fmt::Write. This adapter lets Display reuse write_list.

use std::str::from_utf8;
use std::{fmt, io};


pub struct FmtIoAdapter<'a, F: fmt::Write> {
    fmt_writer: &'a mut F,
}

impl<'a, F: fmt::Write> FmtIoAdapter<'a, F> {
    pub fn new(fmt_writer: &'a mut F) -> Self {
        Self { fmt_writer }
    }
}


impl<'a, F: fmt::Write> io::Write for FmtIoAdapter<'a, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        // write! hands over whole UTF-8 fragments, never split code points.
        let utf = from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        self.fmt_writer
            .write_str(utf)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        Ok(utf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
