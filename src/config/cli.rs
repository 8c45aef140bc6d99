use crate::core::LineSink;
use crate::utils::error::Result;
use std::io::{self, StdoutLock, Write};

/// Line sink over any `Write`; each line is newline-terminated.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

pub type StdoutSink = WriterSink<StdoutLock<'static>>;

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StdoutSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
