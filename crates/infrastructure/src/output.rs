use std::io::Write;
use ypprobe_application::ports::EntrySink;
use ypprobe_domain::DomainError;

/// Writes map entries one per line: the raw value, or `key value` in keys mode.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    with_keys: bool,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, with_keys: bool) -> Self {
        Self { writer, with_keys }
    }

    pub fn flush(&mut self) -> Result<(), DomainError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> EntrySink for WriterSink<W> {
    fn emit(&mut self, key: &[u8], value: &[u8]) -> Result<(), DomainError> {
        if self.with_keys {
            self.writer.write_all(key)?;
            self.writer.write_all(b" ")?;
        }
        self.writer.write_all(value)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
