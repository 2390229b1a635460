use crate::config::OutputFormat;
use crate::core::batch::BatchOutcome;
use crate::domain::model::ConversionRecord;
use crate::utils::error::Result;
use std::io::Write;

/// Writes batch records to an output stream, with failures going to a
/// separate error stream in text mode.
pub struct RecordWriter<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    include_input: bool,
}

impl<O: Write, E: Write> RecordWriter<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat, include_input: bool) -> Self {
        Self {
            out,
            err,
            format,
            include_input,
        }
    }

    pub fn write_record(&mut self, record: &ConversionRecord) -> Result<()> {
        match self.format {
            // failures stay in the same line stream
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, record)?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => match (&record.words, &record.error) {
                (Some(words), _) if self.include_input => {
                    writeln!(self.out, "{}\t{}", record.input, words)?
                }
                (Some(words), _) => writeln!(self.out, "{}", words)?,
                (None, Some(error)) => writeln!(self.err, "❌ {}: {}", record.input, error)?,
                (None, None) => {}
            },
        }
        Ok(())
    }

    pub fn write_all<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a ConversionRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        self.out.flush()?;
        self.err.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Process exit code for a finished batch: 0 when every input converted,
/// otherwise the code of the most severe failure.
pub fn exit_code(outcome: &BatchOutcome) -> i32 {
    outcome
        .worst_error
        .as_ref()
        .map_or(0, |e| e.severity().exit_code())
}
