use crate::domain::model::{BatchSummary, ConversionRecord};
use crate::domain::ports::NumberSpeller;
use crate::utils::error::{ConvertError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub trim_whitespace: bool,
    pub skip_blank_lines: bool,
    pub fail_fast: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            skip_blank_lines: true,
            fail_fast: false,
        }
    }
}

/// Result of a batch run. `worst_error` keeps the most severe failure seen.
#[derive(Debug)]
pub struct BatchOutcome {
    pub records: Vec<ConversionRecord>,
    pub summary: BatchSummary,
    pub worst_error: Option<ConvertError>,
}

pub struct BatchConverter<S: NumberSpeller> {
    speller: S,
    options: BatchOptions,
}

impl<S: NumberSpeller> BatchConverter<S> {
    pub fn new(speller: S) -> Self {
        Self::with_options(speller, BatchOptions::default())
    }

    pub fn with_options(speller: S, options: BatchOptions) -> Self {
        Self { speller, options }
    }

    /// Spells every input in order.
    ///
    /// With `fail_fast` the first failure is returned as `Err` and nothing
    /// after it is converted.
    pub fn run<I, T>(&self, inputs: I) -> Result<BatchOutcome>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut summary = BatchSummary::default();
        let mut worst_error: Option<ConvertError> = None;

        for raw in inputs {
            let raw = raw.as_ref();
            let input = if self.options.trim_whitespace {
                raw.trim()
            } else {
                raw
            };

            if self.options.skip_blank_lines && input.trim().is_empty() {
                continue;
            }

            summary.total += 1;
            match self.speller.spell(input) {
                Ok(words) => {
                    tracing::debug!(input, words = %words, "converted");
                    summary.succeeded += 1;
                    records.push(ConversionRecord::success(input, words));
                }
                Err(e) => {
                    // reported per record by the output writer
                    tracing::debug!(input, error = %e, "conversion failed");
                    if self.options.fail_fast {
                        return Err(e);
                    }
                    summary.failed += 1;
                    records.push(ConversionRecord::failure(input, &e));
                    if worst_error
                        .as_ref()
                        .map_or(true, |worst| e.severity() > worst.severity())
                    {
                        worst_error = Some(e);
                    }
                }
            }
        }

        tracing::info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "batch finished"
        );

        Ok(BatchOutcome {
            records,
            summary,
            worst_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::converter::PersianNumberConverter;

    struct EchoSpeller;

    impl NumberSpeller for EchoSpeller {
        fn spell(&self, digits: &str) -> Result<String> {
            if digits == "bad" {
                return Err(ConvertError::invalid_input(digits, "rejected"));
            }
            Ok(format!("<{}>", digits))
        }
    }

    #[test]
    fn test_run_collects_records_and_summary() {
        let batch = BatchConverter::new(PersianNumberConverter::new());
        let outcome = batch.run(["10", " 23 ", "", "12a3"]).unwrap();

        assert_eq!(outcome.summary.total, 3);
        assert_eq!(outcome.summary.succeeded, 2);
        assert_eq!(outcome.summary.failed, 1);
        assert_eq!(outcome.records[0].words.as_deref(), Some("ده"));
        assert_eq!(outcome.records[1].input, "23");
        assert_eq!(outcome.records[1].words.as_deref(), Some("بیست و سه"));
        assert!(outcome.records[2].error.is_some());
        assert!(matches!(
            outcome.worst_error,
            Some(ConvertError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_without_trimming_whitespace_is_invalid() {
        let options = BatchOptions {
            trim_whitespace: false,
            ..BatchOptions::default()
        };
        let batch = BatchConverter::with_options(PersianNumberConverter::new(), options);
        let outcome = batch.run([" 7"]).unwrap();
        assert_eq!(outcome.summary.failed, 1);
    }

    #[test]
    fn test_blank_lines_counted_when_not_skipped() {
        let options = BatchOptions {
            skip_blank_lines: false,
            ..BatchOptions::default()
        };
        let batch = BatchConverter::with_options(EchoSpeller, options);
        let outcome = batch.run(["1", ""]).unwrap();
        assert_eq!(outcome.summary.total, 2);
        assert_eq!(outcome.records[1].words.as_deref(), Some("<>"));
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let options = BatchOptions {
            fail_fast: true,
            ..BatchOptions::default()
        };
        let batch = BatchConverter::with_options(EchoSpeller, options);
        assert!(batch.run(["1", "bad", "2"]).is_err());
    }
}
