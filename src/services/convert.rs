use serde::Deserialize;
use serde_yaml::Value;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ConvertReport {
    pub converted: usize,
    pub failed: usize,
}

/// Converts a stream of YAML documents into one compact JSON line each on
/// `out`, in input order.
///
/// A document whose value JSON has no representation for (such as a
/// non-string mapping key) is reported on `diag` with its 1-based index and
/// the stream continues. A document with a YAML syntax error is reported
/// once and ends the stream: the parser cannot resume past a syntax error,
/// so everything after the bad document is unreachable.
pub fn convert_stream<W, D>(input: &str, out: &mut W, diag: &mut D) -> anyhow::Result<ConvertReport>
where
    W: Write,
    D: Write,
{
    let mut report = ConvertReport::default();
    for (index, document) in serde_yaml::Deserializer::from_str(input).enumerate() {
        match Value::deserialize(document) {
            Ok(value) => match serde_json::to_string(&value) {
                Ok(line) => {
                    writeln!(out, "{line}")?;
                    report.converted += 1;
                }
                Err(err) => {
                    writeln!(diag, "document {}: {err}", index + 1)?;
                    report.failed += 1;
                }
            },
            Err(err) => {
                writeln!(diag, "document {}: {err}", index + 1)?;
                report.failed += 1;
                break;
            }
        }
    }
    debug!(
        converted = report.converted,
        failed = report.failed,
        "stream converted"
    );
    Ok(report)
}
