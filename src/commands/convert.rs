use crate::services::convert::convert_stream;
use anyhow::Context;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

/// Converts a YAML document stream (stdin, or `file` when given) to compact
/// JSON lines. Per-document failures are reported on stderr without
/// aborting the stream; only an unreadable input source fails the process.
pub fn handle_convert(file: Option<&Path>) -> ExitCode {
    let input = match read_input(file) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match convert_stream(&input, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}
