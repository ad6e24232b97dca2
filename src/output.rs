use std::io::{self, Write};

/// Prints a progress line to stdout and mirrors it to `writer` when one is given.
///
/// Stdout failures are logged and swallowed; failures on `writer` are returned.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        tracing::warn!(error = %e, "failed to write to stdout");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}
