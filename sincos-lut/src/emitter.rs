//! Writes a lookup table out as assembler data directives.
//!
//! The layout is a label line followed by `dw` lines holding six `x,y` pairs each:
//!
//! ```text
//! data.lut_sincos:
//! dw 0xf000,0x0000,0xf001,0xffb9,...,
//! dw ...
//! ```
//!
//! Every value is followed by a comma, including the last one on a line. A full line ends with a
//! newline but a final short line does not, so tables whose length isn't a multiple of six end
//! mid-line.

use std::io::{self, BufWriter, Write};

use log::{debug, trace};
use thiserror::Error;

use crate::table::{Sample, TableParams};

/// Label emitted on the first line of the table.
pub const LABEL: &str = "data.lut_sincos:";

/// Directive that starts each data line.
pub const DIRECTIVE: &str = "dw ";

/// Number of `x,y` pairs written on one `dw` line.
pub const PAIRS_PER_LINE: usize = 6;

/// Errors that can happen while emitting a table.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Writing to the output failed.
    #[error("Error while writing table: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for EmitError {
    fn from(err: io::Error) -> Self {
        EmitError::Io(err)
    }
}

/// Write the table described by `params` to `out`.
pub fn emit<W: Write>(params: &TableParams, out: &mut W) -> Result<(), EmitError> {
    debug!(
        "Emitting table: radius {} degrees [{}, {}) step {} ({} samples)",
        params.radius,
        params.start,
        params.end,
        params.step,
        params.len()
    );
    emit_samples(params.samples(), out)
}

/// Write an arbitrary sequence of samples with the table layout.
pub fn emit_samples<W, I>(samples: I, out: &mut W) -> Result<(), EmitError>
where
    W: Write,
    I: IntoIterator<Item = Sample>,
{
    writeln!(out, "{}", LABEL)?;
    let mut line_pos = 0;
    for sample in samples {
        trace!(
            "{} deg: x={:#010x} y={:#010x}",
            sample.degree,
            sample.x.raw(),
            sample.y.raw()
        );
        if line_pos == 0 {
            out.write_all(DIRECTIVE.as_bytes())?;
        }
        write!(out, "{},{},", sample.x, sample.y)?;
        line_pos += 1;
        if line_pos == PAIRS_PER_LINE {
            writeln!(out)?;
            line_pos = 0;
        }
    }
    Ok(())
}

/// Render the table into a `String`.
pub fn emit_to_string(params: &TableParams) -> String {
    let mut buf = Vec::with_capacity(LABEL.len() + 1 + params.len() * 14 + params.len() / 2);
    // Writing to a Vec can't fail, and everything written is ASCII.
    emit(params, &mut buf).unwrap_or_else(|err| unreachable!("{}", err));
    String::from_utf8(buf).unwrap_or_else(|err| unreachable!("{}", err))
}

/// Write the table to standard output.
///
/// Stdout is locked and buffered for the duration of the call and flushed before returning.
pub fn emit_stdout(params: &TableParams) -> Result<(), EmitError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    emit(params, &mut out)?;
    out.flush()?;
    Ok(())
}
