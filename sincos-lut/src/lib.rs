//! Generates a Q8.8 sine/cosine lookup table and writes it out as `dw` assembler directives.

pub mod emitter;
pub mod fixed;
pub mod table;

pub use emitter::{emit, emit_stdout, EmitError};
pub use fixed::Fxp16;
pub use table::{Sample, TableParams};
