//! Prints the stock sine/cosine table: radius 16, degrees 0 through 179.

use log::error;
use sincos_lut::TableParams;

fn main() {
    env_logger::init();
    if let Err(err) = sincos_lut::emit_stdout(&TableParams::default()) {
        error!("{}", err);
        std::process::exit(1);
    }
}
