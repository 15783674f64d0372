//! # Codepage formatter
//!
//! Turns IBM codepage files into mapping tables for `gencodec.py`.
#![warn(missing_docs)]

use color_eyre::eyre;
use cp_formatter::cli::{self, convert, opt::Options};

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    convert::run(&opt)
}
