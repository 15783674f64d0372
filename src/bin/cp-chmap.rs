use clap::Parser;
use color_eyre::eyre;
use ibm_codepage::encoding::ReferenceEncoding;

use cp_formatter::cli::{self, chmap::chmap_table};

#[derive(Parser)]
/// Print the 256 characters of a reference encoding
pub struct ChmapOpts {
    /// An encoding label, e.g. `cp1140` or `iso-8859-15`
    encoding: String,
    /// Print code points instead of characters
    #[clap(long, short = 'x')]
    hex: bool,
}

fn main() -> eyre::Result<()> {
    let opt: ChmapOpts = cli::init()?;
    let reference = ReferenceEncoding::for_label(&opt.encoding)?;

    println!("{}", reference);
    chmap_table(&reference, opt.hex).printstd();
    Ok(())
}
