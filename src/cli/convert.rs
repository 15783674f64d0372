use color_eyre::eyre::{self, eyre, WrapErr};
use ibm_codepage::{CodepageFormatter, FormatterError};
use log::{error, info, warn};

use super::opt::Options;

/// Update the description map and convert the files given in the options
pub fn run(opt: &Options) -> eyre::Result<()> {
    let mut fmt = CodepageFormatter::new(opt.config());

    match fmt.retrieve_description_map() {
        Ok(()) => {}
        Err(FormatterError::MapNotFound(path)) => {
            warn!(
                "No description map at '{}', starting with an empty one",
                path.display()
            );
        }
        Err(e) => return Err(e).wrap_err("Failed to load the description map"),
    }

    for (encoding, file) in opt.updates() {
        fmt.update_description_map(encoding, file)
            .wrap_err_with(|| {
                format!(
                    "Failed to update the description map from `{}` as {}",
                    file.display(),
                    encoding
                )
            })?;
    }

    if fmt.is_dirty() {
        if opt.no_store {
            info!("Not storing the updated description map (--no-store)");
        } else {
            fmt.store_description_map()
                .wrap_err("Failed to store the description map")?;
        }
    }

    if opt.files.is_empty() && opt.update.is_empty() {
        warn!("Nothing to do, pass some codepage files or `--update`");
    }

    let mut failed = 0;
    for file in &opt.files {
        if let Err(e) = fmt.write_codepage_map(file) {
            let report = eyre::Report::new(e);
            error!("Failed to convert '{}': {:?}", file.display(), report);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(eyre!(
            "{} of {} codepage files could not be converted",
            failed,
            opt.files.len()
        ));
    }
    Ok(())
}
