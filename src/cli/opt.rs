use std::path::{Path, PathBuf};

use clap::Parser;
use ibm_codepage::FormatterConfig;

#[derive(Parser, Debug)]
/// Convert IBM codepage files into mapping tables for `gencodec.py`
pub struct Options {
    /// The codepage files to convert (e.g. CP01147.txt), looked up in the source folder
    pub files: Vec<PathBuf>,
    /// Learn descriptions from a codepage file in a known encoding.
    ///
    /// May be repeated. The encoding is a label like `cp1140` or `iso-8859-15`.
    #[clap(
        long = "update",
        short = 'u',
        number_of_values = 2,
        multiple_occurrences = true,
        value_names = &["ENCODING", "FILE"]
    )]
    pub update: Vec<String>,
    /// The description map file
    #[clap(long, short = 'm', default_value = "description_map.json")]
    pub map: PathBuf,
    /// The folder that holds the IBM codepage files
    #[clap(long, short = 's', default_value = "cp_source")]
    pub source_dir: PathBuf,
    /// The folder for the mapping tables
    #[clap(long, short = 'd', default_value = "cp_dest")]
    pub dest_dir: PathBuf,
    /// Apply updates even if the map lists them already
    #[clap(long, short = 'f')]
    pub force: bool,
    /// Do not write the description map back
    #[clap(long)]
    pub no_store: bool,
}

impl Options {
    /// The `(encoding, file)` pairs passed with `--update`
    pub fn updates(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.update
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), Path::new(&pair[1])))
    }

    /// The formatter configuration for these options
    pub fn config(&self) -> FormatterConfig {
        FormatterConfig {
            map_path: self.map.clone(),
            source_dir: self.source_dir.clone(),
            dest_dir: self.dest_dir.clone(),
            force_update: self.force,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use ibm_codepage::FormatterConfig;

    use super::Options;

    #[test]
    fn test_defaults() {
        let opt = Options::try_parse_from(["cp-formatter", "CP01147.txt"]).unwrap();
        assert_eq!(opt.files, [Path::new("CP01147.txt")]);
        assert_eq!(opt.updates().count(), 0);
        assert!(!opt.no_store);
        assert_eq!(opt.config(), FormatterConfig::default());
    }

    #[test]
    fn test_updates() {
        let opt = Options::try_parse_from([
            "cp-formatter",
            "-u",
            "iso-8859-15",
            "CP00923.txt",
            "--update",
            "cp1140",
            "CP01140.txt",
            "CP01010.txt",
            "CP01147.txt",
            "-m",
            "map.json",
        ])
        .unwrap();
        let updates: Vec<_> = opt.updates().collect();
        assert_eq!(
            updates,
            [
                ("iso-8859-15", Path::new("CP00923.txt")),
                ("cp1140", Path::new("CP01140.txt")),
            ]
        );
        assert_eq!(opt.files.len(), 2);
        assert_eq!(opt.config().map_path, Path::new("map.json"));
    }

    #[test]
    fn test_update_needs_two_values() {
        assert!(Options::try_parse_from(["cp-formatter", "-u", "cp1140"]).is_err());
    }
}
