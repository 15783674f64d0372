//! # The codepage formatter
//!
//! Ties the pieces together: a [`DescriptionMap`] persisted as JSON, IBM
//! codepage files read from a source folder, and `gencodec` mapping tables
//! written to a destination folder.
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Component, Path, PathBuf},
};

use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    codepage::{parse_codepage_file, CodepageFile},
    description::{normalize, CodePoint, DescriptionMap, MapError},
    encoding::{LookupError, ReferenceEncoding},
    gencodec::{self, Resolution},
};

/// Error from the codepage formatter
#[derive(Debug, Error)]
pub enum FormatterError {
    /// There is no description map file yet
    #[error("Description map `{}` not found", .0.display())]
    MapNotFound(PathBuf),
    /// The description map could not be read or written as JSON
    #[error("Description map `{}` is invalid", .path.display())]
    InvalidMap {
        /// The map file
        path: PathBuf,
        /// The cause
        #[source]
        source: MapError,
    },
    /// The IO failed
    #[error("Failed IO on `{}`", .path.display())]
    Io {
        /// The file or folder
        path: PathBuf,
        /// The cause
        #[source]
        source: io::Error,
    },
    /// A codepage file is not text
    #[error("Codepage file `{}` is not valid text", .0.display())]
    NotText(PathBuf),
    /// The mapping table would replace its own input
    #[error("Output `{}` is the codepage file itself", .0.display())]
    OutputIsInput(PathBuf),
    /// The reference encoding is not available
    #[error(transparent)]
    Encoding(#[from] LookupError),
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> FormatterError + '_ {
    move |source| FormatterError::Io {
        path: path.to_owned(),
        source,
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Where the formatter reads and writes its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// The description map file
    pub map_path: PathBuf,
    /// The folder that holds the IBM codepage files
    pub source_dir: PathBuf,
    /// The folder for the mapping tables
    pub dest_dir: PathBuf,
    /// Re-apply reference files that the map already lists
    pub force_update: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("description_map.json"),
            source_dir: PathBuf::from("cp_source"),
            dest_dir: PathBuf::from("cp_dest"),
            force_update: false,
        }
    }
}

/// Result of [`CodepageFormatter::update_description_map`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// The source key stored in the map
    pub source: String,
    /// Whether the file was applied (false if already listed)
    pub applied: bool,
    /// New descriptions
    pub added: usize,
    /// Descriptions that were already known with the same code point
    pub unchanged: usize,
    /// Descriptions that were known with another code point
    pub conflicts: usize,
    /// Bytes that the reference encoding leaves undefined
    pub undecodable: usize,
    /// Lines of the file that were skipped
    pub skipped_lines: usize,
}

/// Result of [`CodepageFormatter::write_codepage_map`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// The file that was written
    pub output: PathBuf,
    /// Number of entries
    pub entries: usize,
    /// Entries with a unicode value
    pub resolved: usize,
    /// Entries without a unicode value
    pub unresolved: usize,
    /// Lines of the input that were skipped
    pub skipped_lines: usize,
}

/// Converts IBM codepage files with the help of a description map
#[derive(Debug)]
pub struct CodepageFormatter {
    config: FormatterConfig,
    map: DescriptionMap,
    dirty: bool,
}

impl CodepageFormatter {
    /// Create a formatter with an empty description map
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            map: DescriptionMap::new(),
            dirty: false,
        }
    }

    /// The configuration
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// The in-memory description map
    pub fn description_map(&self) -> &DescriptionMap {
        &self.map
    }

    /// Whether the map changed since it was last loaded or stored
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The input path for a codepage file name
    pub fn source_path(&self, filename: &Path) -> PathBuf {
        self.config.source_dir.join(filename)
    }

    /// The output path for a codepage file name
    ///
    /// Relative names keep their folders below the destination, anything
    /// else (absolute or with `..`) keeps only the file name.
    pub fn dest_path(&self, filename: &Path) -> PathBuf {
        let nested = filename
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if nested {
            self.config.dest_dir.join(filename)
        } else {
            let name = filename.file_name().unwrap_or(filename.as_os_str());
            self.config.dest_dir.join(name)
        }
    }

    fn load_codepage(&self, filename: &Path) -> Result<(PathBuf, CodepageFile), FormatterError> {
        let path = self.source_path(filename);
        let bytes = fs::read(&path).map_err(io_err(&path))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => return Err(FormatterError::NotText(path)),
        };
        let file = parse_codepage_file(&text);
        for skipped in &file.skipped {
            warn!(
                "{}:{}: skipping line, {}: {:?}",
                path.display(),
                skipped.line,
                skipped.reason,
                skipped.text
            );
        }
        debug!(
            "Parsed {} entries from '{}' (code page {})",
            file.entries.len(),
            path.display(),
            file.code_page.as_deref().unwrap_or("unknown")
        );
        Ok((path, file))
    }

    /// Load the description map from its file
    ///
    /// On error, the in-memory map stays as it was.
    pub fn retrieve_description_map(&mut self) -> Result<(), FormatterError> {
        let path = &self.config.map_path;
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(FormatterError::MapNotFound(path.clone()))
            }
            Err(e) => return Err(io_err(path)(e)),
        };
        let map = DescriptionMap::from_json(&text).map_err(|source| FormatterError::InvalidMap {
            path: path.clone(),
            source,
        })?;
        info!(
            "Loaded {} descriptions from '{}'",
            map.len(),
            path.display()
        );
        self.map = map;
        self.dirty = false;
        Ok(())
    }

    /// Learn descriptions from a codepage file whose encoding is known
    pub fn update_description_map(
        &mut self,
        encoding: &str,
        filename: &Path,
    ) -> Result<UpdateReport, FormatterError> {
        let reference = ReferenceEncoding::for_label(encoding)?;
        let name = filename.file_name().unwrap_or(filename.as_os_str());
        let source = format!(
            "{}:{}",
            encoding.trim().to_ascii_lowercase(),
            name.to_string_lossy()
        );

        if self.map.has_source(&source) && !self.config.force_update {
            info!("Description map already contains '{}', skipping", source);
            return Ok(UpdateReport {
                source,
                ..UpdateReport::default()
            });
        }

        let (path, file) = self.load_codepage(filename)?;
        let mut report = UpdateReport {
            source,
            applied: true,
            skipped_lines: file.skipped.len(),
            ..UpdateReport::default()
        };

        for entry in &file.entries {
            if entry.description.is_empty() {
                continue;
            }
            let code_point = match entry.unicode {
                Some(cp) => cp,
                None => match reference.decode(entry.byte) {
                    Some(chr) => CodePoint::from(chr),
                    None => {
                        warn!(
                            "{}:{}: byte 0x{:02X} is undefined in {}",
                            path.display(),
                            entry.line,
                            entry.byte,
                            reference
                        );
                        report.undecodable += 1;
                        continue;
                    }
                },
            };
            match self.map.insert(&entry.description, code_point) {
                None => report.added += 1,
                Some(old) if old == code_point => report.unchanged += 1,
                Some(old) => {
                    warn!(
                        "{}:{}: '{}' was {}, now {}",
                        path.display(),
                        entry.line,
                        normalize(&entry.description),
                        old,
                        code_point
                    );
                    report.conflicts += 1;
                }
            }
        }

        let new_source = !self.map.has_source(&report.source);
        self.map.add_source(&report.source);
        if new_source || report.added > 0 || report.conflicts > 0 {
            self.dirty = true;
        }
        info!(
            "Learned {} new descriptions from '{}' as {}",
            report.added,
            path.display(),
            reference
        );
        Ok(report)
    }

    /// Write the `gencodec` mapping table for a codepage file
    pub fn write_codepage_map(&self, filename: &Path) -> Result<WriteReport, FormatterError> {
        let (path, file) = self.load_codepage(filename)?;

        let output = self.dest_path(filename);
        let out_dir = output.parent().unwrap_or(&self.config.dest_dir);
        fs::create_dir_all(out_dir).map_err(io_err(out_dir))?;
        if is_same_file(&path, &output) {
            return Err(FormatterError::OutputIsInput(output));
        }

        let source = path
            .file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy();
        let out_file = File::create(&output).map_err(io_err(&output))?;
        let mut out = BufWriter::new(out_file);
        let resolutions = gencodec::write_mapping(&mut out, &file, &self.map, &source)
            .and_then(|r| out.flush().map(|()| r))
            .map_err(io_err(&output))?;

        let mut unresolved = 0;
        for (entry, resolution) in file.entries.iter().zip(&resolutions) {
            if *resolution == Resolution::Unresolved {
                warn!(
                    "{}:{}: no unicode value known for byte 0x{:02X} '{}'",
                    path.display(),
                    entry.line,
                    entry.byte,
                    normalize(&entry.description)
                );
                unresolved += 1;
            }
        }

        let report = WriteReport {
            output,
            entries: resolutions.len(),
            resolved: resolutions.len() - unresolved,
            unresolved,
            skipped_lines: file.skipped.len(),
        };
        info!(
            "Wrote '{}' ({} of {} resolved)",
            report.output.display(),
            report.resolved,
            report.entries
        );
        Ok(report)
    }

    /// Save the description map to its file, replacing the old contents
    pub fn store_description_map(&mut self) -> Result<(), FormatterError> {
        let path = &self.config.map_path;
        let json = self.map.to_json().map_err(|source| FormatterError::InvalidMap {
            path: path.clone(),
            source,
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        fs::write(path, json).map_err(io_err(path))?;
        info!(
            "Stored {} descriptions to '{}'",
            self.map.len(),
            path.display()
        );
        self.dirty = false;
        Ok(())
    }
}
