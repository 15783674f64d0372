#![warn(missing_docs)]
//! # IBM codepage files
//!
//! This crate reads the codepage description files that IBM publishes for its
//! legacy single byte code pages, and turns them into the mapping tables that
//! CPython's `gencodec.py` uses to generate codecs.
//!
//! The IBM files do not list unicode values. Instead, each byte has a
//! description such as `LATIN CAPITAL LETTER A`. A [`DescriptionMap`] that
//! maps these descriptions to unicode is learned from files whose encoding is
//! already known (see [`encoding`]) and is then used to resolve the others.
//!
//! [`DescriptionMap`]: description::DescriptionMap

pub mod codepage;
pub mod description;
pub mod encoding;
pub mod formatter;
pub mod gencodec;

pub use formatter::{CodepageFormatter, FormatterConfig, FormatterError};
