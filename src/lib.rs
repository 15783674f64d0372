//! # Codepage formatter
//!
//! Command line front-end for the [`ibm_codepage`] crate.

pub mod cli;
