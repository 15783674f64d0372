use std::fs;

use clap::Parser;
use cp_formatter::cli::{convert, opt::Options};

const CP00923: &str = "\
* Code Page          : 00923
A4   SC200000    EURO SIGN
C1   LA110000    LATIN CAPITAL LETTER A ACUTE
";

const CP01147: &str = "\
* Code Page          : 01147
65   LA110000    LATIN CAPITAL LETTER A ACUTE
9F   SC200000    EURO SIGN
B1   SD170000    POUND SIGN
";

fn options(dir: &std::path::Path, args: &[&str]) -> Options {
    let map = dir.join("description_map.json");
    let source = dir.join("cp_source");
    let dest = dir.join("cp_dest");
    let mut argv = vec![
        "cp-formatter".to_owned(),
        "-m".to_owned(),
        map.display().to_string(),
        "-s".to_owned(),
        source.display().to_string(),
        "-d".to_owned(),
        dest.display().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));
    Options::try_parse_from(argv).unwrap()
}

#[test]
fn update_store_and_convert() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("cp_source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("CP00923.txt"), CP00923).unwrap();
    fs::write(source.join("CP01147.txt"), CP01147).unwrap();

    let opt = options(
        dir.path(),
        &["-u", "iso-8859-15", "CP00923.txt", "CP01147.txt"],
    );
    convert::run(&opt).unwrap();

    let map = fs::read_to_string(dir.path().join("description_map.json")).unwrap();
    assert!(map.contains("\"iso-8859-15:CP00923.txt\""));
    assert!(map.contains("\"EURO SIGN\": \"0x20AC\""));

    let out = fs::read_to_string(dir.path().join("cp_dest/CP01147.txt")).unwrap();
    assert!(out.contains("0x65\t0x00C1\t# LATIN CAPITAL LETTER A ACUTE\n"));
    assert!(out.contains("0x9F\t0x20AC\t# EURO SIGN\n"));
    assert!(out.contains("0xB1\t\t# UNRESOLVED: POUND SIGN\n"));
}

#[test]
fn no_store_keeps_map_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("cp_source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("CP00923.txt"), CP00923).unwrap();

    let opt = options(dir.path(), &["--no-store", "-u", "l9", "CP00923.txt"]);
    convert::run(&opt).unwrap();
    assert!(!dir.path().join("description_map.json").exists());
}

#[test]
fn failed_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("cp_source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("CP01147.txt"), CP01147).unwrap();

    let opt = options(dir.path(), &["CP99999.txt", "CP01147.txt"]);
    let err = convert::run(&opt).unwrap_err();
    assert!(err.to_string().contains("1 of 2"));
    assert!(dir.path().join("cp_dest/CP01147.txt").exists());
}

#[test]
fn corrupt_map_aborts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("description_map.json"), "not json").unwrap();

    let opt = options(dir.path(), &["CP01147.txt"]);
    assert!(convert::run(&opt).is_err());
}
