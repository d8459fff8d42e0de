//! Loading tests.
//!
//! Tests for loading dictionary pairs from files and swapping generations.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use codebook_dictionary::{Dictionaries, DictionaryPaths, LoadOptions, SharedDictionaries};
use codebook_foundation::ErrorKind;
use tempfile::TempDir;

fn write(dir: &TempDir, file: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn load_from_files() {
    let dir = TempDir::new().unwrap();
    let verbs = write(&dir, "verbs.txt", "MEET [010]\n- WITH [057]\n");
    let actors = write(&dir, "actors.txt", "UNITED NATIONS [IGOUNO]\n");

    let dicts = Dictionaries::from_files(&DictionaryPaths::new(verbs, actors), &LoadOptions::default())
        .unwrap();
    assert_eq!(dicts.verbs().resolve("MEETS ").unwrap().code, "010");
    assert_eq!(dicts.actors().candidates("UNITED")[0].code, "IGOUNO");
    assert_eq!(dicts.report().lines, 3);
}

#[test]
fn file_errors_carry_file_name_and_line() {
    let dir = TempDir::new().unwrap();
    let verbs = write(&dir, "verbs.txt", "MEET [010]\n\n- WITH [057\n");
    let actors = write(&dir, "actors.txt", "");

    let err = Dictionaries::from_files(&DictionaryPaths::new(&verbs, actors), &LoadOptions::default())
        .unwrap_err();
    assert!(err.is_malformed());
    let ctx = err.context.unwrap();
    assert_eq!(ctx.line, Some(3));
    assert_eq!(ctx.source, Some(verbs.display().to_string()));
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let verbs = write(&dir, "verbs.txt", "MEET [010]\n");
    let err = Dictionaries::from_files(
        &DictionaryPaths::new(verbs, dir.path().join("actors.txt")),
        &LoadOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}

#[test]
fn strict_report_collects_both_dictionaries() {
    let dicts = Dictionaries::from_sources(
        "MEETING [040]\nMEET [010]\n",
        "GONDOR [GON]\n",
        &LoadOptions::strict(),
    )
    .unwrap();
    assert_eq!(dicts.report().lines, 3);
    assert_eq!(dicts.report().warnings.len(), 1);
}

#[test]
fn reload_from_files_swaps_generation() {
    let dir = TempDir::new().unwrap();
    let verbs = write(&dir, "verbs.txt", "MEET [010]\n");
    let actors = write(&dir, "actors.txt", "GONDOR [GON]\n");
    let paths = DictionaryPaths::new(&verbs, &actors);
    let options = LoadOptions::default();

    let shared = SharedDictionaries::new(Dictionaries::from_files(&paths, &options).unwrap());
    let in_flight: Arc<Dictionaries> = shared.snapshot();

    write(&dir, "verbs.txt", "MEET [011]\n");
    assert_eq!(shared.reload_from_files(&paths, &options).unwrap(), 1);

    assert_eq!(in_flight.verbs().resolve("MEET ").unwrap().code, "010");
    assert_eq!(shared.snapshot().verbs().resolve("MEET ").unwrap().code, "011");

    write(&dir, "verbs.txt", "- WITH [057]\n");
    assert!(shared.reload_from_files(&paths, &options).is_err());
    assert_eq!(shared.generation(), 1);
}

#[test]
fn lowercase_files_compile_to_uppercase_keys() {
    let dir = TempDir::new().unwrap();
    let verbs = write(&dir, "verbs.txt", "meet [010]\n- with [057]\n");
    let actors = write(&dir, "actors.txt", "United Nations [IGOUNO]\n");

    let dicts = Dictionaries::from_files(&DictionaryPaths::new(verbs, actors), &LoadOptions::default())
        .unwrap();
    let mut keys: Vec<_> = dicts.verbs().iter().map(|(k, _)| k.to_string()).collect();
    keys.sort();
    assert_eq!(keys, vec!["MEET ", "MEETED ", "MEETING ", "MEETS "]);
    assert!(dicts.actors().contains_key("UNITED"));
}
