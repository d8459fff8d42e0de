//! Verb compiler tests.
//!
//! Tests for compiling verb dictionary text into a verb table.

use codebook_dictionary::phrase::{is_well_formed, scan_phrase};
use codebook_dictionary::{Entry, LoadOptions, PatternCompiler, VerbCompiler, VerbTable};
use codebook_foundation::{Connector, ErrorKind, MalformedReason};

fn compile(source: &str) -> VerbTable {
    VerbCompiler::compile_source(source, LoadOptions::default())
        .unwrap()
        .0
}

// =============================================================================
// Primaries and Patterns
// =============================================================================

#[test]
fn primary_line_declares_space_terminated_key() {
    let table = compile("MEET [010]\n");
    assert_eq!(
        table.get("MEET "),
        Some(&Entry::Primary {
            code: "010".to_string()
        })
    );
    assert!(!table.contains("MEET"));
}

#[test]
fn extension_attaches_to_primary_not_alias() {
    let table = compile("MEET [010]\n- WITH [057]\n");
    match table.get("MEET ") {
        Some(Entry::PrimaryWithPatterns { code, patterns }) => {
            assert_eq!(code, "010");
            assert_eq!(patterns.len(), 1);
            assert_eq!(patterns[0].code, "057");
        }
        other => panic!("expected primary with patterns, got {other:?}"),
    }
    assert!(matches!(table.get("MEETS "), Some(Entry::Alias { .. })));
}

#[test]
fn patterns_keep_declaration_order() {
    let table = compile("MEET [010]\n- WITH [057]\n- WITH LEADERS [058]\n- *_REBELS [059]\n");
    let resolved = table.resolve("MEETING ").unwrap();
    let codes: Vec<_> = resolved.patterns.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(codes, vec!["057", "058", "059"]);
}

#[test]
fn extension_lines_follow_latest_primary() {
    let table = compile("MEET [010]\n- WITH [057]\nATTACK [190]\n- AGAINST [191]\n");
    assert_eq!(table.resolve("MEET ").unwrap().patterns.len(), 1);
    assert_eq!(table.resolve("ATTACK ").unwrap().patterns[0].code, "191");
}

#[test]
fn high_is_reversed_and_low_keeps_connector() {
    let ext = PatternCompiler::compile_extension(" WITH_FOREIGN LEADERS*_REBEL FORCES", "057", true)
        .unwrap();
    let mut expected_high = scan_phrase("WITH_FOREIGN LEADERS");
    expected_high.reverse();
    assert_eq!(ext.pattern.high, expected_high);
    assert_eq!(
        ext.pattern.low.first().and_then(|t| t.as_connector()),
        Some(Connector::Tight)
    );
    assert_eq!(ext.pattern.low[1..], scan_phrase("REBEL FORCES")[..]);
    assert!(is_well_formed(&ext.pattern.high));
    assert!(is_well_formed(&ext.pattern.low[1..]));
}

#[test]
fn phrase_text_round_trips() {
    for body in ["WITH", "WITH_FOREIGN LEADERS", "WITH*_REBELS", "*_REBEL FORCES"] {
        let ext = PatternCompiler::compile_extension(body, "000", true).unwrap();
        assert_eq!(ext.pattern.phrase_text(), body);
    }
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let (table, report) = VerbCompiler::compile_source(
        "# header\n\nMEET [010]\n   # indented comment\n- WITH [057]\n",
        LoadOptions::default(),
    )
    .unwrap();
    assert_eq!(report.lines, 2);
    assert_eq!(table.pattern_count(), 1);
}

// =============================================================================
// Structural Errors
// =============================================================================

#[test]
fn extension_before_primary_is_fatal() {
    let err = VerbCompiler::compile_source("# verbs\n- WITH [057]\n", LoadOptions::default())
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedLine {
            reason: MalformedReason::ExtensionWithoutPrimary,
            ..
        }
    ));
    assert_eq!(err.context.unwrap().line, Some(2));
}

#[test]
fn forms_before_primary_is_fatal() {
    let err = VerbCompiler::compile_source("{MET} [010]\n", LoadOptions::default()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedLine {
            reason: MalformedReason::FormsWithoutPrimary,
            ..
        }
    ));
}

#[test]
fn unbalanced_brackets_are_fatal() {
    for source in ["MEET [010\n", "MEET ]010[\n"] {
        let err = VerbCompiler::compile_source(source, LoadOptions::default()).unwrap_err();
        assert!(err.is_malformed(), "{source:?} should be malformed");
    }
}

#[test]
fn missing_low_connector_depends_on_strictness() {
    let source = "MEET [010]\n- WITH*REBELS [058]\n";
    let err = VerbCompiler::compile_source(source, LoadOptions::strict()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MalformedLine {
            reason: MalformedReason::MissingLowConnector,
            ..
        }
    ));

    let (table, report) = VerbCompiler::compile_source(source, LoadOptions::default()).unwrap();
    let pattern = &table.resolve("MEET ").unwrap().patterns[0];
    assert_eq!(pattern.low[0].as_connector(), Some(Connector::Loose));
    assert!(report.is_clean());
}

#[test]
fn alias_hop_bound_is_configurable() {
    let options = LoadOptions::default().with_max_alias_hops(1);
    let (table, _) = VerbCompiler::compile_source("MEET [010]\n", options).unwrap();
    assert_eq!(table.resolve("MEETED ").unwrap().code, "010");

    let options = LoadOptions::default().with_max_alias_hops(0);
    let err = VerbCompiler::compile_source("MEET [010]\n", options).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config(_)));
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn compiling_twice_gives_equal_tables() {
    let source = "MEET [010]\n- WITH [057]\nATTACK [190]\n{ATTACKED ATTACKING} [190]\n- *_REBELS [195]\n";
    assert_eq!(compile(source), compile(source));
}
