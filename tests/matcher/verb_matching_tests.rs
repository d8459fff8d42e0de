//! Verb matching tests.

use std::sync::Arc;

use codebook_dictionary::{Dictionaries, LoadOptions};
use codebook_matcher::{Coder, MatchConfig, Sentence};

const VERBS: &str = "\
# consultations
MEET [010]
- WITH [057]
- WITH_FOREIGN LEADERS [058]
- *_REBEL FORCES [059]

ATTACK [190]
{ATTACKED ATTACKING} [190]
- CIVILIANS*_REBEL [195]

SET UP [040]
";

fn coder(config: MatchConfig) -> Coder {
    let dicts = Dictionaries::from_sources(VERBS, "", &LoadOptions::strict()).unwrap();
    Coder::new(Arc::new(dicts), config)
}

fn verb_code(text: &str, index: usize) -> Option<String> {
    coder(MatchConfig::default())
        .code_verb(&Sentence::from_text(text), index)
        .map(|v| v.code)
}

#[test]
fn meet_with_uses_pattern_code() {
    assert_eq!(verb_code("MEET WITH", 0).as_deref(), Some("057"));
}

#[test]
fn meet_alone_uses_primary_code() {
    assert_eq!(verb_code("MEET", 0).as_deref(), Some("010"));
    assert_eq!(verb_code("MEET THEM", 0).as_deref(), Some("010"));
}

#[test]
fn regular_forms_code_as_primary() {
    for form in ["MEETS", "MEETED", "MEETING"] {
        assert_eq!(verb_code(form, 0).as_deref(), Some("010"), "{form}");
    }
}

#[test]
fn irregular_forms_code_as_primary() {
    for form in ["ATTACKED", "ATTACKING", "ATTACKS"] {
        assert_eq!(verb_code(form, 0).as_deref(), Some("190"), "{form}");
    }
}

#[test]
fn earlier_pattern_shadows_later_one() {
    // WITH is declared before WITH_FOREIGN LEADERS and matches first.
    assert_eq!(verb_code("MEET WITH FOREIGN LEADERS", 0).as_deref(), Some("057"));
}

#[test]
fn low_context_requires_tight_adjacency() {
    assert_eq!(verb_code("REBEL FORCES MEET", 2).as_deref(), Some("059"));
    assert_eq!(verb_code("REBEL FORCES WILL MEET", 3).as_deref(), Some("010"));
}

#[test]
fn pattern_needs_both_sides() {
    assert_eq!(verb_code("REBEL ATTACKED CIVILIANS", 1).as_deref(), Some("195"));
    assert_eq!(verb_code("ARMY ATTACKED CIVILIANS", 1).as_deref(), Some("190"));
    assert_eq!(verb_code("REBEL ATTACKED", 1).as_deref(), Some("190"));
}

#[test]
fn verb_coding_reports_spans() {
    let coding = coder(MatchConfig::default())
        .code_verb(&Sentence::from_text("GOVERNMENT MEETING SECRETLY WITH RIVALS"), 1)
        .unwrap();
    assert_eq!(coding.code, "057");
    assert_eq!(coding.primary, "MEET ");
    assert_eq!(coding.span, 1..2);
    assert_eq!(coding.context, 1..4);
    assert_eq!(coding.pattern, Some(0));
}

#[test]
fn verb_gap_from_config() {
    let bounded = coder(MatchConfig::default().with_verb_gap(Some(0)));
    let sentence = Sentence::from_text("MEET SECRETLY WITH");
    assert_eq!(bounded.code_verb(&sentence, 0).unwrap().code, "010");
    let unbounded = coder(MatchConfig::default());
    assert_eq!(unbounded.code_verb(&sentence, 0).unwrap().code, "057");
}

#[test]
fn multi_word_verbs_match_as_a_unit() {
    let coding = coder(MatchConfig::default())
        .code_verb(&Sentence::from_text("THEY SETS UP CAMP"), 1)
        .unwrap();
    assert_eq!(coding.code, "040");
    assert_eq!(coding.primary, "SET UP ");
    assert_eq!(coding.span, 1..3);
}

#[test]
fn lowercase_input_is_normalized() {
    assert_eq!(verb_code("meet with", 0).as_deref(), Some("057"));
}

#[test]
fn unknown_words_are_uncoded() {
    assert_eq!(verb_code("GREET WITH", 0), None);
    assert_eq!(verb_code("", 0), None);
}

#[test]
fn failing_pattern_over_long_sentence_falls_back() {
    let dicts = Dictionaries::from_sources(
        "SAY [010]\n- A A A A A A NOPE [020]\n",
        "",
        &LoadOptions::default(),
    )
    .unwrap();
    let coder = Coder::new(Arc::new(dicts), MatchConfig::default());
    let text = format!("SAY{}", " A".repeat(120));
    let sentence = Sentence::from_text(&text);

    assert_eq!(coder.code_verb(&sentence, 0).unwrap().code, "010");
    assert_eq!(coder.code_sentence(&sentence).verbs.len(), 1);
}
