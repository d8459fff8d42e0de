//! Sentence coder tests.

use std::sync::Arc;

use codebook_dictionary::{Dictionaries, LoadOptions};
use codebook_matcher::{Coder, MatchConfig, Sentence};

const VERBS: &str = "\
MEET [010]
- WITH [057]
ATTACK [190]
{ATTACKED ATTACKING} [190]
SAY []
- THREATEN [130]
";

const ACTORS: &str = "\
UNITED STATES [USA]
UNITED NATIONS [IGOUNO]
REBEL FORCES [REB]
REBEL [REBUNK]
CIVILIANS [CVL]
";

fn coder(config: MatchConfig) -> Coder {
    let dicts = Dictionaries::from_sources(VERBS, ACTORS, &LoadOptions::default()).unwrap();
    Coder::new(Arc::new(dicts), config)
}

#[test]
fn codes_subject_verb_object() {
    let coding = coder(MatchConfig::default())
        .code_sentence(&Sentence::from_text("Rebel forces attacked civilians."));
    let actors: Vec<_> = coding
        .actors
        .iter()
        .map(|a| (a.code.as_str(), a.span.clone()))
        .collect();
    assert_eq!(actors, vec![("REB", 0..2), ("CVL", 3..4)]);
    assert_eq!(coding.verbs.len(), 1);
    assert_eq!(coding.verbs[0].code, "190");
    assert_eq!(coding.verbs[0].span, 2..3);
}

#[test]
fn actor_spans_never_overlap() {
    let coding = coder(MatchConfig::default())
        .code_sentence(&Sentence::from_text("UNITED NATIONS UNITED STATES REBEL REBEL FORCES"));
    let spans: Vec<_> = coding.actors.iter().map(|a| a.span.clone()).collect();
    assert_eq!(spans, vec![0..2, 2..4, 4..5, 5..7]);
    for pair in spans.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn pattern_context_words_are_still_coded_as_actors() {
    let coding = coder(MatchConfig::default())
        .code_sentence(&Sentence::from_text(
            "The United States, meeting with civilians, met the United Nations",
        ));
    let actors: Vec<_> = coding.actors.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(actors, vec!["USA", "CVL", "IGOUNO"]);
    // MET is irregular and undeclared, so only MEETING codes.
    assert_eq!(coding.verbs.len(), 1);
    assert_eq!(coding.verbs[0].code, "057");
    assert_eq!(coding.verbs[0].context, 3..5);
}

#[test]
fn uncoded_verbs_are_skipped() {
    let coding = coder(MatchConfig::default())
        .code_sentence(&Sentence::from_text("OFFICIALS SAY THE UNITED NATIONS MET"));
    assert!(coding.verbs.is_empty());
    assert_eq!(coding.actors.len(), 1);

    let coding = coder(MatchConfig::default())
        .code_sentence(&Sentence::from_text("OFFICIALS SAY THEY THREATEN"));
    assert_eq!(coding.verbs[0].code, "130");
}

#[test]
fn verbs_require_tag_uses_tagger_output() {
    let sentence = Sentence::from_tagged([
        ("The", "DT"),
        ("attack", "NN"),
        ("on", "IN"),
        ("civilians", "NNS"),
        ("attacked", "VBD"),
    ]);

    let all = coder(MatchConfig::default()).code_sentence(&sentence);
    assert_eq!(all.verbs.len(), 2);

    let tagged = coder(MatchConfig::tagged()).code_sentence(&sentence);
    assert_eq!(tagged.verbs.len(), 1);
    assert_eq!(tagged.verbs[0].span, 4..5);
}

#[test]
fn custom_tag_prefix() {
    let sentence = Sentence::from_tagged([("meet", "V"), ("with", "P")]);
    let config = MatchConfig::tagged().with_verb_tag_prefix("V");
    assert_eq!(coder(config).code_sentence(&sentence).verbs[0].code, "057");
}

#[test]
fn coder_is_shareable_across_threads() {
    let coder = coder(MatchConfig::default());
    let handles: Vec<_> = ["MEET WITH", "ATTACKING", "MEETS"]
        .into_iter()
        .map(|text| {
            let coder = coder.clone();
            std::thread::spawn(move || {
                coder
                    .code_verb(&Sentence::from_text(text), 0)
                    .map(|v| v.code)
            })
        })
        .collect();
    let codes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        codes,
        vec![
            Some("057".to_string()),
            Some("190".to_string()),
            Some("010".to_string())
        ]
    );
}

#[test]
fn lowercase_dictionaries_match_sentences() {
    let dicts = Dictionaries::from_sources(
        "meet [010]\n- with [057]\n",
        "United Nations [IGOUNO]\n",
        &LoadOptions::default(),
    )
    .unwrap();
    let coder = Coder::new(Arc::new(dicts), MatchConfig::default());
    let sentence = Sentence::from_text("United Nations meets with rebels");

    assert_eq!(coder.code_actor(&sentence, 0).unwrap().code, "IGOUNO");
    let verb = coder.code_verb(&sentence, 2).unwrap();
    assert_eq!(verb.code, "057");
    assert_eq!(verb.primary, "MEET ");
}
