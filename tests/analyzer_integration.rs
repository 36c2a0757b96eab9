mod common;

use common::LexiconStub;
use pretty_assertions::assert_eq;
use sentiscope::sentiment::{
    tokenize, SentimentAnalyzer, Verdict, VerdictThresholds, WordScoreMode,
};
use sentiscope::SentimentError;

#[test]
fn test_positive_text_with_vader() {
    let report = SentimentAnalyzer::vader().analyze("I love this!").unwrap();
    assert!(report.scores.compound > 0.0);
    assert_eq!(report.verdict, Verdict::Positive);
    assert_eq!(report.verdict.hex_color(), "#2ecc71");
}

#[test]
fn test_neutral_text_with_vader() {
    let report = SentimentAnalyzer::vader().analyze("This is a table.").unwrap();
    assert!(report.scores.compound.abs() < 0.05);
    assert_eq!(report.verdict, Verdict::Neutral);
}

#[test]
fn test_proportions_sum_to_one() {
    let analyzer = SentimentAnalyzer::vader();
    for text in [
        "I love this!",
        "This is terrible and I hate it",
        "The meeting is at noon.",
        "good bad ugly",
    ] {
        let report = analyzer.analyze(text).unwrap();
        let total = report.scores.proportion_total();
        assert!((total - 1.0).abs() < 0.01, "{text}: {total}");
    }
}

#[test]
fn test_blank_input_rejected() {
    let analyzer = SentimentAnalyzer::vader();
    for text in ["", "   ", "\n\t "] {
        let err = analyzer.analyze(text).unwrap_err();
        assert!(matches!(err, SentimentError::EmptyInput));
    }
}

#[test]
fn test_repeated_word_rows_per_mode() {
    let unique = SentimentAnalyzer::vader().analyze("bad bad").unwrap();
    assert_eq!(unique.words.len(), 1);
    assert_eq!(unique.words[0].word, "bad");
    assert!(unique.words[0].compound < 0.0);

    let all = SentimentAnalyzer::vader()
        .with_word_mode(WordScoreMode::PerOccurrence)
        .analyze("bad bad")
        .unwrap();
    assert_eq!(all.words.len(), 2);
    assert_eq!(all.words[0], all.words[1]);
}

#[test]
fn test_words_split_on_whitespace_only() {
    assert_eq!(tokenize("good bad"), vec!["good", "bad"]);
    assert_eq!(tokenize("great!  ok,\tfine"), vec!["great!", "ok,", "fine"]);
}

#[test]
fn test_stub_scorer_drives_words_and_verdict() {
    let scorer = LexiconStub::new(&[("sunny", 0.4), ("rain", -0.3)]);
    let report = SentimentAnalyzer::new(scorer)
        .analyze("sunny then rain")
        .unwrap();

    assert_eq!(report.scorer, "lexicon-stub");
    assert_eq!(report.verdict, Verdict::Positive);
    let words: Vec<(&str, f64)> = report
        .words
        .iter()
        .map(|w| (w.word.as_str(), w.compound))
        .collect();
    assert_eq!(words, vec![("sunny", 0.4), ("then", 0.0), ("rain", -0.3)]);
}

#[test]
fn test_custom_thresholds_change_verdict() {
    let scorer = LexiconStub::new(&[("fine", 0.2)]);
    let report = SentimentAnalyzer::new(scorer)
        .with_thresholds(VerdictThresholds::new(0.5, -0.5))
        .analyze("fine")
        .unwrap();
    assert_eq!(report.verdict, Verdict::Neutral);
    assert_eq!(report.thresholds.positive, 0.5);
}

#[test]
fn test_input_is_trimmed_in_report() {
    let report = SentimentAnalyzer::vader().analyze("  hello there \n").unwrap();
    assert_eq!(report.text, "hello there");
}

#[test]
fn test_exclamation_without_sentiment_stays_neutral() {
    let analyzer = SentimentAnalyzer::vader().with_word_mode(WordScoreMode::PerOccurrence);
    for text in ["This is a table!", "The meeting is at noon!!"] {
        let report = analyzer.analyze(text).unwrap();
        assert_eq!(report.scores.compound, 0.0, "{text}");
        assert_eq!(report.verdict, Verdict::Neutral, "{text}");
    }

    let report = analyzer.analyze("table! !!!").unwrap();
    assert!(report.words.iter().all(|w| w.compound == 0.0));
}
