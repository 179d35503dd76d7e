//! Integration tests for noisetext.
//!
//! These tests verify end-to-end workflows: perturbing a corpus, cleaning
//! it with bundled or on-disk resources, and charting model scores.

use noisetext::prelude::*;
use noisetext::synthetic::NoiseKind;
use noisetext::text::lemmatize::Lexicon;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

/// Minimal NLTK-data tree with WordNet-format index and exception files.
fn write_fixture(root: &Path) {
    let stopwords = root.join("corpora").join("stopwords");
    let wordnet = root.join("corpora").join("wordnet");
    fs::create_dir_all(&stopwords).expect("create stopwords dir");
    fs::create_dir_all(&wordnet).expect("create wordnet dir");

    fs::write(stopwords.join("english"), "the\nare\nis\na\n").expect("write stopwords");
    fs::write(
        wordnet.join("index.noun"),
        "  1 This software and database is being provided\n\
         cat n 8 4 @ ~ #m %p 8 1 02121620 02985606\n\
         goose n 3 3 @ ~ %p 3 0 01855672 07644967\n\
         review n 9 4 @ ~ + ; 9 2 06682290 00696189\n",
    )
    .expect("write index.noun");
    fs::write(
        wordnet.join("index.verb"),
        "  1 This software and database is being provided\n\
         run v 41 4 @ ~ * > 41 11 01926311 02075049\n",
    )
    .expect("write index.verb");
    fs::write(wordnet.join("index.adj"), "").expect("write index.adj");
    fs::write(wordnet.join("index.adv"), "").expect("write index.adv");
    fs::write(wordnet.join("noun.exc"), "geese goose\n").expect("write noun.exc");
    fs::write(wordnet.join("verb.exc"), "ran run\n").expect("write verb.exc");
}

#[test]
fn test_noise_then_preprocess_workflow() {
    let resources = LinguisticResources::bundled();
    let corpus = [
        "The cats are running quickly!",
        "A model was trained on noisy reviews.",
        "Children played with the geese.",
    ];

    let clean: Vec<Vec<String>> = TextPreprocessor::new(&resources)
        .preprocess_batch(&corpus)
        .expect("bundled resources");
    assert_eq!(clean[0][0], "cat");
    assert!(clean[2].contains(&"goose".to_string()));

    let noisy = augment_corpus(&corpus, &NoiseConfig::random(0.2).with_seed(11)).expect("noise");
    assert_eq!(noisy.len(), corpus.len());
    for (original, perturbed) in corpus.iter().zip(&noisy) {
        assert_eq!(original.chars().count(), perturbed.chars().count());
    }

    let noisy_clean = TextPreprocessor::new(&resources)
        .preprocess_batch(&noisy)
        .expect("bundled resources");
    assert_eq!(noisy_clean.len(), corpus.len());
}

#[test]
fn test_preprocess_running_example() {
    let resources = LinguisticResources::bundled();
    let tokens = preprocess_text("The cats are running quickly!", &resources).expect("ok");

    for dropped in ["the", "are", "!"] {
        assert!(!tokens.iter().any(|t| t == dropped), "{dropped} should be removed");
    }
    assert!(tokens.contains(&"cat".to_string()));
    assert!(tokens.iter().any(|t| t.starts_with("run")));

    assert!(preprocess_text("", &resources).expect("empty").is_empty());
}

#[test]
fn test_resources_from_nltk_data_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());

    let resources = LinguisticResources::load(dir.path()).expect("fixture is complete");
    let tokens = preprocess_text("The geese are cats", &resources).expect("ok");
    assert_eq!(tokens, vec!["goose", "cat"]);

    let verbs = TextPreprocessor::new(&resources)
        .with_config(PreprocessConfig::default().with_pos(Pos::Verb))
        .preprocess("It ran")
        .expect("ok");
    // "it" is not in the fixture stop word list
    assert_eq!(verbs, vec!["it", "run"]);
}

#[test]
fn test_loaded_wordnet_covers_words_outside_bundled_lexicon() {
    let text = "The sentiments of the lids and tokens";

    let bundled = LinguisticResources::bundled();
    let tokens = preprocess_text(text, &bundled).expect("ok");
    assert_eq!(tokens, vec!["sentiments", "lids", "tokens"]);

    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());
    let corpora = dir.path().join("corpora");
    fs::write(corpora.join("stopwords").join("english"), "the\nof\nand\n")
        .expect("write stopwords");
    fs::write(
        corpora.join("wordnet").join("index.noun"),
        "lid n 2 2 @ ~ 2 0 03661340 05601758\n\
         sentiment n 3 2 @ ~ 3 0 07480068 06208021\n\
         token n 4 3 @ ~ + 4 1 06806469 13403643\n",
    )
    .expect("write index.noun");

    let loaded = LinguisticResources::load(dir.path()).expect("fixture is complete");
    let tokens = preprocess_text(text, &loaded).expect("ok");
    assert_eq!(tokens, vec!["sentiment", "lid", "token"]);
}

#[test]
fn test_unreadable_exception_list_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());
    let noun_exc = dir.path().join("corpora").join("wordnet").join("noun.exc");
    fs::write(&noun_exc, b"geese goose\n\xff\xfe\n").expect("write noun.exc");

    let err = LinguisticResources::load(dir.path()).expect_err("not UTF-8");
    assert!(err.to_string().contains("wordnet/noun.exc"), "{err}");
}

#[test]
fn test_missing_resources_propagate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = LinguisticResources::load(dir.path()).expect_err("empty directory");
    assert!(matches!(err, NoiseTextError::ResourceUnavailable { .. }));

    let config = ResourceConfig::default().with_search_path(dir.path());
    assert!(LinguisticResources::discover(&config).is_err());

    let fallback = LinguisticResources::discover(&config.with_bundled_fallback(true))
        .expect("bundled fallback");
    assert_eq!(fallback.stopwords().len(), 179);
}

#[test]
fn test_wordnet_dir_lexicon_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_fixture(dir.path());

    let lexicon = Lexicon::from_wordnet_dir(&dir.path().join("corpora").join("wordnet"))
        .expect("fixture is complete");
    assert_eq!(lexicon.lemma_count(Pos::Noun), 3);
    assert_eq!(lexicon.lemma_count(Pos::Verb), 1);
    assert_eq!(lexicon.exception_count(Pos::Noun), 1);
}

#[test]
fn test_chart_workflow() {
    let chart = get_plot_model(&["A", "B"], &[0.9, 0.8], &[0.7, 0.6], &[0.5, 0.4], None)
        .expect("equal lengths");
    assert_eq!(chart.series.len(), 2);
    assert!(chart.series.iter().all(|s| s.bars.len() == 3));
    assert_eq!(chart.x_range, (0.0, 1.0));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("comparison.svg");
    chart.save_svg(&path).expect("write svg");
    let svg = fs::read_to_string(&path).expect("read svg");
    assert!(svg.contains("Model Comparison - F1, Recall, Precision"));

    let err = get_plot_model(&["A", "B"], &[0.9], &[0.7, 0.6], &[0.5, 0.4], None)
        .expect_err("unequal lengths");
    assert!(err.is_invalid_argument());
}

#[test]
fn test_noise_configs_from_json() {
    let config = NoiseConfig::from_json(r#"{"kind": "random", "noise_level": 0.25, "seed": 5}"#)
        .expect("valid json");
    assert_eq!(config.kind, NoiseKind::Random { noise_level: 0.25 });
    assert_eq!(config.seed, Some(5));
    let mut a = NoiseInjector::new(config);
    let mut b = NoiseInjector::new(config);
    assert_eq!(a.apply("configuration").expect("ok"), b.apply("configuration").expect("ok"));

    let mut rng = StdRng::seed_from_u64(3);
    assert!(add_random_noise(&mut rng, "abc", 1.5).is_err());
    assert_eq!(add_gaussian_noise(&mut rng, "abc", 0.0, 0.0).expect("ok"), "abc");
}
