use super::*;

fn tb(text: &str) -> Vec<String> {
    TreebankWordTokenizer::new()
        .tokenize(text)
        .expect("tokenize should succeed")
}

// ========== SentenceTokenizer Tests ==========

#[test]
fn test_sentence_split_basic() {
    let tokenizer = SentenceTokenizer::new();
    let sentences = tokenizer.split("First one. Second one! Third one?");
    assert_eq!(sentences, vec!["First one.", "Second one!", "Third one?"]);
}

#[test]
fn test_sentence_split_abbreviation() {
    let tokenizer = SentenceTokenizer::new();
    let sentences = tokenizer.split("Dr. Jones arrived. She sat down.");
    assert_eq!(sentences, vec!["Dr. Jones arrived.", "She sat down."]);
}

#[test]
fn test_sentence_split_lowercase_continuation() {
    let tokenizer = SentenceTokenizer::new();
    let sentences = tokenizer.split("It costs 3.5 dollars. cheap, right");
    assert_eq!(sentences, vec!["It costs 3.5 dollars. cheap, right"]);
}

#[test]
fn test_sentence_split_empty_and_whitespace() {
    let tokenizer = SentenceTokenizer::new();
    assert!(tokenizer.split("").is_empty());
    assert!(tokenizer.split("   \n\t").is_empty());
}

#[test]
fn test_sentence_split_no_terminal_punctuation() {
    let tokenizer = SentenceTokenizer::new();
    assert_eq!(tokenizer.split("  no ending here "), vec!["no ending here"]);
}

#[test]
fn test_sentence_split_unicode() {
    let tokenizer = SentenceTokenizer::new();
    let sentences = tokenizer.split("Café au lait. Émile agrees.");
    assert_eq!(sentences, vec!["Café au lait.", "Émile agrees."]);
}

// ========== TreebankWordTokenizer Tests ==========

#[test]
fn test_treebank_empty() {
    assert!(tb("").is_empty());
}

#[test]
fn test_treebank_final_period_only() {
    assert_eq!(tb("Mr. Brown left."), vec!["Mr.", "Brown", "left", "."]);
}

#[test]
fn test_treebank_negation_contractions() {
    assert_eq!(tb("I can't go"), vec!["I", "ca", "n't", "go"]);
    assert_eq!(tb("They WON'T"), vec!["They", "WO", "N'T"]);
}

#[test]
fn test_treebank_clitics() {
    assert_eq!(
        tb("we'll they're I've she's I'm he'd"),
        vec!["we", "'ll", "they", "'re", "I", "'ve", "she", "'s", "I", "'m", "he", "'d"]
    );
}

#[test]
fn test_treebank_split_words() {
    assert_eq!(tb("I cannot"), vec!["I", "can", "not"]);
    assert_eq!(tb("gonna wanna"), vec!["gon", "na", "wan", "na"]);
    assert_eq!(tb("'Tis true"), vec!["'T", "is", "true"]);
}

#[test]
fn test_treebank_plural_possessive() {
    assert_eq!(tb("the cats' toys"), vec!["the", "cats", "'", "toys"]);
}

#[test]
fn test_treebank_numbers_with_commas() {
    assert_eq!(tb("1,000,000 dollars, 3:2 odds"), vec!["1,000,000", "dollars", ",", "3:2", "odds"]);
}

#[test]
fn test_treebank_symbols() {
    assert_eq!(tb("$5 @home #tag 50%"), vec!["$", "5", "@", "home", "#", "tag", "50", "%"]);
}

#[test]
fn test_treebank_dashes_and_ellipsis() {
    assert_eq!(tb("wait--what"), vec!["wait", "--", "what"]);
    assert_eq!(tb("so... fine..."), vec!["so", "...", "fine", "..."]);
}

#[test]
fn test_treebank_hyphenated_word_kept() {
    assert_eq!(tb("state-of-the-art model"), vec!["state-of-the-art", "model"]);
}

#[test]
fn test_treebank_quotes() {
    assert_eq!(
        tb("He said \"stop.\""),
        vec!["He", "said", "``", "stop", ".", "''"]
    );
}

#[test]
fn test_treebank_inner_punctuation() {
    assert_eq!(tb("yes;no?maybe!"), vec!["yes", ";", "no", "?", "maybe", "!"]);
}

// ========== WordTokenizer Tests ==========

#[test]
fn test_word_tokenize_multiple_sentences() {
    let tokens = word_tokenize("The cats are running quickly! Dogs sleep.");
    assert_eq!(
        tokens,
        vec!["The", "cats", "are", "running", "quickly", "!", "Dogs", "sleep", "."]
    );
}

#[test]
fn test_word_tokenizer_trait_matches_free_function() {
    let text = "It's 5 o'clock. Isn't it?";
    let via_trait = WordTokenizer::new().tokenize(text).expect("tokenize should succeed");
    assert_eq!(via_trait, word_tokenize(text));
    assert_eq!(
        via_trait,
        vec!["It", "'s", "5", "o'clock", ".", "Is", "n't", "it", "?"]
    );
}

#[test]
fn test_word_tokenize_empty() {
    assert!(word_tokenize("").is_empty());
}
