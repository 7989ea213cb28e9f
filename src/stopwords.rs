use fxhash::FxHashSet;

#[cfg(feature = "language_stopwords")]
use cached::proc_macro::cached;
#[cfg(feature = "language_stopwords")]
use std::collections::HashSet;
#[cfg(feature = "language_stopwords")]
use stop_words::LANGUAGE as StopWordLanguage;

/// The ASCII punctuation alphabet used by the default stopword generators.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Languages with a stopword dictionary available to [`StopwordFilter`].
#[cfg(feature = "language_stopwords")]
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Language {
    Dutch,
    English,
    French,
    German,
    Italian,
    Portuguese,
    Russian,
    Spanish,
    Turkish,
}

#[cfg(feature = "language_stopwords")]
impl From<Language> for StopWordLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::Dutch => StopWordLanguage::Dutch,
            Language::English => StopWordLanguage::English,
            Language::French => StopWordLanguage::French,
            Language::German => StopWordLanguage::German,
            Language::Italian => StopWordLanguage::Italian,
            Language::Portuguese => StopWordLanguage::Portuguese,
            Language::Russian => StopWordLanguage::Russian,
            Language::Spanish => StopWordLanguage::Spanish,
            Language::Turkish => StopWordLanguage::Turkish,
        }
    }
}

#[cfg(feature = "language_stopwords")]
#[cached(size = 16)]
fn language_stopwords(language: Language) -> HashSet<String> {
    stop_words::get(StopWordLanguage::from(language))
        .into_iter()
        .collect()
}

/// Generates every "word" formed from symbols of `alphabet`, for each length from 0 to
/// `max_length` inclusive. Lengths run in increasing order; within a length, words appear in
/// Cartesian-product order (the last position varies fastest). Length 0 contributes exactly one
/// word: the empty string. An empty alphabet yields only the empty string.
pub fn punctuation_words_with_alphabet(alphabet: &str, max_length: usize) -> Vec<String> {
    let symbols: Vec<char> = alphabet.chars().collect();
    let mut words = vec![String::new()];
    if symbols.is_empty() {
        return words;
    }
    for length in 1..=max_length {
        // Odometer over symbol indices, rightmost digit fastest.
        let mut digits = vec![0usize; length];
        loop {
            words.push(digits.iter().map(|&digit| symbols[digit]).collect());
            let Some(position) = digits.iter().rposition(|&digit| digit + 1 < symbols.len()) else {
                break;
            };
            digits[position] += 1;
            for digit in &mut digits[position + 1..] {
                *digit = 0;
            }
        }
    }
    words
}

/// Generates every punctuation "word" of length 0 to `max_length` over [`PUNCTUATION`].
pub fn punctuation_words(max_length: usize) -> Vec<String> {
    punctuation_words_with_alphabet(PUNCTUATION, max_length)
}

/// Returns the punctuation stopword list: every punctuation word of length 0 to 4, followed by
/// one extra entry per punctuation character. Each single character therefore appears twice,
/// once from the length-1 stage and once from the trailing append. The duplicates are part of
/// the list's observable shape and are kept; [`StopwordFilter`] is the set-semantics consumer.
pub fn punctuation_stopwords() -> Vec<String> {
    let mut stopwords = punctuation_words(4);
    for symbol in PUNCTUATION.chars() {
        stopwords.push(symbol.to_string());
    }
    stopwords
}

/// A set-based stopword filter for token streams. Combines generated punctuation stopwords,
/// an optional language dictionary, and any extra words you supply.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Creates a new `StopwordFilterBuilder` that you can use to customise the filter.
    pub fn builder() -> StopwordFilterBuilder {
        StopwordFilterBuilder::new()
    }

    /// Returns true if the given token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Removes stopwords from the given tokens, preserving the order of the rest.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .collect()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        StopwordFilter::builder().build()
    }
}

/// A builder for [`StopwordFilter`].
#[derive(Debug, Clone)]
pub struct StopwordFilterBuilder {
    punctuation: bool,
    #[cfg(feature = "language_stopwords")]
    language: Option<Language>,
    extra: Vec<String>,
}

impl Default for StopwordFilterBuilder {
    fn default() -> Self {
        StopwordFilterBuilder::new()
    }
}

impl StopwordFilterBuilder {
    /// Creates a new `StopwordFilterBuilder`.
    pub fn new() -> StopwordFilterBuilder {
        StopwordFilterBuilder {
            punctuation: true,
            #[cfg(feature = "language_stopwords")]
            language: None,
            extra: Vec::new(),
        }
    }

    /// Enables or disables the generated punctuation stopwords. Default is `true`.
    pub fn punctuation(mut self, punctuation: bool) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Adds the stopword dictionary for the given language. Default is no language dictionary.
    #[cfg(feature = "language_stopwords")]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Adds extra stopwords of your own.
    pub fn extend(mut self, words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builds the `StopwordFilter`.
    pub fn build(self) -> StopwordFilter {
        let mut words = FxHashSet::default();
        if self.punctuation {
            words.extend(punctuation_stopwords());
        }
        #[cfg(feature = "language_stopwords")]
        if let Some(language) = self.language {
            words.extend(language_stopwords(language));
        }
        words.extend(self.extra);
        StopwordFilter { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_debug_snapshot;

    #[test]
    fn it_generates_only_the_empty_word_for_length_zero() {
        let words = punctuation_words(0);

        assert_eq!(words, vec![String::new()]);
    }

    #[test]
    fn it_generates_words_in_length_major_product_order() {
        let words = punctuation_words_with_alphabet("ab", 2);

        assert_debug_snapshot!(words, @r###"
        [
            "",
            "a",
            "b",
            "aa",
            "ab",
            "ba",
            "bb",
        ]
        "###);
    }

    #[test]
    fn it_generates_the_expected_number_of_words() {
        // Sum of 32^k for k in 0..=4.
        assert_eq!(punctuation_words(4).len(), 1_082_401);
        assert_eq!(punctuation_words(2).len(), 1 + 32 + 1024);
        assert_eq!(punctuation_words_with_alphabet("abc", 3).len(), 1 + 3 + 9 + 27);
    }

    #[test]
    fn it_generates_exactly_one_empty_word() {
        let words = punctuation_words(2);

        assert_eq!(words.iter().filter(|w| w.is_empty()).count(), 1);
    }

    #[test]
    fn it_handles_an_empty_alphabet() {
        let words = punctuation_words_with_alphabet("", 4);

        assert_eq!(words, vec![String::new()]);
    }

    #[test]
    fn it_appends_every_single_character_again() {
        let stopwords = punctuation_stopwords();

        assert_eq!(stopwords.len(), 1_082_401 + 32);
        for symbol in PUNCTUATION.chars() {
            let single = symbol.to_string();
            let occurrences = stopwords.iter().filter(|w| **w == single).count();
            assert_eq!(occurrences, 2, "expected {single:?} twice");
        }
        assert_eq!(stopwords.last(), Some(&"~".to_string()));
    }

    #[test]
    fn it_filters_punctuation_tokens() {
        let filter = StopwordFilter::builder().build();

        let tokens = vec!["!".to_string(), "hello".to_string(), "?!".to_string()];
        let kept = filter.filter(tokens);

        assert_eq!(kept, vec!["hello"]);
    }

    #[test]
    fn it_keeps_everything_when_punctuation_is_disabled() {
        let filter = StopwordFilter::builder().punctuation(false).build();

        assert!(!filter.is_stopword("!"));
        assert!(!filter.is_stopword("..."));
    }

    #[test]
    fn it_accepts_extra_stopwords() {
        let filter = StopwordFilter::builder().extend(["rt", "follow"]).build();

        assert!(filter.is_stopword("rt"));
        assert!(filter.is_stopword("follow"));
        assert!(!filter.is_stopword("coffee"));
    }

    #[test]
    #[cfg(feature = "language_stopwords")]
    fn it_folds_in_a_language_dictionary() {
        let filter = StopwordFilter::builder()
            .language(Language::English)
            .build();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("station"));
    }

    #[test]
    #[cfg(feature = "language_stopwords")]
    fn it_filters_mixed_token_streams() {
        let filter = StopwordFilter::builder()
            .language(Language::English)
            .build();

        let tokens = ["the", "best", "dad", "!", "in", "texas"]
            .into_iter()
            .map(String::from)
            .collect();
        let kept = filter.filter(tokens);

        assert_eq!(kept, vec!["best", "dad", "texas"]);
    }
}
