//! Preprocessing helpers for tokenizing social-media bio text.

#![warn(missing_docs)]

#[cfg(feature = "casual_tokenizer")]
pub mod docs {
    #![doc = include_str!("../README.md")]
}

#[cfg(test)]
mod test_data_loader;

mod normalizer;
mod preprocessor;
mod stopwords;
mod tokenizer;

#[cfg(feature = "casual_tokenizer")]
mod casual_tokenizer;

#[cfg(feature = "casual_tokenizer")]
pub use casual_tokenizer::{CasualTokenizer, CasualTokenizerBuilder};

pub use normalizer::{normalize_urls, UrlNormalizer, DEFAULT_URL_TOKEN};
pub use preprocessor::{Preprocessor, PreprocessorBuilder};
#[cfg(feature = "language_stopwords")]
pub use stopwords::Language;
pub use stopwords::{
    punctuation_stopwords, punctuation_words, punctuation_words_with_alphabet, StopwordFilter,
    StopwordFilterBuilder, PUNCTUATION,
};
pub use tokenizer::Tokenizer;
