#[cfg(feature = "parallelism")]
use rayon::prelude::*;

#[cfg(feature = "casual_tokenizer")]
use crate::casual_tokenizer::CasualTokenizer;
use crate::normalizer::{UrlNormalizer, DEFAULT_URL_TOKEN};
use crate::stopwords::StopwordFilter;
use crate::tokenizer::Tokenizer;

/// A bio preprocessing pipeline: URL normalization, then tokenization, then optional stopword
/// filtering. T is the tokenizer type, so tests can inject a fake implementation.
pub struct Preprocessor<T: Tokenizer> {
    normalizer: UrlNormalizer,
    tokenizer: T,
    filter: Option<StopwordFilter>,
}

#[cfg(feature = "casual_tokenizer")]
impl Preprocessor<CasualTokenizer> {
    /// Creates a preprocessor over the default casual tokenizer, with the default URL token and
    /// no stopword filter.
    pub fn new() -> Preprocessor<CasualTokenizer> {
        PreprocessorBuilder::new().build()
    }
}

#[cfg(feature = "casual_tokenizer")]
impl Default for Preprocessor<CasualTokenizer> {
    fn default() -> Self {
        Preprocessor::new()
    }
}

impl<T: Tokenizer> Preprocessor<T> {
    /// Creates a preprocessor over the given tokenizer, with the default URL token and no
    /// stopword filter.
    pub fn with_tokenizer(tokenizer: T) -> Preprocessor<T> {
        PreprocessorBuilder::with_tokenizer(tokenizer).build()
    }

    /// Runs the full pipeline on one bio and returns its tokens.
    pub fn process(&self, bio: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(bio);
        let tokens = self.tokenizer.tokenize(&normalized);
        match &self.filter {
            Some(filter) => filter.filter(tokens),
            None => tokens,
        }
    }

    /// Processes a batch of bios. Use the `parallelism` feature to speed this up for large
    /// batches.
    pub fn batch_process(&self, bios: &[&str]) -> Vec<Vec<String>>
    where
        T: Sync,
    {
        #[cfg(not(feature = "parallelism"))]
        let bio_iter = bios.iter();
        #[cfg(feature = "parallelism")]
        let bio_iter = bios.par_iter();
        bio_iter.map(|bio| self.process(bio)).collect()
    }
}

/// A builder for [`Preprocessor`].
pub struct PreprocessorBuilder<T: Tokenizer> {
    url_replacement: String,
    tokenizer: T,
    filter: Option<StopwordFilter>,
}

#[cfg(feature = "casual_tokenizer")]
impl PreprocessorBuilder<CasualTokenizer> {
    /// Creates a new `PreprocessorBuilder` over the default casual tokenizer.
    pub fn new() -> PreprocessorBuilder<CasualTokenizer> {
        PreprocessorBuilder::with_tokenizer(CasualTokenizer::new())
    }
}

#[cfg(feature = "casual_tokenizer")]
impl Default for PreprocessorBuilder<CasualTokenizer> {
    fn default() -> Self {
        PreprocessorBuilder::new()
    }
}

impl<T: Tokenizer> PreprocessorBuilder<T> {
    /// Creates a new `PreprocessorBuilder` over the given tokenizer.
    pub fn with_tokenizer(tokenizer: T) -> PreprocessorBuilder<T> {
        PreprocessorBuilder {
            url_replacement: DEFAULT_URL_TOKEN.to_string(),
            tokenizer,
            filter: None,
        }
    }

    /// Sets the token that replaces URL-like substrings. Default is [`DEFAULT_URL_TOKEN`].
    pub fn url_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.url_replacement = replacement.into();
        self
    }

    /// Sets a stopword filter to apply after tokenization. Default is no filtering.
    pub fn stopword_filter(mut self, filter: StopwordFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Builds the `Preprocessor`.
    pub fn build(self) -> Preprocessor<T> {
        Preprocessor {
            normalizer: UrlNormalizer::with_replacement(self.url_replacement),
            tokenizer: self.tokenizer,
            filter: self.filter,
        }
    }
}
