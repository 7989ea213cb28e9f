/// A tokenizer splits bio text into a sequence of tokens. Implement this trait to run the
/// preprocessing pipeline with your own tokenizer.
pub trait Tokenizer {
    /// Tokenizes the input text.
    fn tokenize(&self, input_text: &str) -> Vec<String>;
}
