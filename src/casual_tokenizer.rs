use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

use crate::tokenizer::Tokenizer;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
static HANDLE_RE: OnceLock<Regex> = OnceLock::new();
static EMOTICON_RE: OnceLock<Regex> = OnceLock::new();

// Branch order matters: earlier alternatives win at the same position.
fn token_pattern() -> &'static Regex {
    TOKEN_RE.get_or_init(|| {
        Regex::new(
            r"(?x)
            https?://\S+                                   # URLs, kept whole
            | <[^>\s]+>                                    # angle-bracket tokens such as <-URL->
            | @\w+                                         # handles
            | \#\w+                                        # hashtags
            | [<>]?[:;=8][\-o*']?[\)\(\]\[dDpP/:}{@|\\]    # common ASCII emoticons
            | \w+(?:['\-]\w+)*                             # words, keeping inner apostrophes and hyphens
            | \.{2,}                                       # ellipses
            | \S                                           # any other symbol, one at a time
            ",
        )
        .expect("token pattern compiles")
    })
}

fn handle_pattern() -> &'static Regex {
    HANDLE_RE.get_or_init(|| Regex::new(r"@\w+").expect("handle pattern compiles"))
}

fn emoticon_pattern() -> &'static Regex {
    EMOTICON_RE.get_or_init(|| {
        Regex::new(r"^[<>]?[:;=8][\-o*']?[\)\(\]\[dDpP/:}{@|\\]$").expect("emoticon pattern compiles")
    })
}

// Runs longer than three identical graphemes shrink to exactly three, so "soooo" and "sooooooo"
// tokenize alike. Grapheme-based so repeated emoji collapse too.
fn reduce_lengthening(text: &str) -> String {
    let mut reduced = String::with_capacity(text.len());
    let mut previous: Option<&str> = None;
    let mut run = 0usize;
    for grapheme in text.graphemes(true) {
        if previous == Some(grapheme) {
            run += 1;
        } else {
            previous = Some(grapheme);
            run = 1;
        }
        if run <= 3 {
            reduced.push_str(grapheme);
        }
    }
    reduced
}

/// A tokenizer for casual social-media text. It keeps @handles, #hashtags, URLs and emoticons
/// as standalone tokens, collapses elongated character runs, and lowercases everything except
/// emoticons. Each of those behaviours can be toggled through the builder.
#[derive(Debug, Clone)]
pub struct CasualTokenizer {
    preserve_case: bool,
    reduce_len: bool,
    strip_handles: bool,
}

impl CasualTokenizer {
    /// Creates a new `CasualTokenizer` with the default settings.
    pub fn new() -> CasualTokenizer {
        Self::builder().build()
    }

    /// Creates a new `CasualTokenizerBuilder` that you can use to customise the tokenizer.
    pub fn builder() -> CasualTokenizerBuilder {
        CasualTokenizerBuilder::new()
    }

    fn fold_case(&self, token: &str) -> String {
        if self.preserve_case || emoticon_pattern().is_match(token) {
            token.to_string()
        } else {
            token.to_lowercase()
        }
    }

    fn tokenize(&self, input_text: &str) -> Vec<String> {
        if input_text.is_empty() {
            return Vec::new();
        }
        // Strip handles
        let text: Cow<str> = if self.strip_handles {
            handle_pattern().replace_all(input_text, " ")
        } else {
            Cow::Borrowed(input_text)
        };
        // Shorten elongated runs
        let text: Cow<str> = if self.reduce_len {
            Cow::Owned(reduce_lengthening(&text))
        } else {
            text
        };
        // Split and case-fold
        token_pattern()
            .find_iter(&text)
            .map(|token| self.fold_case(token.as_str()))
            .collect()
    }
}

impl Tokenizer for CasualTokenizer {
    fn tokenize(&self, input_text: &str) -> Vec<String> {
        CasualTokenizer::tokenize(self, input_text)
    }
}

impl Default for CasualTokenizer {
    fn default() -> Self {
        CasualTokenizer::new()
    }
}

/// A builder for [`CasualTokenizer`].
#[derive(Debug, Clone)]
pub struct CasualTokenizerBuilder {
    preserve_case: bool,
    reduce_len: bool,
    strip_handles: bool,
}

impl Default for CasualTokenizerBuilder {
    fn default() -> Self {
        CasualTokenizerBuilder::new()
    }
}

impl CasualTokenizerBuilder {
    /// Creates a new `CasualTokenizerBuilder`.
    pub fn new() -> CasualTokenizerBuilder {
        CasualTokenizerBuilder {
            preserve_case: false,
            reduce_len: true,
            strip_handles: false,
        }
    }

    /// Keeps the original casing of tokens instead of lowercasing them. Emoticons keep their
    /// casing either way. Default is `false`.
    pub fn preserve_case(mut self, preserve_case: bool) -> Self {
        self.preserve_case = preserve_case;
        self
    }

    /// Enables or disables collapsing elongated character runs.
    /// (With reduction, 'sooooo' -> 'sooo', 'loooooveee' -> 'loooveee', etc.)
    /// Default is `true`.
    pub fn reduce_len(mut self, reduce_len: bool) -> Self {
        self.reduce_len = reduce_len;
        self
    }

    /// Removes @handles from the text before tokenizing. Default is `false`, keeping each
    /// handle as a standalone token.
    pub fn strip_handles(mut self, strip_handles: bool) -> Self {
        self.strip_handles = strip_handles;
        self
    }

    /// Builds the `CasualTokenizer`.
    pub fn build(self) -> CasualTokenizer {
        CasualTokenizer {
            preserve_case: self.preserve_case,
            reduce_len: self.reduce_len,
            strip_handles: self.strip_handles,
        }
    }
}
