use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// The token that replaces URL-like substrings by default.
pub const DEFAULT_URL_TOKEN: &str = "<-URL->";

static URL_RE: OnceLock<Regex> = OnceLock::new();

// Deliberately permissive: bare dot-separated tokens ("pets.example.com", even "e.g") match
// without a scheme. Bios rarely carry full URLs, so the looser net is the useful one.
fn url_pattern() -> &'static Regex {
    URL_RE.get_or_init(|| {
        Regex::new(r"(https?://)?(\w*\.\w+)+([/?=&]+\w+)*").expect("URL pattern compiles")
    })
}

/// Replaces URL- and domain-like substrings in text with a fixed token.
#[derive(Debug, Clone)]
pub struct UrlNormalizer {
    replacement: String,
}

impl UrlNormalizer {
    /// Creates a normalizer that replaces matches with [`DEFAULT_URL_TOKEN`].
    pub fn new() -> UrlNormalizer {
        UrlNormalizer::with_replacement(DEFAULT_URL_TOKEN)
    }

    /// Creates a normalizer that replaces matches with the given token. The token is inserted
    /// literally.
    pub fn with_replacement(replacement: impl Into<String>) -> UrlNormalizer {
        UrlNormalizer {
            replacement: replacement.into(),
        }
    }

    /// Returns the replacement token.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every non-overlapping URL-like match in `text` with the replacement token.
    /// Text without matches is returned borrowed.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        url_pattern().replace_all(text, NoExpand(&self.replacement))
    }
}

impl Default for UrlNormalizer {
    fn default() -> Self {
        UrlNormalizer::new()
    }
}

/// Replaces URL- and domain-like substrings in `text` with [`DEFAULT_URL_TOKEN`].
pub fn normalize_urls(text: &str) -> String {
    UrlNormalizer::new().normalize(text).into_owned()
}
