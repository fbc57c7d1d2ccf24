/// One position in the original-language tier of an aligned unit.
///
/// `original` is never empty; the gloss fields may be, either because the
/// annotation tiers ran short or because the token is a pure discourse
/// marker carrying no per-token annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedToken {
    original: String,
    english_gloss: String,
    chinese_gloss: String,
    is_discourse_marker: bool,
}

impl AlignedToken {
    pub fn new(
        original: &str,
        english_gloss: &str,
        chinese_gloss: &str,
        is_discourse_marker: bool,
    ) -> Self {
        Self {
            original: original.to_string(),
            english_gloss: english_gloss.to_string(),
            chinese_gloss: chinese_gloss.to_string(),
            is_discourse_marker,
        }
    }

    /// Get a reference to the token's original-language form.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get a reference to the token's English gloss.
    pub fn english_gloss(&self) -> &str {
        &self.english_gloss
    }

    /// Get a reference to the token's Chinese gloss.
    pub fn chinese_gloss(&self) -> &str {
        &self.chinese_gloss
    }

    pub fn is_discourse_marker(&self) -> bool {
        self.is_discourse_marker
    }
}

/// Exchange form: the site format carries glosses as bare
/// `(ori, en, ch)` tuples, without the marker flag.
impl From<&AlignedToken> for (String, String, String) {
    fn from(t: &AlignedToken) -> Self {
        (
            t.original.clone(),
            t.english_gloss.clone(),
            t.chinese_gloss.clone(),
        )
    }
}
