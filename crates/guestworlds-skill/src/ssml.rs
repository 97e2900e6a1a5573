//! SSML speech builder.

use crate::envelope::SkillResponse;

/// Strength of a `<break>` between phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakStrength {
    /// A short, comma-like pause.
    Weak,
    /// A sentence-like pause.
    Strong,
}

impl BreakStrength {
    fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Strong => "strong",
        }
    }
}

/// Accumulates phrases and pauses into `<speak>` markup, keeping a plain
/// text rendering of the same phrases for the companion card.
#[derive(Debug, Clone)]
pub struct SsmlBuilder {
    markup: String,
    text: String,
}

impl Default for SsmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SsmlBuilder {
    /// Starts a `<speak>` document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            markup: String::from("<speak>"),
            text: String::new(),
        }
    }

    /// Appends a phrase followed by a space.
    #[must_use]
    pub fn say(mut self, phrase: &str) -> Self {
        push_escaped(&mut self.markup, phrase);
        self.markup.push(' ');

        if !self.text.is_empty() && !phrase.starts_with(['.', ',']) {
            self.text.push(' ');
        }
        self.text.push_str(phrase.trim());
        self
    }

    /// Appends a pause of the given strength.
    #[must_use]
    pub fn pause(mut self, strength: BreakStrength) -> Self {
        self.markup
            .push_str(&format!("<break strength='{}'/> ", strength.as_str()));
        self
    }

    /// Appends a pause of a fixed length.
    #[must_use]
    pub fn pause_millis(mut self, millis: u32) -> Self {
        self.markup.push_str(&format!("<break time='{millis}ms'/> "));
        self
    }

    /// Closes the document and returns `(markup, plain_text)`.
    #[must_use]
    pub fn build(mut self) -> (String, String) {
        self.markup.push_str("</speak>");
        (self.markup, self.text)
    }

    /// Closes the document into a session-ending response titled `title`.
    #[must_use]
    pub fn into_response(self, title: &str) -> SkillResponse {
        let (markup, text) = self.build();
        SkillResponse::ssml(title, markup, text)
    }
}

fn push_escaped(out: &mut String, phrase: &str) {
    for ch in phrase.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
}
