use std::fmt::Write as _;

/// Builds a failure message.
///
/// The message is a sentence ending with a dot; context entries added here
/// take precedence over entries inherited from the validator when both use
/// the same name. Context values arrive already rendered by the
/// configuration's string mappers.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    message: String,
    context: Vec<(String, String)>,
    diff: Vec<String>,
}

impl MessageBuilder {
    /// Starts a message from its leading sentence. An empty sentence renders
    /// the context alone.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        debug_assert!(
            message.is_empty() || message.ends_with('.'),
            "message must end with a dot: {message}"
        );
        Self {
            message,
            context: Vec::new(),
            diff: Vec::new(),
        }
    }

    /// Appends a context entry, replacing any earlier entry with the same
    /// name.
    pub fn with_context(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "context name may not be empty");
        let value = value.into();
        if let Some(entry) = self.context.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.context.push((name, value));
        }
        self
    }

    /// Appends pre-rendered diff lines comparing the actual and expected
    /// values.
    pub fn with_diff(mut self, lines: Vec<String>) -> Self {
        self.diff = lines;
        self
    }

    /// Renders the message: the sentence, then aligned context lines (the
    /// builder's entries first, then any inherited entries that were not
    /// shadowed), then the diff section.
    pub fn render(&self, inherited: &[(String, String)]) -> String {
        let mut entries: Vec<(&str, &str)> = self
            .context
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        for (name, value) in inherited {
            if !entries.iter().any(|(n, _)| *n == name.as_str()) {
                entries.push((name.as_str(), value.as_str()));
            }
        }

        let mut out = self.message.clone();
        let width = entries.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        for (name, value) in entries {
            let _ = write!(out, "\n{name:<width$}: {value}");
        }
        for line in &self.diff {
            let _ = write!(out, "\n{line}");
        }
        out
    }
}
