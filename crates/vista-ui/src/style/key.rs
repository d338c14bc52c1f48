use std::fmt;

/// A style attribute key, pre-split at authoring time.
///
/// `"background_color"` addresses the styled view itself;
/// `"title_label.text_color"` addresses attribute `text_color` on the child
/// named `title_label`. Segments are split once when the theme is built so
/// stylization never parses strings.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct StyleKey {
    path: Vec<String>,
    attr: String,
}

impl StyleKey {
    /// Parses a dotted key. Empty segments are ignored.
    pub fn parse(key: &str) -> Self {
        let mut segments: Vec<String> = key
            .split('.')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let attr = segments.pop().unwrap_or_default();
        Self { path: segments, attr }
    }

    /// A key on the styled view itself.
    pub fn attr(name: impl Into<String>) -> Self {
        Self { path: Vec::new(), attr: name.into() }
    }

    /// The leaf attribute name.
    pub fn name(&self) -> &str {
        &self.attr
    }

    /// Child names to walk before applying the attribute; empty for own attributes.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_path(&self) -> bool {
        !self.path.is_empty()
    }
}

impl From<&str> for StyleKey {
    fn from(key: &str) -> Self {
        StyleKey::parse(key)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{segment}.")?;
        }
        f.write_str(&self.attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_has_no_path() {
        let k = StyleKey::parse("background_color");
        assert!(!k.is_path());
        assert_eq!(k.name(), "background_color");
        assert_eq!(k, StyleKey::attr("background_color"));
    }

    #[test]
    fn dotted_key_splits_into_segments() {
        let k = StyleKey::parse("dialog.title_label.text_color");
        assert_eq!(k.path(), ["dialog".to_string(), "title_label".to_string()]);
        assert_eq!(k.name(), "text_color");
        assert_eq!(k.to_string(), "dialog.title_label.text_color");
    }

    #[test]
    fn stray_dots_are_ignored() {
        assert_eq!(StyleKey::parse(".label..padding"), StyleKey::parse("label.padding"));
    }
}
