//! Relative URL paths with `{name}` placeholders bound to a provider.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::provider::Provider;

/// Errors raised while rendering a [`UrlTemplate`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TemplateError {
    /// Raised when a placeholder has no assigned value at render time.
    #[error("placeholder '{{{placeholder}}}' in path '{path}' was never assigned")]
    Unresolved {
        /// Name of the first unresolved placeholder.
        placeholder: String,
        /// Template path containing the placeholder.
        path: String,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Splits a path into literal runs and `{name}` placeholders.
///
/// An unmatched `{` or an empty `{}` is kept as literal text.
fn tokenize(path: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = path;
    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        let after_open = tail.strip_prefix('{').unwrap_or(tail);
        match after_open.split_once('}') {
            Some((name, remaining)) if !name.is_empty() && !name.contains('{') => {
                tokens.push(Token::Placeholder(name));
                rest = remaining;
            }
            _ => {
                tokens.push(Token::Literal("{"));
                rest = after_open;
            }
        }
    }
    if !rest.is_empty() {
        tokens.push(Token::Literal(rest));
    }
    tokens
}

/// A `(provider, path)` pair whose placeholders are substituted by name.
///
/// Assignments are recorded against the original path and applied when the
/// template is rendered, so assigning the same placeholder twice overwrites
/// the earlier value and values are never re-scanned for placeholders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UrlTemplate {
    provider: Provider,
    path: String,
    assignments: BTreeMap<String, String>,
}

impl UrlTemplate {
    /// Starts a template with an empty path.
    #[must_use]
    pub const fn new(provider: Provider) -> Self {
        Self {
            provider,
            path: String::new(),
            assignments: BTreeMap::new(),
        }
    }

    /// Sets the relative path, replacing any previous path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Binds `value` to every `{name}` occurrence. The value is inserted
    /// verbatim, without URL encoding.
    #[must_use]
    pub fn assign(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.assignments.insert(name.into(), value.into());
        self
    }

    /// Returns the provider the template targets.
    #[must_use]
    pub const fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Returns the unrendered relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Lists placeholders in the path that have not been assigned yet, in
    /// order of first appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut pending: Vec<&str> = Vec::new();
        for token in tokenize(&self.path) {
            if let Token::Placeholder(name) = token
                && !self.assignments.contains_key(name)
                && !pending.contains(&name)
            {
                pending.push(name);
            }
        }
        pending
    }

    /// Renders `base_url(provider) + path` with every placeholder substituted.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Unresolved`] when a placeholder in the path
    /// has no assigned value.
    pub fn render(&self) -> Result<String, TemplateError> {
        let base = self.provider.base_url();
        let mut rendered = String::with_capacity(base.len() + self.path.len());
        rendered.push_str(base);
        for token in tokenize(&self.path) {
            match token {
                Token::Literal(text) => rendered.push_str(text),
                Token::Placeholder(name) => {
                    let value =
                        self.assignments
                            .get(name)
                            .ok_or_else(|| TemplateError::Unresolved {
                                placeholder: name.to_owned(),
                                path: self.path.clone(),
                            })?;
                    rendered.push_str(value);
                }
            }
        }
        Ok(rendered)
    }
}
