//! Minimal RFC 6570 (level 1) URI template matching.
//!
//! Only simple `{name}` expressions are supported. A variable matches a
//! non-empty run of characters up to the next literal, and never spans a `/`.

use std::collections::HashMap;

use super::error::ResourceError;

#[derive(Debug, Clone, PartialEq)]
enum Part {
    Literal(String),
    Variable(String),
}

/// A parsed URI template.
#[derive(Debug, Clone)]
pub struct UriTemplate {
    raw: String,
    parts: Vec<Part>,
}

impl UriTemplate {
    /// Parse `raw`, rejecting unbalanced braces, empty names and adjacent
    /// variables (which could not be split unambiguously).
    pub fn parse(raw: &str) -> Result<Self, ResourceError> {
        let mut parts = Vec::new();
        let mut rest = raw;

        while !rest.is_empty() {
            match rest.find('{') {
                Some(0) => {
                    let close = rest
                        .find('}')
                        .ok_or_else(|| ResourceError::invalid_uri(raw))?;
                    let name = &rest[1..close];
                    if name.is_empty() || name.contains('{') {
                        return Err(ResourceError::invalid_uri(raw));
                    }
                    if matches!(parts.last(), Some(Part::Variable(_))) {
                        return Err(ResourceError::invalid_uri(raw));
                    }
                    parts.push(Part::Variable(name.to_string()));
                    rest = &rest[close + 1..];
                }
                Some(open) => {
                    parts.push(Part::Literal(rest[..open].to_string()));
                    rest = &rest[open..];
                }
                None => {
                    parts.push(Part::Literal(rest.to_string()));
                    rest = "";
                }
            }
        }

        if parts
            .iter()
            .any(|p| matches!(p, Part::Literal(l) if l.contains('}')))
        {
            return Err(ResourceError::invalid_uri(raw));
        }

        Ok(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Extract the variables if `uri` matches this template.
    pub fn matches(&self, uri: &str) -> Option<HashMap<String, String>> {
        let mut variables = HashMap::new();
        let mut rest = uri;
        let mut parts = self.parts.iter().peekable();

        while let Some(part) = parts.next() {
            match part {
                Part::Literal(literal) => rest = rest.strip_prefix(literal.as_str())?,
                Part::Variable(name) => {
                    let end = match parts.peek() {
                        Some(Part::Literal(next)) => rest.find(next.as_str())?,
                        _ => rest.len(),
                    };
                    let value = &rest[..end];
                    if value.is_empty() || value.contains('/') {
                        return None;
                    }
                    variables.insert(name.clone(), value.to_string());
                    rest = &rest[end..];
                }
            }
        }

        rest.is_empty().then_some(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_single_variable() {
        let template = UriTemplate::parse("users://{userId}/profile").unwrap();
        let variables = template.matches("users://42/profile").unwrap();
        assert_eq!(variables.get("userId").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_no_match() {
        let template = UriTemplate::parse("users://{userId}/profile").unwrap();
        assert!(template.matches("users:///profile").is_none());
        assert!(template.matches("users://a/b/profile").is_none());
        assert!(template.matches("users://42/settings").is_none());
        assert!(template.matches("users://42/profile/extra").is_none());
        assert!(template.matches("config://app").is_none());
    }

    #[test]
    fn test_trailing_variable() {
        let template = UriTemplate::parse("docs://{section}/{page}").unwrap();
        let variables = template.matches("docs://guide/intro").unwrap();
        assert_eq!(variables["section"], "guide");
        assert_eq!(variables["page"], "intro");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(UriTemplate::parse("users://{userId/profile").is_err());
        assert!(UriTemplate::parse("users://{}/profile").is_err());
        assert!(UriTemplate::parse("users://{a}{b}").is_err());
        assert!(UriTemplate::parse("users://a}/profile").is_err());
    }
}
