use std::collections::HashMap;

use nullnet_liberror::{location, Error, ErrorHandler, Location};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed URL pattern. Segments starting with `:` capture the
/// corresponding path segment under that name (e.g. `/device/:id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, Error> {
        if !pattern.starts_with('/') {
            log::error!("Route pattern '{pattern}' does not start with '/'");
            return Err("Route patterns must start with '/'").handle_err(location!());
        }

        let mut segments = Vec::new();
        for part in pattern.split('/').filter(|part| !part.is_empty()) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    log::error!("Route pattern '{pattern}' has an unnamed parameter segment");
                    return Err("Route pattern parameters must be named").handle_err(location!());
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(part.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Matches a concrete path against the pattern, yielding the captured
    /// parameters. Query strings and fragments are not part of the match.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}
