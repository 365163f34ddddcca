/// Slot template runtime: parsing and filling.
///
/// Templates are parsed once at library load. A template that
/// references an unknown or out-of-context placeholder is rejected at
/// parse time, so filling can only fail if a hand-built template
/// bypasses the parser.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("unknown placeholder '{0}'")]
    UnknownPlaceholder(String),
    #[error("placeholder '{placeholder}' is not valid in a {context} template")]
    DisallowedPlaceholder {
        placeholder: &'static str,
        context: &'static str,
    },
    #[error("empty braces")]
    EmptyBraces,
    #[error("nested braces are not allowed")]
    NestedBraces,
    #[error("unclosed brace")]
    UnclosedBrace,
    #[error("unmatched closing brace")]
    UnmatchedClose,
    #[error("no value bound for placeholder '{0}'")]
    UnboundSlot(&'static str),
}

/// A named placeholder a template may reference.
///
/// Beat templates draw from the four story slots; title templates
/// draw from the two prompt-token slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Character,
    Setting,
    Object,
    Conflict,
    First,
    Second,
}

impl SlotKind {
    /// Slots valid in beat templates.
    pub const STORY: [SlotKind; 4] = [
        Self::Character,
        Self::Setting,
        Self::Object,
        Self::Conflict,
    ];

    /// Slots valid in title templates.
    pub const TITLE: [SlotKind; 2] = [Self::First, Self::Second];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Setting => "setting",
            Self::Object => "object",
            Self::Conflict => "conflict",
            Self::First => "first",
            Self::Second => "second",
        }
    }

    fn parse(name: &str) -> Option<SlotKind> {
        match name {
            "character" => Some(Self::Character),
            "setting" => Some(Self::Setting),
            "object" => Some(Self::Object),
            "conflict" => Some(Self::Conflict),
            "first" => Some(Self::First),
            "second" => Some(Self::Second),
            _ => None,
        }
    }
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A slot reference: `{character}`, `{first}`, ...
    Slot(SlotKind),
}

/// A parsed template, a sequence of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub segments: Vec<TemplateSegment>,
}

impl Template {
    /// Parse a beat template. Only the four story slots are allowed.
    pub fn parse_beat(input: &str) -> Result<Template, TemplateError> {
        Self::parse_with(input, &SlotKind::STORY, "beat")
    }

    /// Parse a title template. Only `{first}` and `{second}` are allowed.
    pub fn parse_title(input: &str) -> Result<Template, TemplateError> {
        Self::parse_with(input, &SlotKind::TITLE, "title")
    }

    /// Parse a template string into a sequence of segments.
    ///
    /// Syntax:
    /// - `{name}` → `Slot` (must name a slot in `allowed`)
    /// - `{{` / `}}` → literal brace
    /// - Everything else → `Literal`
    fn parse_with(
        input: &str,
        allowed: &[SlotKind],
        context: &'static str,
    ) -> Result<Template, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;

        while i < len {
            if chars[i] == '{' {
                // Escaped brace
                if i + 1 < len && chars[i + 1] == '{' {
                    literal_buf.push('{');
                    i += 2;
                    continue;
                }

                // Flush any accumulated literal
                if !literal_buf.is_empty() {
                    segments.push(TemplateSegment::Literal(literal_buf.clone()));
                    literal_buf.clear();
                }

                // Find the closing brace
                let start = i + 1;
                let mut end = start;
                loop {
                    if end == len {
                        return Err(TemplateError::UnclosedBrace);
                    }
                    match chars[end] {
                        '{' => return Err(TemplateError::NestedBraces),
                        '}' => break,
                        _ => end += 1,
                    }
                }

                let name: String = chars[start..end].iter().collect();
                if name.is_empty() {
                    return Err(TemplateError::EmptyBraces);
                }

                let kind = SlotKind::parse(&name)
                    .ok_or(TemplateError::UnknownPlaceholder(name))?;
                if !allowed.contains(&kind) {
                    return Err(TemplateError::DisallowedPlaceholder {
                        placeholder: kind.name(),
                        context,
                    });
                }

                segments.push(TemplateSegment::Slot(kind));
                i = end + 1;
            } else if chars[i] == '}' {
                // Escaped closing brace
                if i + 1 < len && chars[i + 1] == '}' {
                    literal_buf.push('}');
                    i += 2;
                    continue;
                }
                return Err(TemplateError::UnmatchedClose);
            } else {
                literal_buf.push(chars[i]);
                i += 1;
            }
        }

        if !literal_buf.is_empty() {
            segments.push(TemplateSegment::Literal(literal_buf));
        }

        Ok(Template { segments })
    }

    /// Fill slot references through `resolve`, concatenating segments.
    ///
    /// `resolve` returning `None` for a referenced slot is an error;
    /// parser-built templates can never hit it when filled with the
    /// matching slot family.
    pub fn fill<'a, F>(&self, resolve: F) -> Result<String, TemplateError>
    where
        F: Fn(SlotKind) -> Option<&'a str>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(text),
                TemplateSegment::Slot(kind) => {
                    let value =
                        resolve(*kind).ok_or(TemplateError::UnboundSlot(kind.name()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }

    /// The slot kinds this template references, in order of appearance.
    pub fn slots(&self) -> impl Iterator<Item = SlotKind> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Slot(kind) => Some(*kind),
            TemplateSegment::Literal(_) => None,
        })
    }
}
