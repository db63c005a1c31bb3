//! Filename sanitization
//!
//! Derives a filesystem-safe slug from a notebook's base name: lowercase
//! kebab-case with boilerplate words removed. Sanitizing an existing slug
//! returns it unchanged.

/// Words dropped from slugs and titles, not meaningful to notebook purpose
const STOPWORDS: &[&str] = &[
    "ai",
    "makerspace",
    "ai_makerspace",
    "assignment",
    "assignments",
    "task",
    "2025",
    "2024",
];

/// Substitute when sanitization drops every token
const FALLBACK: &str = "notebook";

/// Characters allowed in a sanitized filename
const fn is_allowed(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Return a lowercase, filename-safe slug (letters, digits, dash).
///
/// Parentheses, underscores, and dashes become token separators, stopword
/// tokens are dropped, and every remaining disallowed character maps to a
/// dash. The result never starts or ends with a dash and never contains a
/// run of dashes; an input with nothing left falls back to `notebook`.
#[must_use]
pub fn sanitize(stem: &str) -> String {
    let lowered = stem.to_lowercase().replace(['(', ')', '_', '-'], " ");

    let tokens: Vec<&str> = lowered.split_whitespace().filter(|t| !STOPWORDS.contains(t)).collect();
    let joined = if tokens.is_empty() {
        FALLBACK.to_string()
    } else {
        tokens.join("-")
    };

    let mapped: String = joined.chars().map(|c| if is_allowed(c) { c } else { '-' }).collect();

    // collapse consecutive dashes
    let mut collapsed = String::with_capacity(mapped.len());
    for c in mapped.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }

    let slug = collapsed.trim_matches('-');
    if slug.is_empty() {
        FALLBACK.to_string()
    } else {
        slug.to_string()
    }
}

/// Human-readable title for a slug: dash-split tokens, each capitalized
#[must_use]
pub fn display_title(slug: &str) -> String {
    slug.split('-').filter(|t| !t.is_empty()).map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
