//! URL metadata extraction for the link form.
//!
//! A pure, best-effort heuristic over the URL string: pull the product
//! slug out of the path and turn it into a readable description. Advisory
//! only — the caller never overwrites user-entered fields with it, and a
//! failure never blocks form submission.

use tracing::warn;
use url::Url;

use crate::types::errors::ExtractError;

/// Path segments that mark the end of a product slug on common shop URLs
/// (e.g. `/apple-iphone-15-pro/p/abc123`).
const SLUG_TERMINATORS: &[&str] = &["p", "buy"];

/// Metadata derived from a product URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMetadata {
    /// The raw hyphen-separated slug the description was derived from.
    pub slug: String,
    /// Human-readable phrase for the description field.
    pub description: String,
}

/// Derives metadata from a pasted product URL.
///
/// The slug is the non-empty path segment immediately preceding a `/p` or
/// `/buy` segment, falling back to the final non-empty segment. Hyphens
/// become spaces and the first character is uppercased.
///
/// # Errors
/// `ExtractError::InvalidUrl` when the string does not parse;
/// `ExtractError::NoSlug` when the path has no usable segment. Both are
/// non-fatal to the caller.
pub fn extract(input: &str) -> Result<UrlMetadata, ExtractError> {
    let parsed = Url::parse(input).map_err(|e| {
        warn!(url = input, error = %e, "failed to parse product URL");
        ExtractError::InvalidUrl(e.to_string())
    })?;

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let slug = slug_from_segments(&segments).ok_or(ExtractError::NoSlug)?;

    Ok(UrlMetadata {
        slug: slug.to_string(),
        description: humanize_slug(slug),
    })
}

/// Picks the slug segment: the one before a terminator segment when
/// present, otherwise the last segment.
fn slug_from_segments<'a>(segments: &[&'a str]) -> Option<&'a str> {
    for (i, seg) in segments.iter().enumerate() {
        if SLUG_TERMINATORS.contains(seg) && i > 0 {
            return Some(segments[i - 1]);
        }
    }
    segments.last().copied()
}

/// Converts a hyphen-separated slug into a space-separated phrase with
/// the first letter uppercased.
fn humanize_slug(slug: &str) -> String {
    let phrase = slug.replace('-', " ");
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => phrase,
    }
}
