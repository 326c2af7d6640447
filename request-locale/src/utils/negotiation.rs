//! Language negotiation
//!
//! Matches an `Accept-Language` style value against the set of locales the
//! service can serve.
//! Accepts: "fr-FR", "fr", "fr-CA,fr;q=0.8,en;q=0.5", "FR-fr", etc.

use std::collections::BTreeSet;

/// One language range from an `Accept-Language` value
#[derive(Debug, Clone, PartialEq)]
struct LanguageRange<'a> {
    tag: &'a str,
    quality: f32,
}

impl<'a> LanguageRange<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let mut parts = raw.split(';');
        let tag = parts.next()?.trim();
        if tag.is_empty() {
            return None;
        }

        let mut quality = 1.0;
        for param in parts {
            if let Some((key, value)) = param.split_once('=')
                && key.trim().eq_ignore_ascii_case("q")
                && let Ok(q) = value.trim().parse::<f32>()
            {
                quality = q.clamp(0.0, 1.0);
            }
        }

        Some(Self { tag, quality })
    }

    fn primary(&self) -> &'a str {
        primary_subtag(self.tag)
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Parse ranges ordered by descending quality; ties keep header order.
fn parse_ranges(value: &str) -> Vec<LanguageRange<'_>> {
    let mut ranges: Vec<LanguageRange<'_>> = value
        .split(',')
        .filter_map(LanguageRange::parse)
        .filter(|range| range.quality > 0.0 && range.tag != "*")
        .collect();

    ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    ranges
}

/// Pick the best supported locale for `candidate`, or `fallback` if nothing matches.
///
/// Each range is tried in priority order: an exact (case-insensitive) tag
/// match wins first, then the first supported tag sharing the primary
/// language subtag. The result is always a member of `supported` or
/// `fallback` itself.
pub fn best_match(candidate: &str, supported: &BTreeSet<String>, fallback: &str) -> String {
    for range in parse_ranges(candidate) {
        if let Some(exact) = supported.iter().find(|tag| tag.eq_ignore_ascii_case(range.tag)) {
            return exact.clone();
        }

        let primary = range.primary();
        if let Some(related) = supported
            .iter()
            .find(|tag| primary_subtag(tag).eq_ignore_ascii_case(primary))
        {
            return related.clone();
        }
    }

    fallback.to_string()
}
