//! Free-text location resolver.
//!
//! Maps user input such as `"China"`, `"usa"`, or `"Port of Rotterdam"` to a
//! location in the route graph.  Two passes, first hit wins:
//!
//! 1. **Names**: case-insensitive, in table order: the input contains a
//!    location's display name, or the display name contains the input.
//! 2. **Aliases**: in declared order: the first alias key found inside the
//!    lowercased input.
//!
//! No hit is `None`, not an error.
//!
//! # Word starts
//!
//! A substring only counts when it begins at a word start (start of string or
//! after a non-alphanumeric character).  Without this, `"usa"` would match
//! B**usa**n and resolve to Busan instead of reaching the `usa` alias.

use sc_core::LocationId;
use sc_network::RouteGraph;

use crate::{WorldError, WorldResult};

/// Which pass produced a [`Resolution`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchSource {
    Name,
    Alias,
}

/// A successful resolution and how it was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub id:     LocationId,
    pub source: MatchSource,
}

/// Resolves free text against a fixed set of names and aliases.
///
/// Pure and immutable after construction; safe to share across threads.
#[derive(Clone, Debug)]
pub struct LocationResolver {
    /// Lowercased display names, indexed by `LocationId`.
    names:   Vec<String>,
    /// Lowercased alias → target, in lookup order.
    aliases: Vec<(String, LocationId)>,
}

impl LocationResolver {
    /// Build a resolver for `graph` with `(alias, location key)` pairs.
    ///
    /// Fails if an alias targets a key that is not in the graph.
    pub fn new<'a, I>(graph: &RouteGraph, aliases: I) -> WorldResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let names = graph
            .locations
            .iter()
            .map(|loc| loc.name.to_lowercase())
            .collect();

        let aliases = aliases
            .into_iter()
            .map(|(alias, key)| {
                graph
                    .id_of(key)
                    .map(|id| (alias.trim().to_lowercase(), id))
                    .ok_or_else(|| WorldError::UnknownAliasTarget {
                        alias: alias.to_owned(),
                        key:   key.to_owned(),
                    })
            })
            .collect::<WorldResult<Vec<_>>>()?;

        Ok(Self { names, aliases })
    }

    /// Resolve `input` to a location, or `None` if nothing matches.
    pub fn resolve(&self, input: &str) -> Option<LocationId> {
        self.resolve_with_source(input).map(|r| r.id)
    }

    /// Like [`resolve`](Self::resolve) but also reports which pass matched.
    pub fn resolve_with_source(&self, input: &str) -> Option<Resolution> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let by_name = self.names.iter().position(|name| {
            !name.is_empty()
                && (contains_at_word_start(&needle, name) || contains_at_word_start(name, &needle))
        });
        if let Some(i) = by_name {
            return Some(Resolution { id: LocationId(i as u16), source: MatchSource::Name });
        }

        self.aliases
            .iter()
            .find(|(alias, _)| !alias.is_empty() && contains_at_word_start(&needle, alias))
            .map(|&(_, id)| Resolution { id, source: MatchSource::Alias })
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

/// `true` if `needle` occurs in `haystack` starting at a word start.
fn contains_at_word_start(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(i, _)| {
        haystack[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric())
    })
}

#[cfg(test)]
mod word_start {
    use super::contains_at_word_start;

    #[test]
    fn matches_only_at_word_starts() {
        assert!(contains_at_word_start("usa", "usa"));
        assert!(contains_at_word_start("made in usa", "usa"));
        assert!(contains_at_word_start("port of rotterdam", "rotterdam"));
        assert!(contains_at_word_start("new york", "york"));
        assert!(contains_at_word_start("los angeles, ca", "los angeles"));
        assert!(!contains_at_word_start("busan", "usa"));
        assert!(!contains_at_word_start("ork", "york"));
    }

    #[test]
    fn later_occurrence_can_match() {
        // First "usa" is mid-word, second is a word start.
        assert!(contains_at_word_start("busan-usa", "usa"));
    }

    #[test]
    fn non_ascii_boundaries() {
        assert!(contains_at_word_start("são paulo", "paulo"));
        assert!(contains_at_word_start("são paulo", "são"));
    }
}
