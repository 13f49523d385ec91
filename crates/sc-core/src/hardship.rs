//! Hardship: the cost unit of a connection.
//!
//! Lower is safer.  Weights are non-negative integers by construction; the
//! safest route is the path with the smallest accumulated hardship.

/// Non-negative edge weight.
pub type Hardship = u32;

/// Sum a sequence of hardships, returning `None` on overflow.
///
/// Route totals on a world map are tiny; overflow only happens with
/// hand-edited tables carrying absurd weights, and those should not silently
/// wrap into a "safe" route.
pub fn total_hardship<I>(weights: I) -> Option<Hardship>
where
    I: IntoIterator<Item = Hardship>,
{
    weights
        .into_iter()
        .try_fold(0 as Hardship, |acc, w| acc.checked_add(w))
}
