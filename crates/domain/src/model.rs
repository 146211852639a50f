// crates/domain/src/model.rs

/// A validated domain split into its fixed base and the labels that may be
/// reordered in front of it.
///
/// The base is always the last two labels. This is a naive heuristic rather
/// than a public-suffix lookup: `site.co.uk` has base `co.uk` and movable
/// label `site`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDomain<'a> {
    pub base: String,
    pub movable: Vec<&'a str>,
}

impl<'a> SplitDomain<'a> {
    /// Splits `domain` on `.`; returns `None` when fewer than two labels exist.
    #[must_use]
    pub fn parse(domain: &'a str) -> Option<Self> {
        let labels: Vec<&str> = domain.split('.').collect();
        let split_at = labels.len().checked_sub(2)?;
        let (movable, base) = labels.split_at(split_at);
        Some(Self {
            base: base.join("."),
            movable: movable.to_vec(),
        })
    }
}
