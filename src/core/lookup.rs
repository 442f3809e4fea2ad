//! Range lookups over a term slice already sorted by a [`PrefixOrder`].
//!
//! Every function here assumes `sorted` was sorted with the same ordering
//! that is passed in; results on an unsorted slice are unspecified.

use crate::core::prefix_order::PrefixOrder;
use crate::core::weight_order::WeightOrder;
use crate::domain::model::Term;
use crate::domain::ports::TermOrder;
use std::cmp::Ordering;
use std::ops::Range;

/// Sorts `terms` in place, keeping the input order of equal prefixes.
pub fn sort_terms(terms: &mut [Term], order: PrefixOrder) {
    terms.sort_by(order.comparator());
    tracing::debug!(
        count = terms.len(),
        prefix_length = order.prefix_length(),
        "Sorted terms by prefix"
    );
}

/// Index range of the terms comparing equal to `key`.
pub fn prefix_range(sorted: &[Term], key: &Term, order: PrefixOrder) -> Range<usize> {
    let start = sorted.partition_point(|t| order.compare(t, key) == Ordering::Less);
    let end = start + sorted[start..].partition_point(|t| order.compare(t, key) != Ordering::Greater);
    start..end
}

pub fn first_index_of(sorted: &[Term], key: &Term, order: PrefixOrder) -> Option<usize> {
    let range = prefix_range(sorted, key, order);
    (!range.is_empty()).then_some(range.start)
}

pub fn last_index_of(sorted: &[Term], key: &Term, order: PrefixOrder) -> Option<usize> {
    let range = prefix_range(sorted, key, order);
    (!range.is_empty()).then(|| range.end - 1)
}

/// Terms starting with `query`, heaviest first, at most `limit` of them.
///
/// The lookup uses the query's own length as the prefix length, so `sorted`
/// must have been sorted with a `PrefixOrder` whose length is at least the
/// query's char count.
pub fn top_matches(sorted: &[Term], query: &str, limit: usize) -> Vec<Term> {
    let order = PrefixOrder::new(query.chars().count());
    let range = prefix_range(sorted, &Term::query(query), order);

    let mut matches = sorted[range].to_vec();
    matches.sort_by(|v, w| WeightOrder::Descending.compare(v, w));
    matches.truncate(limit);

    tracing::debug!(query, found = matches.len(), "Collected top matches");
    matches
}

/// A run of sorted terms sharing the same prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixGroup<'a> {
    pub prefix: &'a str,
    pub terms: &'a [Term],
}

/// Splits a sorted slice into runs of equal prefixes.
pub fn group_by_prefix(sorted: &[Term], order: PrefixOrder) -> Vec<PrefixGroup<'_>> {
    sorted
        .chunk_by(|v, w| order.compare(v, w) == Ordering::Equal)
        .map(|run| PrefixGroup {
            prefix: order.prefix_of(&run[0].word),
            terms: run,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_terms(order: PrefixOrder) -> Vec<Term> {
        let mut terms = vec![
            Term::new("category", 40),
            Term::new("dog", 90),
            Term::new("cat", 100),
            Term::new("catalog", 70),
            Term::new("car", 20),
            Term::new("dogma", 5),
            Term::new("zebra", 1),
        ];
        sort_terms(&mut terms, order);
        terms
    }

    #[test]
    fn test_prefix_range_finds_contiguous_run() {
        let order = PrefixOrder::new(3);
        let terms = sorted_terms(order);

        let range = prefix_range(&terms, &Term::query("cat"), order);
        assert_eq!(range.len(), 3);
        assert!(terms[range].iter().all(|t| t.word.starts_with("cat")));
    }

    #[test]
    fn test_first_and_last_index() {
        let order = PrefixOrder::new(3);
        let terms = sorted_terms(order);

        let first = first_index_of(&terms, &Term::query("dog"), order).unwrap();
        let last = last_index_of(&terms, &Term::query("dog"), order).unwrap();
        assert_eq!(last - first, 1);
        assert_eq!(terms[first].word.get(..3), Some("dog"));

        assert_eq!(first_index_of(&terms, &Term::query("emu"), order), None);
        assert_eq!(last_index_of(&terms, &Term::query("emu"), order), None);
    }

    #[test]
    fn test_short_key_matches_only_itself() {
        let order = PrefixOrder::new(3);
        let terms = sorted_terms(order);
        // "ca" sorts before every "ca?" term, so nothing compares equal
        assert!(prefix_range(&terms, &Term::query("ca"), order).is_empty());
    }

    #[test]
    fn test_top_matches_ranked_by_weight() {
        let terms = sorted_terms(PrefixOrder::new(3));

        let matches = top_matches(&terms, "ca", 2);
        let words: Vec<&str> = matches.iter().map(Term::word).collect();
        assert_eq!(words, vec!["cat", "catalog"]);

        assert!(top_matches(&terms, "x", 5).is_empty());
        assert_eq!(top_matches(&terms, "", 100).len(), terms.len());
    }

    #[test]
    fn test_group_by_prefix() {
        let order = PrefixOrder::new(3);
        let terms = sorted_terms(order);
        let groups = group_by_prefix(&terms, order);

        let prefixes: Vec<&str> = groups.iter().map(|g| g.prefix).collect();
        assert_eq!(prefixes, vec!["car", "cat", "dog", "zeb"]);
        assert_eq!(groups[1].terms.len(), 3);
        assert!(group_by_prefix(&[], order).is_empty());
    }
}
