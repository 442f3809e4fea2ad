use crate::domain::model::Term;
use crate::domain::ports::TermOrder;
use crate::utils::error::{PrefixError, Result};
use crate::utils::validation::validate_non_negative;
use std::cmp::Ordering;

/// Orders terms by their first `prefix_length` characters.
///
/// Two words whose first `prefix_length` chars agree compare equal. When
/// either word is shorter than `prefix_length`, both are compared on their
/// common length and, if that agrees, the shorter word sorts first. Both
/// rules collapse into a lexicographic comparison of the two words
/// truncated to `prefix_length` chars, which makes this a total preorder.
///
/// Characters are Unicode scalar values compared by code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixOrder {
    prefix_length: usize,
}

impl PrefixOrder {
    pub fn new(prefix_length: usize) -> Self {
        Self { prefix_length }
    }

    /// Builds an ordering from a signed length, as read from user input.
    pub fn try_from_signed(prefix_length: i64) -> Result<Self> {
        validate_non_negative("prefix_length", prefix_length).map(Self::new)
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    pub fn compare(&self, v: &Term, w: &Term) -> Ordering {
        self.compare_str(&v.word, &w.word)
    }

    pub fn compare_str(&self, v: &str, w: &str) -> Ordering {
        let k = self.prefix_length;
        v.chars().take(k).cmp(w.chars().take(k))
    }

    /// Closure form for `slice::sort_by` and friends.
    pub fn comparator(self) -> impl Fn(&Term, &Term) -> Ordering + Copy {
        move |v: &Term, w: &Term| self.compare(v, w)
    }

    /// The first `prefix_length` chars of `word`, or all of it when shorter.
    pub fn prefix_of<'a>(&self, word: &'a str) -> &'a str {
        match word.char_indices().nth(self.prefix_length) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }
}

impl TermOrder for PrefixOrder {
    fn compare(&self, v: &Term, w: &Term) -> Ordering {
        PrefixOrder::compare(self, v, w)
    }
}

impl TryFrom<i64> for PrefixOrder {
    type Error = PrefixError;

    fn try_from(prefix_length: i64) -> Result<Self> {
        Self::try_from_signed(prefix_length)
    }
}

impl From<usize> for PrefixOrder {
    fn from(prefix_length: usize) -> Self {
        Self::new(prefix_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(k: usize, v: &str, w: &str) -> Ordering {
        PrefixOrder::new(k).compare(&Term::query(v), &Term::query(w))
    }

    #[test]
    fn test_zero_prefix_everything_equal() {
        assert_eq!(cmp(0, "apple", "zebra"), Ordering::Equal);
        assert_eq!(cmp(0, "", "zebra"), Ordering::Equal);
        assert_eq!(cmp(0, "", ""), Ordering::Equal);
    }

    #[test]
    fn test_shared_prefix_of_long_terms_is_equal() {
        assert_eq!(cmp(5, "apple", "applesauce"), Ordering::Equal);
        assert_eq!(cmp(5, "applesauce", "apple"), Ordering::Equal);
        assert_eq!(cmp(3, "application", "appetite"), Ordering::Equal);
    }

    #[test]
    fn test_short_term_precedes_extension() {
        assert_eq!(cmp(5, "cat", "category"), Ordering::Less);
        assert_eq!(cmp(5, "category", "cat"), Ordering::Greater);
        assert_eq!(cmp(5, "", "a"), Ordering::Less);
    }

    #[test]
    fn test_distinct_prefixes() {
        assert_eq!(cmp(2, "cat", "dog"), Ordering::Less);
        assert_eq!(cmp(2, "dog", "cat"), Ordering::Greater);
        // short case where the common part already differs
        assert_eq!(cmp(5, "cb", "category"), Ordering::Greater);
        assert_eq!(cmp(5, "ca", "cbtegory"), Ordering::Less);
    }

    #[test]
    fn test_equal_short_terms() {
        assert_eq!(cmp(5, "ab", "ab"), Ordering::Equal);
        assert_eq!(cmp(5, "ab", "ac"), Ordering::Less);
        assert_eq!(cmp(5, "ba", "ab"), Ordering::Greater);
    }

    #[test]
    fn test_exact_length_term_against_longer_is_equal() {
        // "card" has exactly K chars, so the shorter-first rule does not apply
        assert_eq!(cmp(4, "card", "cardinal"), Ordering::Equal);
        assert_eq!(cmp(4, "cardinal", "card"), Ordering::Equal);
        assert_eq!(cmp(4, "car", "cardinal"), Ordering::Less);
    }

    #[test]
    fn test_self_comparison() {
        let order = PrefixOrder::new(3);
        for word in ["", "a", "abc", "abcdef"] {
            let t = Term::new(word, 10);
            assert_eq!(order.compare(&t, &t), Ordering::Equal);
            assert_eq!(order.compare(&t, &t.clone()), Ordering::Equal);
        }
    }

    #[test]
    fn test_weight_is_ignored() {
        let order = PrefixOrder::new(3);
        assert_eq!(
            order.compare(&Term::new("dogma", 1), &Term::new("dog", 900)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compares_chars_not_bytes() {
        // 'é' is two bytes in UTF-8 but one char
        assert_eq!(cmp(2, "éa", "éaz"), Ordering::Equal);
        assert_eq!(cmp(3, "éa", "éaz"), Ordering::Less);
        assert_eq!(cmp(1, "z", "é"), Ordering::Less);
    }

    #[test]
    fn test_negative_prefix_rejected() {
        assert!(PrefixOrder::try_from_signed(-1).is_err());
        assert!(PrefixOrder::try_from(-42i64).is_err());
        assert_eq!(PrefixOrder::try_from(3i64).unwrap().prefix_length(), 3);
    }

    #[test]
    fn test_prefix_of() {
        let order = PrefixOrder::new(3);
        assert_eq!(order.prefix_of("category"), "cat");
        assert_eq!(order.prefix_of("ca"), "ca");
        assert_eq!(order.prefix_of("ééééé"), "ééé");
        assert_eq!(PrefixOrder::new(0).prefix_of("abc"), "");
    }

    #[test]
    fn test_sort_groups_prefixes() {
        let mut terms: Vec<Term> = ["catalog", "dog", "cat", "dogma", "ca", "category", "do"]
            .into_iter()
            .map(Term::query)
            .collect();
        terms.sort_by(PrefixOrder::new(3).comparator());

        let words: Vec<&str> = terms.iter().map(Term::word).collect();
        assert_eq!(words[0], "ca");
        assert_eq!(words[4], "do");
        let cats: Vec<&str> = words[1..4].to_vec();
        assert!(cats.iter().all(|w| w.starts_with("cat")));
        assert!(words[5..].iter().all(|w| w.starts_with("dog")));
    }
}
