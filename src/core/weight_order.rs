use crate::domain::model::Term;
use crate::domain::ports::TermOrder;
use std::cmp::Ordering;

/// Orders terms by weight. Ties compare equal regardless of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightOrder {
    /// Heaviest first.
    #[default]
    Descending,
    Ascending,
}

impl TermOrder for WeightOrder {
    fn compare(&self, v: &Term, w: &Term) -> Ordering {
        match self {
            WeightOrder::Descending => w.weight.cmp(&v.weight),
            WeightOrder::Ascending => v.weight.cmp(&w.weight),
        }
    }
}
