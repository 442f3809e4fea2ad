use crate::domain::model::Term;
use crate::utils::error::Result;
use std::cmp::Ordering;

/// A three-way ordering over terms.
pub trait TermOrder: Send + Sync {
    fn compare(&self, v: &Term, w: &Term) -> Ordering;
}

/// Anything that can produce the term collection.
pub trait TermSource: Send + Sync {
    fn load(&self) -> Result<Vec<Term>>;
}
