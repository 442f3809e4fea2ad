pub mod engine;
pub mod lookup;
pub mod prefix_order;
pub mod report;
pub mod weight_order;

pub use crate::domain::model::Term;
pub use crate::domain::ports::{TermOrder, TermSource};
pub use crate::utils::error::Result;
