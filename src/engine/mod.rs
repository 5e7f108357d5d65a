//! Sequence engine: the bounded sequence, the recall state machine and
//! the evaluation of submitted directions.

pub mod evaluation;
pub mod sequence;

pub use evaluation::{Evaluation, Outcome};
pub use sequence::{Phase, SequenceEngine};
