//! Exam session core: question sampling and the attempt state machine.

mod exam;
mod sampler;

pub use exam::{ExamSession, Phase, EXAM_SECONDS, EXAM_SIZE};
pub use sampler::{sample, sample_with};
