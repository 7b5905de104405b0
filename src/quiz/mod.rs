//! Quiz engine: vocabulary, built-in questions, the answer store, the
//! session profile, and the phase sequencer.

pub mod profile;
pub mod questions;
pub mod sequencer;
pub mod store;
pub mod types;

pub use profile::{CategoryInsight, Profile, TraitReading, Traits};
pub use sequencer::{Phase, PendingQuestion, Sequencer};
pub use store::{AnswerStore, SESSION_ANSWERS};
pub use types::{Answer, AnswerTag, Category, QuizStyle};
