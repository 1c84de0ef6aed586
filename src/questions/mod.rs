//! Dynamic clarification questions: static catalog, generation, and strict
//! answer application.

mod answers;
mod catalog;
mod generator;

pub use answers::apply_answers;
pub use catalog::{find_question, QuestionDef, QuestionOptionDef, QUESTION_CATALOG};
pub use generator::{generate_questions, Question, QuestionOption};
