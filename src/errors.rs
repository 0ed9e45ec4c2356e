//! Error types produced while loading question banks or running a quiz session.

use thiserror::Error;

/// Error returned when a quiz session cannot proceed.
///
/// Reaching the question cap or running out of eligible successors is not an error; those
/// outcomes are reported through [`Advance::Finished`](crate::Advance::Finished).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuizError {
    /// Returned when no easy, unshown question exists to open a session.
    #[error("no question available to start the quiz")]
    NoQuestionAvailable,
    /// Returned when an id does not name a question in the bank.
    #[error("question {0:?} does not exist in this bank")]
    UnknownQuestion(String),
    /// Returned when a response does not match the kind of the question it answers.
    #[error("question {id:?} expects a {expected} response")]
    ResponseMismatch {
        /// Identifier of the question being answered.
        id: String,
        /// Human readable name of the expected response kind.
        expected: &'static str,
    },
    /// Returned when an operation needs a current question but the session has not started.
    #[error("the quiz session has not been started")]
    NotStarted,
    /// Returned when the question currently shown already has a submitted answer.
    #[error("question {0:?} has already been answered")]
    AlreadyAnswered(String),
    /// Returned when a response arrives after the session stopped dispatching.
    #[error("the quiz session has finished")]
    Finished,
}

/// Error returned when a question bank is malformed.
///
/// Each variant names the offending record so content authors can fix the data.
///
/// # Examples
///
/// ```
/// use beamx::{BankError, QuestionBank};
///
/// let broken = r#"[{"id": "t1", "type": "theoretical", "text": "?", "difficulty": "easy",
///     "topic": "mechanics", "explanation": "", "maxShows": 1,
///     "options": ["a"], "correctAnswer": 3}]"#;
/// let error = QuestionBank::from_json(broken).expect_err("index out of range");
/// assert!(matches!(error, BankError::AnswerOutOfRange { .. }));
/// ```
#[derive(Debug, Error)]
pub enum BankError {
    /// Returned when two records share an id.
    #[error("question id {0:?} appears more than once")]
    DuplicateId(String),
    /// Returned when a theoretical question has no options.
    #[error("question {0:?} has no answer options")]
    EmptyOptions(String),
    /// Returned when the correct answer index does not address an option.
    #[error("question {id:?} marks option {index} correct but only has {options} options")]
    AnswerOutOfRange {
        /// Identifier of the offending question.
        id: String,
        /// Rejected answer index.
        index: usize,
        /// Number of options available.
        options: usize,
    },
    /// Returned when a question may never be shown.
    #[error("question {0:?} has a show limit of zero")]
    ZeroMaxShows(String),
    /// Returned when an interactive question has neither a force nor a modulus target.
    #[error("interactive question {0:?} has no target value")]
    MissingTarget(String),
    /// Returned when a successor list references an id that is not in the bank.
    #[error("question {from:?} lists unknown successor {to:?}")]
    DanglingSuccessor {
        /// Question holding the successor list.
        from: String,
        /// Missing successor id.
        to: String,
    },
    /// Returned when the bank JSON cannot be parsed.
    #[error("invalid question bank JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Returned when the bank file cannot be read.
    #[error("unable to read question bank: {0}")]
    Io(#[from] std::io::Error),
}
