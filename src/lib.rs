#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod bank;
mod deflection;
mod errors;
mod material;
mod mesh;
mod picker;
mod question;
mod quiz;

pub use crate::bank::QuestionBank;
pub use crate::deflection::{
    deflection, visual_deflection, BeamGeometry, DeflectionProfile, SimulationInputs,
    FORCE_RANGE, MODULUS_RANGE, VISUAL_SCALE,
};
pub use crate::errors::{BankError, QuizError};
pub use crate::material::{material_info, MaterialInfo};
pub use crate::mesh::{force_arrow_scale, BeamMesh, VERTICES_PER_STATION};
pub use crate::picker::{Picker, RngPicker};
pub use crate::question::{
    Difficulty, KindTag, Question, QuestionKind, Response, Successors, Tolerance, Topic, Verdict,
};
pub use crate::quiz::{
    Advance, AnswerRecord, Completion, DifficultyByTopic, QuizConfig, QuizSession, SessionSummary,
};
