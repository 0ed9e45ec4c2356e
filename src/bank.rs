//! Arena of question templates keyed by id.
//!
//! Successor lists hold plain ids that are resolved through the bank when a session
//! advances, so cycles between questions need no special handling.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::debug;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use crate::errors::BankError;
use crate::question::{Difficulty, Question, QuestionKind};

/// Questions shipped with the crate.
const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

/// Immutable collection of question templates.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    /// Templates in load order.
    questions: Vec<Question>,
    /// Position of each id in `questions`.
    index: HashMap<String, usize>,
}

impl QuestionBank {
    /// Build a bank, checking every record.
    ///
    /// Successor ids are not resolved here; see [`QuestionBank::validate_links`].
    ///
    /// # Errors
    ///
    /// Returns [`BankError`] for duplicate ids, zero show limits, theoretical questions
    /// without options or with an out of range answer, and interactive questions with no
    /// target.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            check_record(question)?;
            if index.insert(question.id.clone(), position).is_some() {
                return Err(BankError::DuplicateId(question.id.clone()));
            }
        }
        debug!("loaded question bank with {} questions", questions.len());
        Ok(Self { questions, index })
    }

    /// Parse a bank from a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::Json`] for malformed JSON and any error of [`QuestionBank::new`].
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    /// Read and parse a bank from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::Io`] when the file cannot be read and any error of
    /// [`QuestionBank::from_json`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BankError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The bank bundled with the crate.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data is malformed.
    ///
    /// # Examples
    /// ```
    /// use beamx::QuestionBank;
    ///
    /// let bank = QuestionBank::builtin().expect("built-in bank is valid");
    /// assert!(bank.get("t1").is_some());
    /// bank.validate_links().expect("all successors resolve");
    /// ```
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Return the number of questions in the bank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Return `true` when the bank holds no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.questions[position])
    }

    /// Iterate over the questions in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Every `(from, to)` successor reference whose target is missing.
    #[must_use]
    pub fn dangling_successors(&self) -> Vec<(&str, &str)> {
        self.questions
            .iter()
            .flat_map(|question| {
                question
                    .successors(true)
                    .iter()
                    .chain(question.successors(false))
                    .filter(move |to| !self.index.contains_key(to.as_str()))
                    .map(move |to| (question.id.as_str(), to.as_str()))
            })
            .collect()
    }

    /// Check that every successor id names a question in the bank.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::DanglingSuccessor`] for the first unresolved reference.
    pub fn validate_links(&self) -> Result<(), BankError> {
        match self.dangling_successors().first() {
            Some(&(from, to)) => Err(BankError::DanglingSuccessor {
                from: from.to_string(),
                to: to.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Directed graph of resolved successor links.
    ///
    /// Edge weights record the outcome that leads along the edge; when both outcomes name
    /// the same successor the incorrect outcome wins.
    #[must_use]
    pub fn successor_graph(&self) -> DiGraphMap<&str, bool> {
        let mut graph = DiGraphMap::new();
        for question in &self.questions {
            graph.add_node(question.id.as_str());
        }
        for question in &self.questions {
            for outcome in [true, false] {
                for to in question.successors(outcome) {
                    if let Some(target) = self.get(to) {
                        graph.add_edge(question.id.as_str(), target.id.as_str(), outcome);
                    }
                }
            }
        }
        graph
    }

    /// Ids of questions that no path of successor links reaches from an easy question.
    ///
    /// Easy questions are the possible opening questions of a session.
    #[must_use]
    pub fn unreachable_from_entry(&self) -> Vec<&str> {
        let graph = self.successor_graph();
        let mut reached = HashSet::new();
        let mut dfs = Dfs::empty(&graph);
        for entry in self
            .questions
            .iter()
            .filter(|question| question.difficulty == Difficulty::Easy)
        {
            dfs.move_to(entry.id.as_str());
            while let Some(id) = dfs.next(&graph) {
                reached.insert(id);
            }
        }
        self.questions
            .iter()
            .map(|question| question.id.as_str())
            .filter(|id| !reached.contains(id))
            .collect()
    }
}

/// Check the invariants of a single record.
fn check_record(question: &Question) -> Result<(), BankError> {
    if question.max_shows == 0 {
        return Err(BankError::ZeroMaxShows(question.id.clone()));
    }
    match &question.kind {
        QuestionKind::Theoretical {
            options,
            correct_answer_index,
        } => {
            if options.is_empty() {
                return Err(BankError::EmptyOptions(question.id.clone()));
            }
            if *correct_answer_index >= options.len() {
                return Err(BankError::AnswerOutOfRange {
                    id: question.id.clone(),
                    index: *correct_answer_index,
                    options: options.len(),
                });
            }
        }
        QuestionKind::Interactive {
            target_force,
            target_elastic_modulus,
            ..
        } => {
            if target_force.is_none() && target_elastic_modulus.is_none() {
                return Err(BankError::MissingTarget(question.id.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Successors, Topic};

    fn theoretical(id: &str, correct: &[&str], incorrect: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {id}"),
            difficulty: Difficulty::Easy,
            topic: Topic::Mechanics,
            explanation: String::new(),
            max_shows: 1,
            next_questions: Some(Successors {
                correct: correct.iter().map(ToString::to_string).collect(),
                incorrect: incorrect.iter().map(ToString::to_string).collect(),
            }),
            kind: QuestionKind::Theoretical {
                options: vec!["yes".to_string(), "no".to_string()],
                correct_answer_index: 0,
            },
        }
    }

    #[test]
    fn builtin_bank_is_consistent() {
        let bank = QuestionBank::builtin().expect("built-in bank parses");
        assert_eq!(bank.len(), 12);
        bank.validate_links().expect("every successor resolves");
        assert!(bank.unreachable_from_entry().is_empty());
        for topic in Topic::ALL {
            assert!(bank.iter().any(|question| question.topic == topic));
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let error = QuestionBank::new(vec![theoretical("a", &[], &[]), theoretical("a", &[], &[])])
            .expect_err("duplicate rejected");
        assert!(matches!(error, BankError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn record_invariants_are_checked() {
        let mut empty = theoretical("a", &[], &[]);
        empty.kind = QuestionKind::Theoretical {
            options: Vec::new(),
            correct_answer_index: 0,
        };
        assert!(matches!(
            QuestionBank::new(vec![empty]),
            Err(BankError::EmptyOptions(_))
        ));

        let mut never = theoretical("b", &[], &[]);
        never.max_shows = 0;
        assert!(matches!(
            QuestionBank::new(vec![never]),
            Err(BankError::ZeroMaxShows(_))
        ));

        let mut aimless = theoretical("c", &[], &[]);
        aimless.kind = QuestionKind::Interactive {
            target_force: None,
            target_elastic_modulus: None,
            tolerance: Default::default(),
        };
        assert!(matches!(
            QuestionBank::new(vec![aimless]),
            Err(BankError::MissingTarget(_))
        ));
    }

    #[test]
    fn dangling_successors_are_reported() {
        let bank = QuestionBank::new(vec![
            theoretical("a", &["b", "ghost"], &[]),
            theoretical("b", &[], &["a"]),
        ])
        .expect("records are valid");
        assert_eq!(bank.dangling_successors(), vec![("a", "ghost")]);
        let error = bank.validate_links().expect_err("ghost is missing");
        assert!(matches!(
            error,
            BankError::DanglingSuccessor { from, to } if from == "a" && to == "ghost"
        ));
    }

    #[test]
    fn cycles_and_unreachable_questions() {
        let mut island = theoretical("island", &[], &[]);
        island.difficulty = Difficulty::Hard;
        let bank = QuestionBank::new(vec![
            theoretical("a", &["b"], &["a"]),
            theoretical("b", &["a"], &[]),
            island,
        ])
        .expect("records are valid");
        let graph = bank.successor_graph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_weight("a", "a"), Some(&false));
        assert_eq!(bank.unreachable_from_entry(), vec!["island"]);
    }

    #[test]
    fn malformed_json_is_reported() {
        let error = QuestionBank::from_json("{not json").expect_err("parse fails");
        assert!(matches!(error, BankError::Json(_)));
    }
}
