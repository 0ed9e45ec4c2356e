//! Question templates and answer evaluation.

use serde::{Deserialize, Serialize};

use crate::deflection::SimulationInputs;
use crate::errors::QuizError;

/// Difficulty tier of a question; also the per-topic level tracked by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry level.
    Easy,
    /// Intermediate level.
    Medium,
    /// Highest level.
    Hard,
}

impl Difficulty {
    /// The next tier up, saturating at [`Difficulty::Hard`].
    ///
    /// # Examples
    /// ```
    /// use beamx::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
    /// assert_eq!(Difficulty::Hard.next(), Difficulty::Hard);
    /// ```
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
        }
    }
}

/// Subject area of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Statics and beam theory.
    Mechanics,
    /// Material stiffness.
    Materials,
    /// Applied loads.
    Forces,
    /// Deformed shape.
    Deformation,
}

impl Topic {
    /// Every topic, in declaration order.
    pub const ALL: [Topic; 4] = [
        Topic::Mechanics,
        Topic::Materials,
        Topic::Forces,
        Topic::Deformation,
    ];

    /// Position of the topic in [`Topic::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Allowed absolute error for each simulation input of an interactive question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tolerance {
    /// Allowed error on the force, in newtons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<f64>,
    /// Allowed error on the modulus, in gigapascals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elastic_modulus: Option<f64>,
}

/// Candidate follow-up question ids for each outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Successors {
    /// Candidates after a correct answer.
    #[serde(default)]
    pub correct: Vec<String>,
    /// Candidates after an incorrect answer.
    #[serde(default)]
    pub incorrect: Vec<String>,
}

impl Successors {
    /// Candidate list for an outcome.
    #[must_use]
    pub fn for_outcome(&self, was_correct: bool) -> &[String] {
        if was_correct {
            &self.correct
        } else {
            &self.incorrect
        }
    }
}

/// Kind-specific content of a question, including how its answer is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    /// Multiple choice question.
    #[serde(rename_all = "camelCase")]
    Theoretical {
        /// Answer options in display order.
        options: Vec<String>,
        /// Index of the correct option.
        #[serde(rename = "correctAnswer")]
        correct_answer_index: usize,
    },
    /// Question answered by adjusting the simulation controls.
    #[serde(rename_all = "camelCase")]
    Interactive {
        /// Force the learner should set, in newtons.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_force: Option<f64>,
        /// Modulus the learner should set, in gigapascals.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_elastic_modulus: Option<f64>,
        /// Allowed error for each target.
        #[serde(default)]
        tolerance: Tolerance,
    },
}

/// Discriminant of [`QuestionKind`], used when alternating question framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    /// See [`QuestionKind::Theoretical`].
    Theoretical,
    /// See [`QuestionKind::Interactive`].
    Interactive,
}

/// An immutable question template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique key within a bank.
    pub id: String,
    /// Prompt shown to the learner.
    pub text: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Subject area.
    pub topic: Topic,
    /// Text shown after answering.
    pub explanation: String,
    /// How many times the question may be dispatched in one session.
    pub max_shows: u32,
    /// Follow-up candidates; `None` marks a terminal question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_questions: Option<Successors>,
    /// Kind-specific content.
    #[serde(flatten)]
    pub kind: QuestionKind,
}

/// A learner's answer to a question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Index of the selected option of a theoretical question.
    Choice(usize),
    /// Live control values at the moment an interactive answer is submitted.
    Simulation(SimulationInputs),
}

/// Outcome of evaluating a response.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Whether the response was correct.
    pub correct: bool,
    /// Explanation to display next.
    pub explanation: String,
}

/// `true` when `value` lies within `tolerance` of `target`.
fn within(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}

impl Question {
    /// Discriminant of the question kind.
    #[must_use]
    pub fn kind_tag(&self) -> KindTag {
        match self.kind {
            QuestionKind::Theoretical { .. } => KindTag::Theoretical,
            QuestionKind::Interactive { .. } => KindTag::Interactive,
        }
    }

    /// Successor candidates for an outcome; empty when the question is terminal.
    #[must_use]
    pub fn successors(&self, was_correct: bool) -> &[String] {
        self.next_questions
            .as_ref()
            .map(|next| next.for_outcome(was_correct))
            .unwrap_or_default()
    }

    /// Check a response against this question.
    ///
    /// Interactive questions compare every present target against the supplied inputs; a
    /// target without a tolerance must be matched exactly.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::ResponseMismatch`] when the response kind does not fit the question.
    ///
    /// # Examples
    /// ```
    /// use beamx::{QuestionBank, Response, SimulationInputs};
    ///
    /// let bank = QuestionBank::builtin().expect("built-in bank is valid");
    /// let question = bank.get("i1").expect("i1 exists");
    /// let near = Response::Simulation(SimulationInputs::new(155.0, 200.0));
    /// let far = Response::Simulation(SimulationInputs::new(170.0, 200.0));
    /// assert!(question.is_correct(near).expect("interactive response"));
    /// assert!(!question.is_correct(far).expect("interactive response"));
    /// ```
    pub fn is_correct(&self, response: Response) -> Result<bool, QuizError> {
        match (&self.kind, response) {
            (
                QuestionKind::Theoretical {
                    correct_answer_index,
                    ..
                },
                Response::Choice(index),
            ) => Ok(index == *correct_answer_index),
            (
                QuestionKind::Interactive {
                    target_force,
                    target_elastic_modulus,
                    tolerance,
                },
                Response::Simulation(inputs),
            ) => {
                let force_ok = target_force.map_or(true, |target| {
                    within(inputs.force, target, tolerance.force.unwrap_or(0.0))
                });
                let modulus_ok = target_elastic_modulus.map_or(true, |target| {
                    within(
                        inputs.elastic_modulus,
                        target,
                        tolerance.elastic_modulus.unwrap_or(0.0),
                    )
                });
                Ok(force_ok && modulus_ok)
            }
            (QuestionKind::Theoretical { .. }, Response::Simulation(_)) => {
                Err(QuizError::ResponseMismatch {
                    id: self.id.clone(),
                    expected: "choice",
                })
            }
            (QuestionKind::Interactive { .. }, Response::Choice(_)) => {
                Err(QuizError::ResponseMismatch {
                    id: self.id.clone(),
                    expected: "simulation",
                })
            }
        }
    }

    /// Check a response and pair the result with the explanation.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::ResponseMismatch`] when the response kind does not fit the question.
    pub fn evaluate(&self, response: Response) -> Result<Verdict, QuizError> {
        Ok(Verdict {
            correct: self.is_correct(response)?,
            explanation: self.explanation.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interactive(target_force: Option<f64>, target_modulus: Option<f64>) -> Question {
        Question {
            id: "i".to_string(),
            text: "Set the controls".to_string(),
            difficulty: Difficulty::Easy,
            topic: Topic::Forces,
            explanation: "Because".to_string(),
            max_shows: 1,
            next_questions: None,
            kind: QuestionKind::Interactive {
                target_force,
                target_elastic_modulus: target_modulus,
                tolerance: Tolerance {
                    force: Some(10.0),
                    elastic_modulus: Some(5.0),
                },
            },
        }
    }

    #[test]
    fn force_target_accepts_values_within_tolerance() {
        let question = interactive(Some(150.0), None);
        let check = |force| {
            question
                .is_correct(Response::Simulation(SimulationInputs::new(force, 400.0)))
                .expect("interactive response")
        };
        assert!(check(155.0));
        assert!(check(140.0));
        assert!(check(160.0));
        assert!(!check(170.0));
    }

    #[test]
    fn both_targets_must_hold() {
        let question = interactive(Some(150.0), Some(200.0));
        let ok = Response::Simulation(SimulationInputs::new(150.0, 203.0));
        let off = Response::Simulation(SimulationInputs::new(150.0, 210.0));
        assert!(question.is_correct(ok).expect("interactive response"));
        assert!(!question.is_correct(off).expect("interactive response"));
    }

    #[test]
    fn missing_tolerance_requires_exact_match() {
        let mut question = interactive(None, Some(200.0));
        if let QuestionKind::Interactive { tolerance, .. } = &mut question.kind {
            *tolerance = Tolerance::default();
        }
        let exact = Response::Simulation(SimulationInputs::new(0.0, 200.0));
        let close = Response::Simulation(SimulationInputs::new(0.0, 200.5));
        assert!(question.is_correct(exact).expect("interactive response"));
        assert!(!question.is_correct(close).expect("interactive response"));
    }

    #[test]
    fn mismatched_response_is_rejected() {
        let question = interactive(Some(150.0), None);
        let error = question
            .is_correct(Response::Choice(0))
            .expect_err("choice rejected for interactive question");
        assert_eq!(
            error,
            QuizError::ResponseMismatch {
                id: "i".to_string(),
                expected: "simulation",
            }
        );
    }

    #[test]
    fn theoretical_question_checks_the_index() {
        let question = Question {
            kind: QuestionKind::Theoretical {
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer_index: 1,
            },
            ..interactive(None, None)
        };
        let verdict = question
            .evaluate(Response::Choice(1))
            .expect("choice response");
        assert!(verdict.correct);
        assert_eq!(verdict.explanation, "Because");
        assert!(!question
            .is_correct(Response::Choice(0))
            .expect("choice response"));
    }

    #[test]
    fn difficulty_ratchets_up_to_hard() {
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert!(Difficulty::Easy < Difficulty::Medium);
    }

    #[test]
    fn parses_original_json_layout() {
        let question: Question = serde_json::from_str(
            r#"{
                "id": "i2", "type": "interactive", "text": "Set steel",
                "difficulty": "easy", "topic": "materials", "explanation": "Stiff",
                "maxShows": 2, "targetElasticModulus": 200,
                "tolerance": {"elasticModulus": 5},
                "nextQuestions": {"correct": ["t6"], "incorrect": ["i1"]}
            }"#,
        )
        .expect("question parses");
        assert_eq!(question.kind_tag(), KindTag::Interactive);
        assert_eq!(question.successors(false), ["i1".to_string()]);
        assert_eq!(
            question.kind,
            QuestionKind::Interactive {
                target_force: None,
                target_elastic_modulus: Some(200.0),
                tolerance: Tolerance {
                    force: None,
                    elastic_modulus: Some(5.0),
                },
            }
        );
    }
}
