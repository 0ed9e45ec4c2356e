//! Adaptive question sequencing over a [`QuestionBank`].
//!
//! A session opens on a random easy question. After each answer it follows the answered
//! question's successor list for that outcome, skipping questions that reached their show
//! limit and preferring candidates that match the learner's current level in the candidate's
//! topic while switching between theoretical and interactive framing. Each correct answer
//! raises the level of the answered question's topic by one tier.

use std::collections::HashMap;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::errors::QuizError;
use crate::picker::Picker;
use crate::question::{Difficulty, Question, Response, Topic, Verdict};

/// Tunable limits of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    /// Number of questions dispatched before the session ends.
    pub max_questions: usize,
    /// Score, in percent, at or above which a finished session counts as passed.
    pub pass_mark: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: 15,
            pass_mark: 70,
        }
    }
}

/// Why a session stopped dispatching questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Completion {
    /// The configured number of questions was dispatched.
    LimitReached,
    /// No successor of the last question was eligible.
    NoEligibleSuccessor,
}

/// Result of advancing a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance<'b> {
    /// The question to show next.
    Next(&'b Question),
    /// The session is over.
    Finished(Completion),
}

/// Correctness recorded for an answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// Id of the answered question.
    pub id: String,
    /// Whether the latest answer was correct.
    pub correct: bool,
}

/// Current level for each topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyByTopic([Difficulty; 4]);

impl Default for DifficultyByTopic {
    fn default() -> Self {
        Self([Difficulty::Easy; 4])
    }
}

impl DifficultyByTopic {
    /// Level for `topic`.
    #[must_use]
    pub fn get(&self, topic: Topic) -> Difficulty {
        self.0[topic.index()]
    }

    /// Raise `topic` one tier; returns `false` when it was already hard.
    fn raise(&mut self, topic: Topic) -> bool {
        let level = &mut self.0[topic.index()];
        if *level == Difficulty::Hard {
            return false;
        }
        *level = level.next();
        true
    }
}

/// Snapshot of a session for display or serialisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Questions dispatched so far.
    pub question_count: usize,
    /// Correct answers recorded.
    pub correct_answers: u32,
    /// Answers recorded.
    pub total_attempted: u32,
    /// Rounded share of correct answers in percent.
    pub score: u32,
    /// Share of the question limit dispatched, in percent.
    pub progress: f64,
    /// Whether the score meets the pass mark.
    pub passed: bool,
    /// Why the session ended, if it has.
    pub completion: Option<Completion>,
    /// Level reached in every topic.
    pub difficulty: Vec<(Topic, Difficulty)>,
    /// Answers in the order they were first given.
    pub answers: Vec<AnswerRecord>,
}

/// State of one learner working through a bank.
///
/// The bank is only borrowed; show counters live in the session, so one bank can serve
/// any number of sessions.
#[derive(Debug)]
pub struct QuizSession<'b, P> {
    /// Question templates.
    bank: &'b QuestionBank,
    /// Source of random choices.
    picker: P,
    /// Session limits.
    config: QuizConfig,
    /// Dispatch count per question id.
    times_shown: HashMap<&'b str, u32>,
    /// Answers in first-answer order.
    answered: Vec<AnswerRecord>,
    /// Correct answers recorded.
    correct_answers: u32,
    /// Answers recorded.
    total_attempted: u32,
    /// Level per topic, never lowered.
    difficulty: DifficultyByTopic,
    /// Questions dispatched.
    question_count: usize,
    /// Question awaiting an answer.
    current: Option<&'b Question>,
    /// Whether [`QuizSession::submit`] already recorded an answer to `current`.
    current_answered: bool,
    /// Set once the session stops dispatching.
    completion: Option<Completion>,
}

impl<'b, P: Picker> QuizSession<'b, P> {
    /// Create an idle session with the default limits. Call [`QuizSession::start`] next.
    pub fn new(bank: &'b QuestionBank, picker: P) -> Self {
        Self::with_config(bank, picker, QuizConfig::default())
    }

    /// Create an idle session with explicit limits.
    pub fn with_config(bank: &'b QuestionBank, picker: P, config: QuizConfig) -> Self {
        Self {
            bank,
            picker,
            config,
            times_shown: HashMap::new(),
            answered: Vec::new(),
            correct_answers: 0,
            total_attempted: 0,
            difficulty: DifficultyByTopic::default(),
            question_count: 0,
            current: None,
            current_answered: false,
            completion: None,
        }
    }

    /// Reset every counter and dispatch a random easy question.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NoQuestionAvailable`] when the bank has no easy question.
    ///
    /// # Examples
    /// ```
    /// use beamx::{Difficulty, QuestionBank, QuizSession, RngPicker};
    ///
    /// let bank = QuestionBank::builtin().expect("built-in bank is valid");
    /// let mut session = QuizSession::new(&bank, RngPicker::seeded(1));
    /// let first = session.start().expect("bank has easy questions");
    /// assert_eq!(first.difficulty, Difficulty::Easy);
    /// assert_eq!(session.question_count(), 1);
    /// ```
    pub fn start(&mut self) -> Result<&'b Question, QuizError> {
        self.times_shown.clear();
        self.answered.clear();
        self.correct_answers = 0;
        self.total_attempted = 0;
        self.difficulty = DifficultyByTopic::default();
        self.question_count = 0;
        self.current = None;
        self.current_answered = false;
        self.completion = None;

        let bank = self.bank;
        let candidates: Vec<&'b Question> = bank
            .iter()
            .filter(|question| {
                question.difficulty == Difficulty::Easy && self.times_shown(&question.id) == 0
            })
            .collect();
        if candidates.is_empty() {
            return Err(QuizError::NoQuestionAvailable);
        }
        let first = self.choose(&candidates);
        info!(
            "quiz started with {} opening candidates, first question {:?}",
            candidates.len(),
            first.id
        );
        self.dispatch(first);
        Ok(first)
    }

    /// Record the correctness of an answer to `id`.
    ///
    /// A repeated answer to the same question overwrites its record in place and counts as
    /// another attempt.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::UnknownQuestion`] when `id` is not in the bank.
    pub fn record_answer(&mut self, id: &str, was_correct: bool) -> Result<(), QuizError> {
        let question = self
            .bank
            .get(id)
            .ok_or_else(|| QuizError::UnknownQuestion(id.to_string()))?;
        self.store_answer(question, was_correct);
        Ok(())
    }

    /// Record an answer to `id` and move on to the next question.
    ///
    /// An answer already recorded through [`QuizSession::submit`] for the question on
    /// screen is not counted again. Once the session has finished this returns the same
    /// completion without recording or dispatching anything.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::UnknownQuestion`] when `id` is not in the bank and the session
    /// has not yet reached its question limit.
    pub fn record_answer_and_advance(
        &mut self,
        id: &str,
        was_correct: bool,
    ) -> Result<Advance<'b>, QuizError> {
        if let Some(completion) = self.completion {
            return Ok(Advance::Finished(completion));
        }

        let bank = self.bank;
        let answered = bank.get(id);
        let submitted = self.current_answered && self.current.is_some_and(|q| q.id == id);
        if let Some(question) = answered.filter(|_| !submitted) {
            self.store_answer(question, was_correct);
        }

        if self.question_count >= self.config.max_questions {
            return Ok(self.finish(Completion::LimitReached));
        }
        let current = answered.ok_or_else(|| QuizError::UnknownQuestion(id.to_string()))?;

        if was_correct && self.difficulty.raise(current.topic) {
            debug!(
                "{:?} difficulty raised to {:?}",
                current.topic,
                self.difficulty.get(current.topic)
            );
        }

        let eligible = self.eligible_successors(current, was_correct);
        if eligible.is_empty() {
            return Ok(self.finish(Completion::NoEligibleSuccessor));
        }

        let preferred: Vec<&'b Question> = eligible
            .iter()
            .copied()
            .filter(|candidate| {
                candidate.difficulty == self.difficulty.get(candidate.topic)
                    && candidate.kind_tag() != current.kind_tag()
            })
            .collect();
        let candidates = if preferred.is_empty() {
            eligible
        } else {
            preferred
        };

        let next = self.choose(&candidates);
        self.dispatch(next);
        Ok(Advance::Next(next))
    }

    /// Evaluate a response to the current question and record the result.
    ///
    /// Interactive responses carry the control values at the moment of submission.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::NotStarted`] before [`QuizSession::start`],
    /// [`QuizError::Finished`] once the session has ended,
    /// [`QuizError::AlreadyAnswered`] for a second answer to the same dispatch and
    /// [`QuizError::ResponseMismatch`] when the response does not fit the question.
    pub fn submit(&mut self, response: Response) -> Result<Verdict, QuizError> {
        if self.completion.is_some() {
            return Err(QuizError::Finished);
        }
        let current = self.current.ok_or(QuizError::NotStarted)?;
        if self.current_answered {
            return Err(QuizError::AlreadyAnswered(current.id.clone()));
        }
        let verdict = current.evaluate(response)?;
        self.store_answer(current, verdict.correct);
        self.current_answered = true;
        Ok(verdict)
    }

    /// Share of the question limit dispatched, in percent.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.config.max_questions == 0 {
            return 100.0;
        }
        100.0 * self.question_count as f64 / self.config.max_questions as f64
    }

    /// Return `true` while fewer than the maximum number of questions were dispatched.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.question_count < self.config.max_questions
    }

    /// Return `true` once no further question will be dispatched.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.completion.is_some() || !self.is_active()
    }

    /// Rounded percentage of recorded answers that were correct; zero before any answer.
    #[must_use]
    pub fn score_percent(&self) -> u32 {
        if self.total_attempted == 0 {
            return 0;
        }
        (100.0 * f64::from(self.correct_answers) / f64::from(self.total_attempted)).round() as u32
    }

    /// Return `true` when the score meets the configured pass mark.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score_percent() >= self.config.pass_mark
    }

    /// Questions left before the limit is reached.
    #[must_use]
    pub fn questions_remaining(&self) -> usize {
        self.config.max_questions.saturating_sub(self.question_count)
    }

    /// Question awaiting an answer.
    #[must_use]
    pub fn current_question(&self) -> Option<&'b Question> {
        self.current
    }

    /// Questions dispatched so far.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Correct answers recorded.
    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    /// Answers recorded.
    #[must_use]
    pub fn total_attempted(&self) -> u32 {
        self.total_attempted
    }

    /// Answers in the order they were first given.
    #[must_use]
    pub fn answered_questions(&self) -> &[AnswerRecord] {
        &self.answered
    }

    /// Current level for every topic.
    #[must_use]
    pub fn difficulty_by_topic(&self) -> DifficultyByTopic {
        self.difficulty
    }

    /// How often `id` was dispatched in this session.
    #[must_use]
    pub fn times_shown(&self, id: &str) -> u32 {
        self.times_shown.get(id).copied().unwrap_or(0)
    }

    /// Why the session stopped, once it has.
    #[must_use]
    pub fn completion(&self) -> Option<Completion> {
        self.completion
    }

    /// Limits the session runs under.
    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    /// Snapshot of the session state.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            question_count: self.question_count,
            correct_answers: self.correct_answers,
            total_attempted: self.total_attempted,
            score: self.score_percent(),
            progress: self.progress_percent(),
            passed: self.passed(),
            completion: self.completion,
            difficulty: Topic::ALL
                .iter()
                .map(|&topic| (topic, self.difficulty.get(topic)))
                .collect(),
            answers: self.answered.clone(),
        }
    }

    /// Successors for the outcome that exist and are below their show limit.
    fn eligible_successors(&self, current: &Question, was_correct: bool) -> Vec<&'b Question> {
        let bank = self.bank;
        current
            .successors(was_correct)
            .iter()
            .filter_map(|id| {
                let candidate = bank.get(id);
                if candidate.is_none() {
                    warn!("question {:?} lists unknown successor {:?}", current.id, id);
                }
                candidate
            })
            .filter(|candidate| self.times_shown(&candidate.id) < candidate.max_shows)
            .collect()
    }

    /// Pick one of a non-empty candidate list.
    fn choose(&mut self, candidates: &[&'b Question]) -> &'b Question {
        let index = self.picker.pick(candidates.len());
        candidates[index.min(candidates.len() - 1)]
    }

    /// Show a question.
    fn dispatch(&mut self, question: &'b Question) {
        *self.times_shown.entry(question.id.as_str()).or_insert(0) += 1;
        self.question_count += 1;
        self.current = Some(question);
        self.current_answered = false;
        debug!(
            "dispatched {:?} ({:?}, {:?}), {} of {}",
            question.id,
            question.difficulty,
            question.topic,
            self.question_count,
            self.config.max_questions
        );
    }

    /// Update answer counters and the answer log.
    fn store_answer(&mut self, question: &Question, was_correct: bool) {
        match self
            .answered
            .iter_mut()
            .find(|record| record.id == question.id)
        {
            Some(record) => record.correct = was_correct,
            None => self.answered.push(AnswerRecord {
                id: question.id.clone(),
                correct: was_correct,
            }),
        }
        self.total_attempted += 1;
        if was_correct {
            self.correct_answers += 1;
        }
    }

    /// Mark the session finished.
    fn finish(&mut self, completion: Completion) -> Advance<'b> {
        if self.completion.is_none() {
            info!(
                "quiz finished ({:?}) after {} questions, score {}%",
                completion,
                self.question_count,
                self.score_percent()
            );
        }
        self.completion = Some(completion);
        self.current = None;
        self.current_answered = false;
        Advance::Finished(completion)
    }
}
