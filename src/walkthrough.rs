use beamx::{
    Advance, Question, QuestionBank, QuestionKind, QuizError, QuizSession, Response,
    RngPicker, SessionSummary, SimulationInputs,
};

/// One answered question of the walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Id of the question.
    pub id: String,
    /// Prompt text.
    pub text: String,
    /// Whether the scripted answer was correct.
    pub correct: bool,
    /// Session progress after answering, in percent.
    pub progress: f64,
}

/// Result of a scripted session.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    /// Questions in the order they were shown.
    pub steps: Vec<Step>,
    /// Final session state.
    pub summary: SessionSummary,
}

/// The response a diligent learner would give with the controls left at `inputs`.
///
/// Theoretical questions get the correct option; interactive questions are answered with
/// whatever the controls currently hold, so their outcome depends on `inputs`.
fn scripted_response(question: &Question, inputs: SimulationInputs) -> Response {
    match &question.kind {
        QuestionKind::Theoretical {
            correct_answer_index,
            ..
        } => Response::Choice(*correct_answer_index),
        QuestionKind::Interactive { .. } => Response::Simulation(inputs),
    }
}

/// Run a full session against `bank` with a seeded picker.
pub fn run_walkthrough(
    bank: &QuestionBank,
    seed: u64,
    inputs: SimulationInputs,
) -> Result<Walkthrough, QuizError> {
    let mut session = QuizSession::new(bank, RngPicker::seeded(seed));
    let mut question = session.start()?;
    let mut steps = Vec::new();

    loop {
        let verdict = session.submit(scripted_response(question, inputs))?;
        let advance = session.record_answer_and_advance(&question.id, verdict.correct)?;
        steps.push(Step {
            id: question.id.clone(),
            text: question.text.clone(),
            correct: verdict.correct,
            progress: session.progress_percent(),
        });
        match advance {
            Advance::Next(next) => question = next,
            Advance::Finished(_) => break,
        }
    }

    Ok(Walkthrough {
        steps,
        summary: session.summary(),
    })
}
