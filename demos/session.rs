use beamx::{Advance, QuestionBank, QuestionKind, QuizSession, Response, RngPicker, SimulationInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bank = QuestionBank::builtin()?;
    let mut session = QuizSession::new(&bank, RngPicker::from_entropy());
    let mut question = session.start()?;

    // Answer every question with the first option or the default controls
    let inputs = SimulationInputs::default();
    loop {
        let response = match question.kind {
            QuestionKind::Theoretical { .. } => Response::Choice(0),
            QuestionKind::Interactive { .. } => Response::Simulation(inputs),
        };
        let verdict = session.submit(response)?;
        println!("{}: {}", question.id, if verdict.correct { "correct" } else { "incorrect" });
        match session.record_answer_and_advance(&question.id, verdict.correct)? {
            Advance::Next(next) => question = next,
            Advance::Finished(completion) => {
                println!("finished ({completion:?}), score {}%", session.score_percent());
                break;
            }
        }
    }

    Ok(())
}
