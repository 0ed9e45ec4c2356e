mod report;
mod walkthrough;

use beamx::{BeamGeometry, QuestionBank, SimulationInputs};
use log::{info, warn};
use report::{render_beam, render_walkthrough};
use std::env;
use std::error::Error;
use walkthrough::run_walkthrough;

/// Seed for the scripted session so repeated runs print the same walkthrough.
const WALKTHROUGH_SEED: u64 = 2024;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    // Load the question bank. An optional first argument points at a JSON file with the
    // same layout as the bundled data/questions.json.
    let bank = match env::args().nth(1) {
        Some(path) => {
            info!("loading question bank from {path}");
            QuestionBank::from_path(&path)?
        }
        None => QuestionBank::builtin()?,
    };

    // Broken links only shorten sessions, so report them without refusing to run.
    for (from, to) in bank.dangling_successors() {
        warn!("question {from:?} lists unknown successor {to:?}");
    }
    for id in bank.unreachable_from_entry() {
        warn!("question {id:?} cannot be reached from any opening question");
    }

    // Describe the beam at the default control positions, the same values the
    // visualisation starts from.
    let geometry = BeamGeometry::default();
    let inputs = SimulationInputs::default();
    println!("{}", render_beam(&geometry, inputs));

    // Play a full session where every theoretical question is answered correctly and
    // interactive questions are answered with the controls left untouched.
    let walkthrough = run_walkthrough(&bank, WALKTHROUGH_SEED, inputs)?;
    println!("{}", render_walkthrough(&walkthrough));

    Ok(())
}
