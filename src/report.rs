use crate::walkthrough::Walkthrough;
use beamx::{material_info, BeamGeometry, Completion, DeflectionProfile, SimulationInputs};
use std::fmt::Write;

/// Render the beam response for one set of control values.
///
/// Displacements are reported in millimetres next to the on-screen offset so readers can
/// see how far the rendered bend exaggerates the physical one.
#[must_use]
pub fn render_beam(geometry: &BeamGeometry, inputs: SimulationInputs) -> String {
    let mut output = String::new();
    let profile = DeflectionProfile::sample(geometry, inputs);
    let material = material_info(inputs.elastic_modulus);

    writeln!(
        &mut output,
        "Cantilever {:.1} m x {:.2} m x {:.2} m (I = {:.3e} m^4)",
        geometry.length,
        geometry.height,
        geometry.width,
        geometry.second_moment_of_area()
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Load = {:.1} N, E = {:.0} GPa ({})",
        inputs.force, inputs.elastic_modulus, material.name
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Tip deflection: {:+.4} mm (rendered offset {:+.3})",
        profile.tip() * 1.0e3,
        profile.scaled().iter().last().copied().unwrap_or_default()
    )
    .expect("writing to string cannot fail");

    // Quarter points give a feel for the cubic shape without printing every station.
    let quarter = geometry.segments / 4;
    if quarter > 0 {
        for station in (quarter..=geometry.segments).step_by(quarter) {
            writeln!(
                &mut output,
                "  x = {:.2} m: {:+.4} mm",
                profile.stations[station],
                profile.deflections[station] * 1.0e3
            )
            .expect("writing to string cannot fail");
        }
    }

    writeln!(&mut output, "{}", material.description).expect("writing to string cannot fail");
    output
}

/// Render the outcome of a scripted quiz session.
#[must_use]
pub fn render_walkthrough(walkthrough: &Walkthrough) -> String {
    let mut output = String::new();

    for (number, step) in walkthrough.steps.iter().enumerate() {
        writeln!(
            &mut output,
            "{:>2}. [{}] {} -> {} ({:.0}%)",
            number + 1,
            step.id,
            step.text,
            if step.correct { "correct" } else { "incorrect" },
            step.progress
        )
        .expect("writing to string cannot fail");
    }

    let summary = &walkthrough.summary;
    writeln!(
        &mut output,
        "Score: {}% ({}/{})",
        summary.score, summary.correct_answers, summary.total_attempted
    )
    .expect("writing to string cannot fail");

    for (topic, difficulty) in &summary.difficulty {
        writeln!(&mut output, "  {topic:?}: {difficulty:?}").expect("writing to string cannot fail");
    }

    let ending = match summary.completion {
        Some(Completion::LimitReached) => "all questions answered",
        Some(Completion::NoEligibleSuccessor) => "no further questions on this path",
        None => "in progress",
    };
    writeln!(&mut output, "Quiz completed: {ending}.").expect("writing to string cannot fail");

    if summary.passed {
        output.push_str(
            "Great job! You've demonstrated a good understanding of beam deformation concepts.\n",
        );
    } else {
        output.push_str(
            "Review the concepts of elastic deformation and material properties, particularly \
             focusing on the relationship between force, stress, and Young's modulus.\n",
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walkthrough::run_walkthrough;
    use beamx::QuestionBank;

    #[test]
    fn beam_report_mentions_material_and_tip() {
        let report = render_beam(&BeamGeometry::default(), SimulationInputs::default());
        assert!(report.contains("Steel Alloy"));
        assert!(report.contains("Tip deflection: -0.0400 mm"));
        assert!(report.contains("x = 4.00 m"));
    }

    #[test]
    fn walkthrough_report_lists_every_step() {
        let bank = QuestionBank::builtin().expect("built-in bank is valid");
        let walkthrough =
            run_walkthrough(&bank, 3, SimulationInputs::default()).expect("walkthrough runs");
        let report = render_walkthrough(&walkthrough);
        assert_eq!(
            report.lines().filter(|line| line.contains(" -> ")).count(),
            walkthrough.steps.len()
        );
        assert!(report.contains("Quiz completed"));
    }
}
