#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use beamx::{
    deflection, visual_deflection, BeamGeometry, BeamMesh, DeflectionProfile, SimulationInputs,
    FORCE_RANGE, MODULUS_RANGE, VERTICES_PER_STATION, VISUAL_SCALE,
};

/// Sample points spread over the control ranges.
fn sweep() -> Vec<(f64, f64)> {
    let mut pairs = Vec::new();
    for force in [0.0, 1.0, 150.0, 500.0, *FORCE_RANGE.end()] {
        for modulus in [*MODULUS_RANGE.start(), 70.0, 200.0, *MODULUS_RANGE.end()] {
            pairs.push((force, modulus));
        }
    }
    pairs
}

#[test]
fn fixed_end_and_unloaded_beam_do_not_move() {
    let geometry = BeamGeometry::default();
    for (force, modulus) in sweep() {
        assert_eq!(deflection(&geometry, 0.0, force, modulus), 0.0);
    }
    for x in geometry.stations().iter() {
        for modulus in [50.0, 400.0] {
            assert_eq!(deflection(&geometry, *x, 0.0, modulus), 0.0);
        }
    }
}

#[test]
fn doubling_force_doubles_deflection() {
    let geometry = BeamGeometry::default();
    for x in geometry.stations().iter().skip(1) {
        for (force, modulus) in sweep() {
            let single = deflection(&geometry, *x, force, modulus);
            let double = deflection(&geometry, *x, 2.0 * force, modulus);
            assert_relative_eq!(double, 2.0 * single, max_relative = 1.0e-12);
        }
    }
}

#[test]
fn softer_material_bends_further() {
    let geometry = BeamGeometry::default();
    for x in geometry.stations().iter().skip(1) {
        let soft = deflection(&geometry, *x, 300.0, 60.0);
        let stiff = deflection(&geometry, *x, 300.0, 61.0);
        assert!(soft.abs() > stiff.abs());
    }
}

#[test]
fn deflection_grows_towards_the_free_end() {
    let geometry = BeamGeometry::default();
    let profile = DeflectionProfile::sample(&geometry, SimulationInputs::new(400.0, 100.0));
    for pair in profile.deflections.to_vec().windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn visual_offset_uses_the_presentation_scale() {
    let geometry = BeamGeometry::default();
    let inputs = SimulationInputs::new(250.0, 90.0);
    assert_relative_eq!(
        visual_deflection(&geometry, 2.5, inputs),
        deflection(&geometry, 2.5, 250.0, 90.0) * VISUAL_SCALE,
        max_relative = 1.0e-12
    );
}

#[test]
fn mesh_tip_vertices_follow_the_profile() {
    let geometry = BeamGeometry::default();
    let inputs = SimulationInputs::new(1_000.0, 50.0);
    let mesh = BeamMesh::new(geometry);
    let deflected = mesh.deflected_positions(inputs);
    let tip_offset = visual_deflection(&geometry, geometry.length, inputs);
    let tip_start = mesh.vertex_count() - VERTICES_PER_STATION;
    for (moved, rest) in deflected[tip_start..]
        .iter()
        .zip(&mesh.rest_positions()[tip_start..])
    {
        assert_relative_eq!(moved.y - rest.y, tip_offset, epsilon = 1.0e-9);
    }
}
