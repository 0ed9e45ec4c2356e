use beamx::{material_info, BeamGeometry, DeflectionProfile, SimulationInputs};

fn main() {
    // Sweep the force control at a fixed aluminium-like modulus
    let geometry = BeamGeometry::default();
    for force in [0.0, 250.0, 500.0, 1_000.0] {
        let inputs = SimulationInputs::new(force, 70.0);
        let profile = DeflectionProfile::sample(&geometry, inputs);
        println!(
            "{force:>6.0} N on {}: tip = {:+.4} mm",
            material_info(inputs.elastic_modulus).name,
            profile.tip() * 1.0e3
        );
    }
}
