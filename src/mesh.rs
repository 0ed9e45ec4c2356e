//! Vertex layout of the rendered beam.
//!
//! The beam is drawn as a rectangular prism centred on the origin. Each mesh station carries
//! four vertices (top-front, top-back, bottom-front, bottom-back). Deflection only moves
//! vertices vertically, so the deflected buffer is rebuilt from the rest positions every call.

use nalgebra::{Point3, Vector3};

use crate::deflection::{visual_deflection, BeamGeometry, SimulationInputs};

/// Vertices per mesh station.
pub const VERTICES_PER_STATION: usize = 4;

/// Rest-state vertex positions for a beam.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamMesh {
    /// Dimensions used to lay out and deflect the vertices.
    geometry: BeamGeometry,
    /// Undeformed vertex positions, station-major.
    rest: Vec<Point3<f64>>,
}

impl BeamMesh {
    /// Lay out the undeformed vertices for `geometry`.
    ///
    /// # Examples
    /// ```
    /// use beamx::{BeamGeometry, BeamMesh};
    ///
    /// let mesh = BeamMesh::new(BeamGeometry::default());
    /// assert_eq!(mesh.vertex_count(), 33 * 4);
    /// ```
    #[must_use]
    pub fn new(geometry: BeamGeometry) -> Self {
        let half_height = geometry.height / 2.0;
        let half_width = geometry.width / 2.0;
        let mut rest = Vec::with_capacity((geometry.segments + 1) * VERTICES_PER_STATION);
        for station in 0..=geometry.segments {
            let x = Self::local_x(&geometry, station);
            rest.push(Point3::new(x, half_height, half_width));
            rest.push(Point3::new(x, half_height, -half_width));
            rest.push(Point3::new(x, -half_height, half_width));
            rest.push(Point3::new(x, -half_height, -half_width));
        }
        Self { geometry, rest }
    }

    /// Position of a station along the X axis of the centred mesh.
    fn local_x(geometry: &BeamGeometry, station: usize) -> f64 {
        station as f64 / geometry.segments as f64 * geometry.length - geometry.length / 2.0
    }

    /// Return the number of vertices in the mesh.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    /// Undeformed vertex positions.
    #[must_use]
    pub fn rest_positions(&self) -> &[Point3<f64>] {
        &self.rest
    }

    /// Vertex positions with the scaled deflection for `inputs` applied.
    #[must_use]
    pub fn deflected_positions(&self, inputs: SimulationInputs) -> Vec<Point3<f64>> {
        self.rest
            .chunks(VERTICES_PER_STATION)
            .enumerate()
            .flat_map(|(station, corners)| {
                let from_fixed =
                    Self::local_x(&self.geometry, station) + self.geometry.length / 2.0;
                let offset = Vector3::y() * visual_deflection(&self.geometry, from_fixed, inputs);
                corners.iter().map(move |corner| corner + offset)
            })
            .collect()
    }
}

/// Length multiplier for the force arrow drawn at the free end.
///
/// # Examples
/// ```
/// use beamx::force_arrow_scale;
///
/// assert!((force_arrow_scale(0.0) - 0.2).abs() < 1.0e-12);
/// assert!((force_arrow_scale(1_000.0) - 2.2).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn force_arrow_scale(force: f64) -> f64 {
    0.2 + (force.abs() / 200.0).min(2.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::deflection::DeflectionProfile;

    #[test]
    fn rest_mesh_spans_the_beam() {
        let geometry = BeamGeometry::default();
        let mesh = BeamMesh::new(geometry);
        let first = mesh.rest_positions()[0];
        let last = mesh.rest_positions()[mesh.vertex_count() - 1];
        assert_relative_eq!(first.x, -2.0);
        assert_relative_eq!(last.x, 2.0);
        assert_relative_eq!(first.y, 0.1);
        assert_relative_eq!(last.y, -0.1);
    }

    #[test]
    fn deflection_moves_only_the_y_coordinate() {
        let geometry = BeamGeometry::default();
        let mesh = BeamMesh::new(geometry);
        let inputs = SimulationInputs::new(800.0, 60.0);
        let profile = DeflectionProfile::sample(&geometry, inputs).scaled();
        let deflected = mesh.deflected_positions(inputs);
        assert_eq!(deflected.len(), mesh.vertex_count());
        for (index, (moved, rest)) in deflected.iter().zip(mesh.rest_positions()).enumerate() {
            let station = index / VERTICES_PER_STATION;
            assert_relative_eq!(moved.x, rest.x);
            assert_relative_eq!(moved.z, rest.z);
            assert_relative_eq!(moved.y - rest.y, profile[station], epsilon = 1.0e-12);
        }
    }

    #[test]
    fn clamped_station_stays_in_place() {
        let mesh = BeamMesh::new(BeamGeometry::default());
        let deflected = mesh.deflected_positions(SimulationInputs::new(1_000.0, 50.0));
        for (moved, rest) in deflected.iter().zip(mesh.rest_positions()).take(4) {
            assert_relative_eq!(moved.y, rest.y, epsilon = 1.0e-15);
        }
    }

    #[test]
    fn arrow_scale_saturates() {
        assert_relative_eq!(force_arrow_scale(200.0), 1.2);
        assert_relative_eq!(force_arrow_scale(-200.0), 1.2);
        assert_relative_eq!(force_arrow_scale(5_000.0), 2.2);
    }
}
