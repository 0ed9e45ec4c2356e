//! Closed-form deflection of a cantilever beam carrying a point load at its free end.
//!
//! The beam is clamped at `x = 0` and loaded at `x = length`. Euler-Bernoulli theory gives
//! the deflected shape
//!
//! ```text
//! I    = width * height^3 / 12
//! v(x) = -F x^2 (3L - x) / (6 E I)
//! ```
//!
//! (see <https://en.wikipedia.org/wiki/Euler%E2%80%93Bernoulli_beam_theory>). Every function in
//! this module is pure: identical inputs always produce identical outputs.

use std::ops::RangeInclusive;

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use uom::si::f64::Pressure;
use uom::si::pressure::{gigapascal, pascal};

/// Multiplier applied to the physical deflection so the bend is visible on screen.
///
/// This is a presentation constant, not a physical quantity, and may be tuned freely.
pub const VISUAL_SCALE: f64 = 1.0e3;

/// Range of forces, in newtons, accepted by the force control.
pub const FORCE_RANGE: RangeInclusive<f64> = 0.0..=1_000.0;

/// Range of elastic moduli, in gigapascals, accepted by the modulus control.
pub const MODULUS_RANGE: RangeInclusive<f64> = 50.0..=400.0;

/// Fixed dimensions of the rectangular beam, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamGeometry {
    /// Distance from the clamped end to the free end.
    pub length: f64,
    /// Depth of the cross-section in the bending plane.
    pub height: f64,
    /// Breadth of the cross-section.
    pub width: f64,
    /// Number of longitudinal mesh segments; the mesh has `segments + 1` stations.
    pub segments: usize,
}

impl Default for BeamGeometry {
    fn default() -> Self {
        Self {
            length: 4.0,
            height: 0.2,
            width: 0.4,
            segments: 32,
        }
    }
}

impl BeamGeometry {
    /// Second moment of area of the rectangular section about its bending axis.
    ///
    /// # Examples
    /// ```
    /// use beamx::BeamGeometry;
    ///
    /// let geometry = BeamGeometry::default();
    /// let expected = 0.4 * 0.2_f64.powi(3) / 12.0;
    /// assert!((geometry.second_moment_of_area() - expected).abs() < 1.0e-15);
    /// ```
    #[must_use]
    pub fn second_moment_of_area(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// Positions of the mesh stations measured from the clamped end.
    #[must_use]
    pub fn stations(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.length, self.segments + 1)
    }
}

/// The two user-controlled simulation values shared by the visualisation and the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    /// Tip load in newtons.
    pub force: f64,
    /// Young's modulus in gigapascals.
    pub elastic_modulus: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            force: 100.0,
            elastic_modulus: 200.0,
        }
    }
}

impl SimulationInputs {
    /// Create inputs from raw control values without range checks.
    #[must_use]
    pub const fn new(force: f64, elastic_modulus: f64) -> Self {
        Self {
            force,
            elastic_modulus,
        }
    }

    /// Create inputs clamped into [`FORCE_RANGE`] and [`MODULUS_RANGE`], as a slider would.
    ///
    /// # Examples
    /// ```
    /// use beamx::SimulationInputs;
    ///
    /// let inputs = SimulationInputs::clamped(1_500.0, 10.0);
    /// assert_eq!(inputs, SimulationInputs::new(1_000.0, 50.0));
    /// ```
    #[must_use]
    pub fn clamped(force: f64, elastic_modulus: f64) -> Self {
        Self {
            force: num::clamp(force, *FORCE_RANGE.start(), *FORCE_RANGE.end()),
            elastic_modulus: num::clamp(
                elastic_modulus,
                *MODULUS_RANGE.start(),
                *MODULUS_RANGE.end(),
            ),
        }
    }
}

/// Physical deflection in metres at `x` metres from the clamped end.
///
/// A positive `force` produces a negative (downward) deflection. `x = 0` and `force = 0`
/// both yield exactly zero.
///
/// # Examples
/// ```
/// use beamx::{deflection, BeamGeometry};
///
/// let geometry = BeamGeometry::default();
/// assert_eq!(deflection(&geometry, 0.0, 500.0, 200.0), 0.0);
/// assert!(deflection(&geometry, geometry.length, 500.0, 200.0) < 0.0);
/// ```
#[must_use]
pub fn deflection(geometry: &BeamGeometry, x: f64, force: f64, elastic_modulus_gpa: f64) -> f64 {
    let elastic_modulus = Pressure::new::<gigapascal>(elastic_modulus_gpa).get::<pascal>();
    let stiffness = 6.0 * elastic_modulus * geometry.second_moment_of_area();
    -(force * x * x * (3.0 * geometry.length - x)) / stiffness
}

/// Deflection at `x` multiplied by [`VISUAL_SCALE`] for rendering.
#[must_use]
pub fn visual_deflection(geometry: &BeamGeometry, x: f64, inputs: SimulationInputs) -> f64 {
    deflection(geometry, x, inputs.force, inputs.elastic_modulus) * VISUAL_SCALE
}

/// Deflection sampled at every mesh station for one set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct DeflectionProfile {
    /// Station positions measured from the clamped end, in metres.
    pub stations: Array1<f64>,
    /// Physical deflection at each station, in metres.
    pub deflections: Array1<f64>,
}

impl DeflectionProfile {
    /// Sample the beam at its mesh stations.
    #[must_use]
    pub fn sample(geometry: &BeamGeometry, inputs: SimulationInputs) -> Self {
        let stations = geometry.stations();
        let deflections =
            stations.mapv(|x| deflection(geometry, x, inputs.force, inputs.elastic_modulus));
        Self {
            stations,
            deflections,
        }
    }

    /// Deflection at the free end.
    #[must_use]
    pub fn tip(&self) -> f64 {
        self.deflections
            .iter()
            .last()
            .copied()
            .unwrap_or_default()
    }

    /// Deflections multiplied by [`VISUAL_SCALE`], ready to offset vertex heights.
    #[must_use]
    pub fn scaled(&self) -> Array1<f64> {
        self.deflections.mapv(|v| v * VISUAL_SCALE)
    }
}
