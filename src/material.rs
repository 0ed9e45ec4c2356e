//! Representative alloy families for a given Young's modulus.

use serde::Serialize;

/// Descriptive information about the alloy family closest to a modulus value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialInfo {
    /// Display name of the alloy family.
    pub name: &'static str,
    /// Short property statements shown alongside the modulus.
    pub properties: &'static [&'static str],
    /// One-paragraph description of the elastic behaviour.
    pub description: &'static str,
}

/// Below 80 GPa.
const ALUMINUM: MaterialInfo = MaterialInfo {
    name: "Aluminum Alloy",
    properties: &[
        "High strength-to-weight ratio",
        "Excellent corrosion resistance",
        "Yield strength: 200-600 MPa",
        "Ductile material with good elastic recovery",
    ],
    description: "Aluminum alloys exhibit linear elastic behavior under small loads, making them ideal for lightweight structural applications.",
};

/// 80 to 150 GPa.
const TITANIUM: MaterialInfo = MaterialInfo {
    name: "Titanium Alloy",
    properties: &[
        "Exceptional strength-to-density ratio",
        "Superior fatigue resistance",
        "Yield strength: 800-1200 MPa",
        "Excellent elastic deformation properties",
    ],
    description: "Titanium alloys combine high strength with low density, showing excellent elastic behavior and fatigue resistance.",
};

/// 150 to 300 GPa.
const STEEL: MaterialInfo = MaterialInfo {
    name: "Steel Alloy",
    properties: &[
        "High tensile strength",
        "Good elastic limit",
        "Yield strength: 250-1200 MPa",
        "Predictable stress-strain behavior",
    ],
    description: "Steel alloys demonstrate excellent elastic properties with a well-defined elastic limit and predictable deformation behavior.",
};

/// 300 GPa and above.
const TUNGSTEN: MaterialInfo = MaterialInfo {
    name: "Tungsten Alloy",
    properties: &[
        "Extremely high stiffness",
        "Outstanding wear resistance",
        "Yield strength: 1300-1600 MPa",
        "Limited elastic deformation range",
    ],
    description: "Tungsten alloys exhibit very high stiffness and strength, making them resistant to elastic deformation under load.",
};

/// Classify a modulus in gigapascals into an alloy family.
///
/// # Examples
/// ```
/// use beamx::material_info;
///
/// assert_eq!(material_info(200.0).name, "Steel Alloy");
/// assert_eq!(material_info(70.0).name, "Aluminum Alloy");
/// ```
#[must_use]
pub fn material_info(elastic_modulus_gpa: f64) -> MaterialInfo {
    if elastic_modulus_gpa < 80.0 {
        ALUMINUM
    } else if elastic_modulus_gpa < 150.0 {
        TITANIUM
    } else if elastic_modulus_gpa < 300.0 {
        STEEL
    } else {
        TUNGSTEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_stiffer_family() {
        assert_eq!(material_info(79.9).name, "Aluminum Alloy");
        assert_eq!(material_info(80.0).name, "Titanium Alloy");
        assert_eq!(material_info(150.0).name, "Steel Alloy");
        assert_eq!(material_info(300.0).name, "Tungsten Alloy");
        assert_eq!(material_info(400.0).name, "Tungsten Alloy");
    }

    #[test]
    fn every_family_lists_four_properties() {
        for modulus in [50.0, 100.0, 200.0, 350.0] {
            assert_eq!(material_info(modulus).properties.len(), 4);
        }
    }
}
