//! Contact, crater and impact geometry types.
//!
//! All user-facing dimensions are expressed in centimeters; the calculator
//! converts them to meters with [`diameter_cm_to_radius_m`] before use.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{fuzzy_matches, Error, Result};

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Convert a diameter in centimeters to a radius in meters.
pub fn diameter_cm_to_radius_m(diameter_cm: f64) -> f64 {
    diameter_cm / CM_PER_M / 2.0
}

/// Convert a length in centimeters to meters.
pub fn cm_to_m(length_cm: f64) -> f64 {
    length_cm / CM_PER_M
}

/// Which side of the impact a contact option describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactGroup {
    /// The part delivering the blow.
    Impact,
    /// The part receiving the blow.
    Target,
}

impl ContactGroup {
    pub fn label(self) -> &'static str {
        match self {
            ContactGroup::Impact => "Impact part",
            ContactGroup::Target => "Target part",
        }
    }
}

/// One of the 8 predefined contact surface sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactOption {
    Fingertip,
    Knuckle,
    Fist,
    Palm,
    Rivet,
    Bolt,
    Pipe,
    Plate,
}

impl ContactOption {
    /// Every selectable option, impact parts first.
    pub const ALL: [ContactOption; 8] = [
        ContactOption::Fingertip,
        ContactOption::Knuckle,
        ContactOption::Fist,
        ContactOption::Palm,
        ContactOption::Rivet,
        ContactOption::Bolt,
        ContactOption::Pipe,
        ContactOption::Plate,
    ];

    /// Contact diameter in centimeters.
    pub fn diameter_cm(self) -> f64 {
        match self {
            ContactOption::Fingertip => 1.5,
            ContactOption::Knuckle => 2.5,
            ContactOption::Fist => 8.0,
            ContactOption::Palm => 10.0,
            ContactOption::Rivet => 1.0,
            ContactOption::Bolt => 2.0,
            ContactOption::Pipe => 5.0,
            ContactOption::Plate => 15.0,
        }
    }

    pub fn group(self) -> ContactGroup {
        match self {
            ContactOption::Fingertip
            | ContactOption::Knuckle
            | ContactOption::Fist
            | ContactOption::Palm => ContactGroup::Impact,
            ContactOption::Rivet
            | ContactOption::Bolt
            | ContactOption::Pipe
            | ContactOption::Plate => ContactGroup::Target,
        }
    }

    /// Stable lowercase key used on the command line and in JSON.
    pub fn key(self) -> &'static str {
        match self {
            ContactOption::Fingertip => "fingertip",
            ContactOption::Knuckle => "knuckle",
            ContactOption::Fist => "fist",
            ContactOption::Palm => "palm",
            ContactOption::Rivet => "rivet",
            ContactOption::Bolt => "bolt",
            ContactOption::Pipe => "pipe",
            ContactOption::Plate => "plate",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ContactOption::Fingertip => "Fingertip",
            ContactOption::Knuckle => "Knuckle",
            ContactOption::Fist => "Fist",
            ContactOption::Palm => "Palm",
            ContactOption::Rivet => "Rivet head",
            ContactOption::Bolt => "Bolt head",
            ContactOption::Pipe => "Pipe end",
            ContactOption::Plate => "Plate",
        }
    }

    /// Find the option with exactly this diameter, if any.
    ///
    /// No two options share a diameter.
    pub fn from_diameter_cm(diameter_cm: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| (option.diameter_cm() - diameter_cm).abs() < 1e-9)
    }
}

impl fmt::Display for ContactOption {
    /// Formats as `Impact part — Fist (8 cm)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} — {} ({} cm)",
            self.group().label(),
            self.label(),
            self.diameter_cm()
        )
    }
}

impl FromStr for ContactOption {
    type Err = Error;

    /// Accepts an option key (`fist`) or a diameter matching one of the options (`8`).
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase();
        if let Some(option) = Self::ALL.into_iter().find(|o| o.key() == needle) {
            return Ok(option);
        }
        if let Some(option) = needle
            .parse::<f64>()
            .ok()
            .and_then(Self::from_diameter_cm)
        {
            return Ok(option);
        }
        Err(Error::UnknownContact {
            key: s.to_string(),
            suggestions: fuzzy_matches(s, Self::ALL.iter().map(|o| o.key()), 3),
        })
    }
}

/// Selects which crater dimensions are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryMode {
    #[default]
    Circular,
    Elliptical,
}

impl GeometryMode {
    pub fn label(self) -> &'static str {
        match self {
            GeometryMode::Circular => "diameter",
            GeometryMode::Elliptical => "width × height",
        }
    }
}

impl FromStr for GeometryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circular" | "diameter" | "d" => Ok(GeometryMode::Circular),
            "elliptical" | "wh" | "ellipse" => Ok(GeometryMode::Elliptical),
            other => Err(format!(
                "unknown geometry mode '{other}'; expected 'circular' or 'elliptical'"
            )),
        }
    }
}

/// Shape of the crater mouth, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum CraterGeometry {
    Circular { diameter_cm: f64 },
    /// Width and height are two orthogonal diameters of the ellipse.
    Elliptical { width_cm: f64, height_cm: f64 },
}

impl CraterGeometry {
    pub fn mode(&self) -> GeometryMode {
        match self {
            CraterGeometry::Circular { .. } => GeometryMode::Circular,
            CraterGeometry::Elliptical { .. } => GeometryMode::Elliptical,
        }
    }

    /// Check that every active dimension is a finite positive number.
    pub fn validate(&self) -> Result<()> {
        let fields: Vec<(&'static str, f64)> = match *self {
            CraterGeometry::Circular { diameter_cm } => vec![("diameter", diameter_cm)],
            CraterGeometry::Elliptical {
                width_cm,
                height_cm,
            } => vec![("width", width_cm), ("height", height_cm)],
        };

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidCraterDimension {
                    field,
                    value: Some(value),
                });
            }
        }
        Ok(())
    }

    /// Semi-axes `(a, b)` in meters. Both are the radius for a circular crater.
    pub fn semi_axes_m(&self) -> (f64, f64) {
        match *self {
            CraterGeometry::Circular { diameter_cm } => {
                let r = diameter_cm_to_radius_m(diameter_cm);
                (r, r)
            }
            CraterGeometry::Elliptical {
                width_cm,
                height_cm,
            } => (
                diameter_cm_to_radius_m(width_cm),
                diameter_cm_to_radius_m(height_cm),
            ),
        }
    }

    /// Radius in meters of the circle with the same area as the crater mouth.
    pub fn equivalent_radius_m(&self) -> f64 {
        match *self {
            CraterGeometry::Circular { diameter_cm } => diameter_cm_to_radius_m(diameter_cm),
            CraterGeometry::Elliptical { .. } => {
                let (a, b) = self.semi_axes_m();
                (a * b).max(0.0).sqrt()
            }
        }
    }

    /// Area of the crater mouth in square meters.
    ///
    /// Elliptical craters use the true ellipse area `π·a·b`.
    pub fn mouth_area_m2(&self) -> f64 {
        match self {
            CraterGeometry::Circular { .. } => {
                let r = self.equivalent_radius_m();
                std::f64::consts::PI * r * r
            }
            CraterGeometry::Elliptical { .. } => {
                let (a, b) = self.semi_axes_m();
                std::f64::consts::PI * a * b
            }
        }
    }
}

/// Penetration model used to derive the displaced volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactType {
    /// Partial penetration: contact cylinder plus a frustum up to the crater mouth.
    #[default]
    Normal,
    /// Full through-penetration: crater cross-section times depth.
    Clean,
}

impl ImpactType {
    pub fn label(self) -> &'static str {
        match self {
            ImpactType::Normal => "normal",
            ImpactType::Clean => "clean",
        }
    }
}

impl FromStr for ImpactType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(ImpactType::Normal),
            "clean" => Ok(ImpactType::Clean),
            other => Err(format!(
                "unknown impact type '{other}'; expected 'normal' or 'clean'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_contact_options_with_distinct_diameters() {
        let mut diameters: Vec<f64> = ContactOption::ALL.iter().map(|o| o.diameter_cm()).collect();
        diameters.sort_by(f64::total_cmp);
        diameters.dedup();
        assert_eq!(diameters.len(), 8);
    }

    #[test]
    fn contact_parses_from_key_or_diameter() {
        assert_eq!("fist".parse::<ContactOption>().unwrap(), ContactOption::Fist);
        assert_eq!(" Pipe ".parse::<ContactOption>().unwrap(), ContactOption::Pipe);
        assert_eq!("5".parse::<ContactOption>().unwrap(), ContactOption::Pipe);
        assert_eq!("2.5".parse::<ContactOption>().unwrap(), ContactOption::Knuckle);
    }

    #[test]
    fn contact_rejects_unlisted_diameter() {
        let err = "7".parse::<ContactOption>().expect_err("7 cm is not an option");
        assert!(matches!(err, Error::UnknownContact { .. }));
    }

    #[test]
    fn contact_display_includes_group_and_size() {
        assert_eq!(ContactOption::Fist.to_string(), "Impact part — Fist (8 cm)");
        assert_eq!(
            ContactOption::Knuckle.to_string(),
            "Impact part — Knuckle (2.5 cm)"
        );
    }

    #[test]
    fn elliptical_validation_names_the_bad_field() {
        let crater = CraterGeometry::Elliptical {
            width_cm: 4.0,
            height_cm: f64::NAN,
        };
        match crater.validate() {
            Err(Error::InvalidCraterDimension { field, .. }) => assert_eq!(field, "height"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn square_ellipse_matches_circle() {
        let circle = CraterGeometry::Circular { diameter_cm: 6.0 };
        let ellipse = CraterGeometry::Elliptical {
            width_cm: 6.0,
            height_cm: 6.0,
        };
        assert!((circle.equivalent_radius_m() - ellipse.equivalent_radius_m()).abs() < 1e-15);
        assert!((circle.mouth_area_m2() - ellipse.mouth_area_m2()).abs() < 1e-15);
    }
}
