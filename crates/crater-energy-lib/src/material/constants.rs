//! Built-in material strength limits.

/// Approximate strength limits in pascals for the built-in material catalog.
///
/// The values are deliberately coarse: each one acts as an energy-per-volume
/// proxy for the static work model, not as an engineering design value.
pub const BUILTIN_MATERIALS: [(&str, f64); 11] = [
    ("wood", 60e6),
    ("concrete", 60e6),
    ("reinforced_concrete", 120e6),
    ("asphalt", 3e6),
    ("brick", 15e6),
    ("steel", 800e6),
    ("iron", 400e6),
    ("titanium", 1100e6),
    ("ceramic", 80e6),
    ("rock", 200e6),
    ("soil", 0.3e6),
];

/// Material selected when a caller does not choose one explicitly.
pub const DEFAULT_MATERIAL: &str = "concrete";
