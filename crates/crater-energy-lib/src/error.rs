use thiserror::Error;

/// Convenient result alias for the crater energy library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a calculation is attempted before a contact size was chosen.
    #[error("no contact size selected; choose one of the 8 contact options")]
    NoContactSelected,

    /// Raised when the contact diameter is not a finite positive number.
    #[error("contact diameter must be a finite positive number of centimeters, got {value}")]
    InvalidContactDiameter { value: f64 },

    /// Raised when the penetration depth is missing, non-positive or not a number.
    #[error("depth/thickness must be a finite positive number of centimeters{}", format_value(.value))]
    InvalidDepth { value: Option<f64> },

    /// Raised when a field of the active crater geometry is missing or invalid.
    #[error("crater {field} must be a finite positive number of centimeters{}", format_value(.value))]
    InvalidCraterDimension {
        field: &'static str,
        value: Option<f64>,
    },

    /// Raised when the crater is narrower than the contact footprint.
    #[error(
        "crater size is smaller than the contact diameter (crater radius {crater_radius_m} m < contact radius {contact_radius_m} m)"
    )]
    CraterTooSmall {
        crater_radius_m: f64,
        contact_radius_m: f64,
    },

    /// Raised when finite inputs produce a volume or energy too large to represent.
    #[error(
        "energy estimate overflowed (volume {volume_m3} m³, energy {energy_j} J); reduce the crater or depth inputs"
    )]
    EnergyOverflow { volume_m3: f64, energy_j: f64 },

    /// Raised when a material identifier is not present in the material table.
    #[error("unknown material: {name}{}", format_suggestions(.suggestions))]
    UnknownMaterial {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a contact option key or diameter does not match a predefined option.
    #[error("unknown contact option: {key}{}", format_suggestions(.suggestions))]
    UnknownContact {
        key: String,
        suggestions: Vec<String>,
    },

    /// Raised when material catalog data fails validation.
    #[error("invalid material data: {message}")]
    MaterialDataValidation { message: String },

    /// Raised when duplicate material names are encountered during catalog load.
    #[error("duplicate material name encountered: {name}")]
    DuplicateMaterial { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_value(value: &Option<f64>) -> String {
    match value {
        Some(v) => format!(", got {v}"),
        None => ", but none was provided".to_string(),
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Rank `candidates` by Jaro-Winkler similarity to `query` and return up to `limit` names.
///
/// Candidates scoring below 0.7 are discarded so wildly different names are not suggested.
pub(crate) fn fuzzy_matches<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.trim().to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|name| (strsim::jaro_winkler(&needle, &name.to_lowercase()), name))
        .filter(|(score, _)| *score >= 0.7)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, name)| name.to_string())
        .collect()
}
