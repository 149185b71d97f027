//! Static fact tables for the bodies shown in the scene.
//!
//! The NEO catalog is a read-only literal table; asteroid sizes are derived
//! from the free-form `properties` text of each entry.

mod data;

pub use data::NEO_CATALOG;

use crate::types::{BodyKind, EARTH_DIAMETER_KM};

/// Visual exaggeration applied on top of the Earth-relative scale.
pub const ASTEROID_VISUAL_SCALE: f64 = 0.05;

/// Smallest rendered asteroid radius, in scene units.
pub const MIN_ASTEROID_SIZE: f32 = 0.01;

/// Diameter assumed when an entry's properties cannot be parsed, in km.
pub const DEFAULT_DIAMETER_KM: f64 = 1.0;

/// A near-Earth object entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeoRecord {
    pub name: &'static str,
    /// Closest-approach distance in AU.
    pub distance_au: f64,
    pub uniqueness: &'static str,
    /// Free-form physical summary, usually starting with `Diameter ~<n> <unit>`.
    pub properties: &'static str,
    pub details: &'static str,
}

/// Fact sheet for one of the two fixed bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyFacts {
    pub name: &'static str,
    pub fact: &'static str,
    pub mass: &'static str,
    pub radius: &'static str,
    pub period_label: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const EARTH_FACTS: BodyFacts = BodyFacts {
    name: "Earth",
    fact: "Earth is the only known planet with liquid water on its surface.",
    mass: "5.97 × 10^24 kg",
    radius: "6,371 km",
    period_label: "Rotation period",
    period: "23.93 hours",
    description: "Earth, our home planet, is the third planet from the Sun and the only \
        astronomical object known to harbor life. About 29.2% of Earth's surface is land, \
        with the remaining 70.8% covered with water. Earth's atmosphere is composed \
        primarily of nitrogen and oxygen.",
};

pub const MOON_FACTS: BodyFacts = BodyFacts {
    name: "Moon",
    fact: "The Moon is gradually moving away from Earth at a rate of about 3.8 cm per year.",
    mass: "7.34 × 10^22 kg",
    radius: "1,737.1 km",
    period_label: "Orbital period",
    period: "27.3 days",
    description: "The Moon is Earth's only natural satellite and the fifth largest moon in \
        the Solar System. It is about one-quarter the diameter of Earth and has a surface \
        area slightly smaller than the continent of Asia. The Moon's gravitational \
        influence produces the ocean tides, body tides, and the slight lengthening of the day.",
};

/// Errors from reading a diameter out of a catalog `properties` string.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("no diameter in properties: {0:?}")]
    MissingDiameter(String),

    #[error("invalid diameter value {0:?}")]
    InvalidNumber(String),

    #[error("unknown diameter unit {0:?}")]
    UnknownUnit(String),
}

/// Parse the diameter from a properties string such as
/// `"Diameter ~1.3 km (primary), ~0.4 km (secondary)"`.
///
/// Returns the first diameter found, converted to kilometers. A number
/// without a unit is taken as kilometers.
pub fn parse_diameter_km(properties: &str) -> Result<f64, CatalogError> {
    let Some((_, rest)) = properties.split_once("Diameter") else {
        return Err(CatalogError::MissingDiameter(properties.to_string()));
    };

    let rest = rest.trim_start_matches(|c: char| c == ':' || c == '~' || c.is_whitespace());
    let number_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    let (number, rest) = rest.split_at(number_len);

    let value: f64 = number
        .parse()
        .map_err(|_| CatalogError::InvalidNumber(number.to_string()))?;

    let unit: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    match unit.to_ascii_lowercase().as_str() {
        "" | "km" | "kilometer" | "kilometers" => Ok(value),
        "m" | "meter" | "meters" => Ok(value / 1000.0),
        _ => Err(CatalogError::UnknownUnit(unit)),
    }
}

/// Rendered radius for an asteroid of the given diameter.
///
/// Scales relative to the Earth (radius 1.0 in scene units), then applies
/// the visual exaggeration and the minimum size.
pub fn asteroid_size(diameter_km: f64) -> f32 {
    let earth_scale = 2.0 / EARTH_DIAMETER_KM;
    let size = (diameter_km * earth_scale * ASTEROID_VISUAL_SCALE) as f32;
    size.max(MIN_ASTEROID_SIZE)
}

/// Rendered radius for a catalog entry, falling back to the default
/// diameter when its properties are malformed.
pub fn record_size(record: &NeoRecord) -> f32 {
    let diameter = parse_diameter_km(record.properties).unwrap_or_else(|err| {
        bevy::log::warn!("{}: {err}, using {DEFAULT_DIAMETER_KM} km", record.name);
        DEFAULT_DIAMETER_KM
    });
    asteroid_size(diameter)
}

/// Content shown by the info popup for a selected body.
#[derive(Clone, Debug, PartialEq)]
pub struct InfoCard {
    pub title: &'static str,
    pub fact: &'static str,
    /// Property lines, rendered one per row.
    pub properties: Vec<String>,
    pub description: &'static str,
}

impl InfoCard {
    /// Build the card for a scene body. Returns `None` for an asteroid index
    /// outside the catalog.
    pub fn for_body(kind: BodyKind) -> Option<Self> {
        match kind {
            BodyKind::Earth => Some(Self::from_facts(&EARTH_FACTS)),
            BodyKind::Moon => Some(Self::from_facts(&MOON_FACTS)),
            BodyKind::Asteroid(index) => NEO_CATALOG.get(index).map(Self::from_record),
        }
    }

    fn from_facts(facts: &BodyFacts) -> Self {
        Self {
            title: facts.name,
            fact: facts.fact,
            properties: vec![
                format!("Mass: {}", facts.mass),
                format!("Radius: {}", facts.radius),
                format!("{}: {}", facts.period_label, facts.period),
            ],
            description: facts.description,
        }
    }

    fn from_record(record: &NeoRecord) -> Self {
        Self {
            title: record.name,
            fact: record.uniqueness,
            properties: vec![
                record.properties.to_string(),
                format!("Closest approach: {} AU", record.distance_au),
            ],
            description: record.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_kilometers() {
        let d = parse_diameter_km("Diameter ~1.3 km (primary), ~0.4 km (secondary)").unwrap();
        assert_relative_eq!(d, 1.3);
    }

    #[test]
    fn test_parse_meters_converts_to_km() {
        let d = parse_diameter_km("Diameter ~300 meters, stable Lagrange point orbit").unwrap();
        assert_relative_eq!(d, 0.3);
    }

    #[test]
    fn test_parse_without_unit_is_km() {
        assert_relative_eq!(parse_diameter_km("Diameter: 4").unwrap(), 4.0);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_diameter_km("Mass unknown"),
            Err(CatalogError::MissingDiameter(_))
        ));
        assert!(matches!(
            parse_diameter_km("Diameter ~ unknown"),
            Err(CatalogError::InvalidNumber(_))
        ));
        assert!(matches!(
            parse_diameter_km("Diameter ~3 furlongs"),
            Err(CatalogError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_every_catalog_entry_parses() {
        for record in NEO_CATALOG {
            assert!(
                parse_diameter_km(record.properties).is_ok(),
                "failed to parse {}",
                record.name
            );
        }
    }

    #[test]
    fn test_catalog_size_and_duplicates() {
        assert_eq!(NEO_CATALOG.len(), 64);
        let florence = NEO_CATALOG
            .iter()
            .filter(|r| r.name == "(3122) Florence")
            .count();
        assert_eq!(florence, 3);
    }

    #[test]
    fn test_size_respects_minimum() {
        assert_eq!(asteroid_size(0.002), MIN_ASTEROID_SIZE);
        // Ganymed, the largest entry, still clamps at the default scale.
        assert_eq!(asteroid_size(34.8), MIN_ASTEROID_SIZE);
        // Large enough to clear the minimum.
        let size = asteroid_size(2000.0);
        assert_relative_eq!(size, (2000.0 * 2.0 / 12742.0 * 0.05) as f32, epsilon = 1e-6);
        assert!(size > MIN_ASTEROID_SIZE);
    }

    #[test]
    fn test_record_size_falls_back_on_malformed_properties() {
        let record = NeoRecord {
            name: "Test",
            distance_au: 0.001,
            uniqueness: "",
            properties: "Irregular shape",
            details: "",
        };
        assert_eq!(record_size(&record), asteroid_size(DEFAULT_DIAMETER_KM));
    }

    #[test]
    fn test_info_cards() {
        let earth = InfoCard::for_body(BodyKind::Earth).unwrap();
        assert_eq!(earth.title, "Earth");
        assert_eq!(earth.properties.len(), 3);

        let first = InfoCard::for_body(BodyKind::Asteroid(0)).unwrap();
        assert_eq!(first.title, NEO_CATALOG[0].name);
        assert_eq!(first.fact, NEO_CATALOG[0].uniqueness);

        assert!(InfoCard::for_body(BodyKind::Asteroid(NEO_CATALOG.len())).is_none());
    }
}
