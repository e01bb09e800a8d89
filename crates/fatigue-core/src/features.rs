//! Fixed input schema for the fatigue-strength classifier.
//!
//! The 15 features cover alloy composition (Cr, C, Mo, ...) and heat
//! treatment parameters (tempering, normalizing, carburization). Their
//! order is the order the scaler and classifier artifacts were fitted
//! with, so it must never change between releases of the artifacts.

use crate::error::CoreError;

/// Number of input features expected by the fitted artifacts.
pub const FEATURE_COUNT: usize = 15;

/// One entry of the input schema: a short code and a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Short code used on the input surface, e.g. `Cr`.
    pub code: &'static str,
    /// Full display name used on the output surface, e.g. `Chromium`.
    pub name: &'static str,
}

/// The input schema, in fitting order.
///
/// Codes are case-sensitive: `TT` (tempering temperature) and `Tt`
/// (tempering time) are distinct features.
pub const FEATURES: [Feature; FEATURE_COUNT] = [
    Feature { code: "Cr", name: "Chromium" },
    Feature { code: "C", name: "Carbon" },
    Feature { code: "Mo", name: "Molybdenum" },
    Feature { code: "Mn", name: "Manganese" },
    Feature { code: "Ni", name: "Nickel" },
    Feature { code: "Si", name: "Silicon" },
    Feature { code: "TT", name: "Tempering temperature" },
    Feature { code: "NT", name: "Normalizing temperature" },
    Feature { code: "RedRatio", name: "Reduction Ratio" },
    Feature { code: "THT", name: "Through hardening temperature" },
    Feature { code: "TCr", name: "Cooling rate for Tempering" },
    Feature { code: "THQCr", name: "Cooling rate for Through hardening" },
    Feature { code: "Tt", name: "Tempering Time" },
    Feature { code: "CT", name: "Carburization temperature" },
    Feature { code: "Dt", name: "Diffusion Time" },
];

/// Position of a feature code in the schema, if it exists.
pub fn feature_index(code: &str) -> Option<usize> {
    FEATURES.iter().position(|f| f.code == code)
}

/// An assembled input sample: one value per schema entry, in schema order.
///
/// Values default to 0.0 and are unconstrained reals; physical
/// plausibility is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }
}

impl FeatureVector {
    /// Assemble a vector from values already in schema order.
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Assemble a vector from `(code, value)` pairs.
    ///
    /// Codes not present in the pairs keep the 0.0 default; an unknown
    /// code is an error. Later pairs overwrite earlier ones.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut vector = Self::default();
        for (code, value) in pairs {
            vector.set(code, value)?;
        }
        Ok(vector)
    }

    /// Set the value for a feature code.
    pub fn set(&mut self, code: &str, value: f64) -> Result<(), CoreError> {
        let idx =
            feature_index(code).ok_or_else(|| CoreError::UnknownFeature(code.to_string()))?;
        self.values[idx] = value;
        Ok(())
    }

    /// Current value for a feature code.
    pub fn get(&self, code: &str) -> Option<f64> {
        feature_index(code).map(|idx| self.values[idx])
    }

    /// The values in schema order.
    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    /// Reset every value to the 0.0 default.
    pub fn clear(&mut self) {
        self.values = [0.0; FEATURE_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_fifteen_unique_codes() {
        assert_eq!(FEATURES.len(), FEATURE_COUNT);
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate code {:?}", a.code);
                assert_ne!(a.name, b.name, "duplicate name {:?}", a.name);
            }
        }
    }

    #[test]
    fn schema_order_matches_fitting_order() {
        assert_eq!(FEATURES[0].code, "Cr");
        assert_eq!(FEATURES[6].code, "TT");
        assert_eq!(FEATURES[12].code, "Tt");
        assert_eq!(FEATURES[14].code, "Dt");
    }

    #[test]
    fn codes_are_case_sensitive() {
        let tt = feature_index("TT").unwrap();
        let t_time = feature_index("Tt").unwrap();
        assert_ne!(tt, t_time);
        assert_eq!(feature_index("cr"), None);
    }

    #[test]
    fn default_vector_is_all_zeros() {
        let v = FeatureVector::default();
        assert!(v.values().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn set_by_code() {
        let mut v = FeatureVector::default();
        v.set("Cr", 1.25).unwrap();
        v.set("Dt", -3.0).unwrap();
        assert_eq!(v.get("Cr"), Some(1.25));
        assert_eq!(v.values()[0], 1.25);
        assert_eq!(v.values()[14], -3.0);
        assert_eq!(v.values()[1], 0.0);
    }

    #[test]
    fn unknown_code_rejected() {
        let mut v = FeatureVector::default();
        let err = v.set("Zn", 0.5).unwrap_err();
        assert_eq!(err, CoreError::UnknownFeature("Zn".to_string()));
    }

    #[test]
    fn from_pairs_fills_missing_with_zero() {
        let v = FeatureVector::from_pairs([("C", 0.42), ("Ni", 1.1)]).unwrap();
        assert_eq!(v.get("C"), Some(0.42));
        assert_eq!(v.get("Ni"), Some(1.1));
        assert_eq!(v.get("Mo"), Some(0.0));
    }

    #[test]
    fn from_pairs_later_pair_wins() {
        let v = FeatureVector::from_pairs([("C", 0.1), ("C", 0.9)]).unwrap();
        assert_eq!(v.get("C"), Some(0.9));
    }

    #[test]
    fn from_pairs_propagates_unknown_code() {
        assert!(FeatureVector::from_pairs([("Cu", 1.0)]).is_err());
    }

    #[test]
    fn clear_resets_to_default() {
        let mut v = FeatureVector::from_pairs([("Si", 2.0)]).unwrap();
        v.clear();
        assert_eq!(v, FeatureVector::default());
    }
}
