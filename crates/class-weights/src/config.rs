use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::WeightError;

/// Keyword selecting inverse-frequency weighting.
pub const AUTO: &str = "auto";

/// Class weighting policy.
///
/// In a config file this is written as `null` (uniform), `"auto"`, or a map
/// from class label to weight, e.g. `{"0": 1.0, "1": 5.0}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassWeight<L> {
    /// Every class gets weight 1.0.
    Uniform,
    /// Weights inversely proportional to class frequency in `y`.
    Auto,
    /// User supplied weights; classes not listed keep weight 1.0.
    Explicit(BTreeMap<L, f64>),
}

impl<L> Default for ClassWeight<L> {
    fn default() -> Self {
        ClassWeight::Uniform
    }
}

impl<L> ClassWeight<L> {
    /// True when the policy leaves every class at 1.0 regardless of `y`.
    pub fn is_uniform(&self) -> bool {
        match self {
            ClassWeight::Uniform => true,
            ClassWeight::Auto => false,
            ClassWeight::Explicit(weights) => weights.is_empty(),
        }
    }

    fn parse_keyword(s: &str) -> Result<Self, WeightError> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ClassWeight::Auto),
            "" | "none" => Ok(ClassWeight::Uniform),
            _ => Err(WeightError::InvalidPolicyType(s.to_string())),
        }
    }
}

impl<L: Ord> FromIterator<(L, f64)> for ClassWeight<L> {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        ClassWeight::Explicit(iter.into_iter().collect())
    }
}

impl<L> FromStr for ClassWeight<L> {
    type Err = WeightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_keyword(s)
    }
}

impl<L: Serialize> Serialize for ClassWeight<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ClassWeight::Uniform => serializer.serialize_none(),
            ClassWeight::Auto => serializer.serialize_str(AUTO),
            ClassWeight::Explicit(weights) => {
                let mut map = serializer.serialize_map(Some(weights.len()))?;
                for (label, weight) in weights {
                    map.serialize_entry(label, weight)?;
                }
                map.end()
            }
        }
    }
}

struct ClassWeightVisitor<L> {
    marker: PhantomData<L>,
}

impl<'de, L> Visitor<'de> for ClassWeightVisitor<L>
where
    L: Deserialize<'de> + Ord,
{
    type Value = ClassWeight<L>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "null, \"auto\", or a map of class label to weight")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ClassWeight::Uniform)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ClassWeight::Uniform)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ClassWeight::parse_keyword(v).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut weights = BTreeMap::new();
        while let Some((label, weight)) = access.next_entry::<L, f64>()? {
            weights.insert(label, weight);
        }
        Ok(ClassWeight::Explicit(weights))
    }
}

impl<'de, L> Deserialize<'de> for ClassWeight<L>
where
    L: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ClassWeightVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_parsing_is_case_insensitive() {
        assert_eq!(ClassWeight::<i32>::parse_keyword(" AUTO ").unwrap(), ClassWeight::Auto);
        assert_eq!(ClassWeight::<i32>::parse_keyword("None").unwrap(), ClassWeight::Uniform);
    }

    #[test]
    fn unknown_keyword_reports_value() {
        let err = ClassWeight::<i32>::parse_keyword("balanced").unwrap_err();
        assert_eq!(err, WeightError::InvalidPolicyType("balanced".to_string()));
    }
}
