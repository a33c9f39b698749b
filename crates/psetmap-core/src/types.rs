// psetmap - Property set mapping tables
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tagged enumerations for property set kinds and property data types.
//!
//! Both enumerations are closed sets with an `Other` fallback that keeps the
//! original spelling, so tables using codes outside the known set still
//! serialize back byte-for-byte.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Whether a property set applies per instance or per type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PsetKind {
    /// Code `I`.
    #[default]
    Instance,
    /// Code `T`.
    Type,
    /// Any other code, stored verbatim.
    Other(String),
}

impl PsetKind {
    /// The short code written to the table.
    pub fn code(&self) -> &str {
        match self {
            Self::Instance => "I",
            Self::Type => "T",
            Self::Other(code) => code,
        }
    }

    /// The user-facing label. Unknown codes are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            Self::Instance => "Instance",
            Self::Type => "Type",
            Self::Other(code) => code,
        }
    }

    /// Map a stored code to a kind, keeping unknown codes verbatim.
    pub fn from_code(code: &str) -> Self {
        match code {
            "I" => Self::Instance,
            "T" => Self::Type,
            other => Self::Other(other.to_string()),
        }
    }

    /// Interpret user input: a code or a label, case-insensitive.
    ///
    /// Returns `None` for anything else; typed input never produces `Other`.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "i" | "instance" => Some(Self::Instance),
            "t" | "type" => Some(Self::Type),
            _ => None,
        }
    }

    /// Whether this is one of the two recognized kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// The value to preselect in a closed Instance/Type choice.
    pub fn choice(&self) -> PsetKind {
        match self {
            Self::Other(_) => Self::Instance,
            known => known.clone(),
        }
    }
}

impl fmt::Display for PsetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for PsetKind {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl FromStr for PsetKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

macro_rules! data_types {
    ($($variant:ident),+ $(,)?) => {
        /// Semantic data type of a mapped property.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum DataType {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
            /// A value outside the known set, stored verbatim.
            Other(String),
        }

        impl DataType {
            /// Names of every known data type, in presentation order.
            pub const KNOWN_NAMES: &'static [&'static str] = &[$(stringify!($variant)),+];

            /// The spelling written to the table.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                    Self::Other(name) => name,
                }
            }

            /// Look up a known data type by its exact name.
            pub fn from_known(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

data_types! {
    Acceleration,
    AngularVelocity,
    Area,
    AreaDensity,
    Boolean,
    ClassificationReference,
    ColorTemperature,
    Count,
    Currency,
    DynamicViscosity,
    ElectricCurrent,
    ElectricVoltage,
    Energy,
    ElectricalEfficacy,
    Force,
    Frequency,
    HeatFluxDensity,
    HeatingValue,
    Identifier,
    Illuminance,
    Integer,
    IonConcentration,
    IsothermalMoistureCapacity,
    Label,
    Length,
    LinearForce,
    LinearMoment,
    LinearStiffness,
    LinearVelocity,
    Logical,
    LuminousFlux,
    LuminousIntensity,
    Mass,
    MassDensity,
    MassFlowRate,
    MassPerLength,
    ModulusOfElasticity,
    MoistureDiffusivity,
    MomentOfInertia,
    NormalisedRatio,
    Numeric,
    PlanarForce,
    PlaneAngle,
    PositiveLength,
    PositivePlaneAngle,
    PositiveRatio,
    Power,
    Pressure,
    Ratio,
    Real,
    RotationalFrequency,
    SoundPower,
    SoundPressure,
    SpecificHeatCapacity,
    Text,
    ThermalConductivity,
    ThermalExpansionCoefficient,
    ThermalResistance,
    ThermalTransmittance,
    ThermodynamicTemperature,
    Time,
    Torque,
    VaporPermeability,
    Volume,
    VolumetricFlowRate,
    WarpingConstant,
}

impl DataType {
    /// The type preselected when a stored value is not a known member.
    pub const DEFAULT_CHOICE: DataType = DataType::Acceleration;

    /// Map a stored name to a data type, keeping unknown names verbatim.
    pub fn from_name(name: &str) -> Self {
        Self::from_known(name).unwrap_or_else(|| Self::Other(name.to_string()))
    }

    /// Iterate over every known data type in presentation order.
    pub fn known() -> impl Iterator<Item = DataType> {
        Self::KNOWN_NAMES.iter().filter_map(|name| Self::from_known(name))
    }

    /// Whether this is a member of the closed set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// The value to preselect in a closed choice.
    pub fn choice(&self) -> DataType {
        match self {
            Self::Other(_) => Self::DEFAULT_CHOICE,
            known => known.clone(),
        }
    }
}

impl Default for DataType {
    fn default() -> Self {
        Self::DEFAULT_CHOICE
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DataType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl FromStr for DataType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{DataType, PsetKind};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for PsetKind {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for PsetKind {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let code = String::deserialize(deserializer)?;
            Ok(PsetKind::from_code(&code))
        }
    }

    impl Serialize for DataType {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for DataType {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let name = String::deserialize(deserializer)?;
            Ok(DataType::from_name(&name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== PsetKind tests ====================

    #[test]
    fn test_kind_codes() {
        assert_eq!(PsetKind::Instance.code(), "I");
        assert_eq!(PsetKind::Type.code(), "T");
        assert_eq!(PsetKind::Other("X".to_string()).code(), "X");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(PsetKind::Instance.label(), "Instance");
        assert_eq!(PsetKind::Type.label(), "Type");
        assert_eq!(PsetKind::Other("Q".to_string()).label(), "Q");
    }

    #[test]
    fn test_kind_from_code_keeps_unknown() {
        assert_eq!(PsetKind::from_code("I"), PsetKind::Instance);
        assert_eq!(PsetKind::from_code("T"), PsetKind::Type);
        assert_eq!(PsetKind::from_code("i"), PsetKind::Other("i".to_string()));
    }

    #[test]
    fn test_kind_from_input() {
        assert_eq!(PsetKind::from_input("instance"), Some(PsetKind::Instance));
        assert_eq!(PsetKind::from_input(" t "), Some(PsetKind::Type));
        assert_eq!(PsetKind::from_input("Type"), Some(PsetKind::Type));
        assert_eq!(PsetKind::from_input("both"), None);
    }

    #[test]
    fn test_kind_choice_falls_back_to_instance() {
        assert_eq!(PsetKind::Type.choice(), PsetKind::Type);
        assert_eq!(PsetKind::Other("Z".to_string()).choice(), PsetKind::Instance);
        assert!(!PsetKind::Other("Z".to_string()).is_known());
    }

    // ==================== DataType tests ====================

    #[test]
    fn test_known_names_are_complete() {
        assert_eq!(DataType::KNOWN_NAMES.len(), 66);
        assert_eq!(DataType::known().count(), 66);
        assert_eq!(DataType::KNOWN_NAMES[0], "Acceleration");
        assert_eq!(DataType::KNOWN_NAMES[65], "WarpingConstant");
    }

    #[test]
    fn test_known_names_round_trip() {
        for name in DataType::KNOWN_NAMES {
            let data_type = DataType::from_name(name);
            assert!(data_type.is_known(), "{} should be known", name);
            assert_eq!(data_type.as_str(), *name);
        }
    }

    #[test]
    fn test_unknown_name_is_kept_verbatim() {
        let data_type = DataType::from_name("Colour");
        assert_eq!(data_type, DataType::Other("Colour".to_string()));
        assert_eq!(data_type.to_string(), "Colour");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(!DataType::from_name("length").is_known());
    }

    #[test]
    fn test_choice_substitutes_default() {
        assert_eq!(DataType::Length.choice(), DataType::Length);
        assert_eq!(
            DataType::Other("Colour".to_string()).choice(),
            DataType::Acceleration
        );
        assert_eq!(DataType::default(), DataType::Acceleration);
    }

    #[test]
    fn test_from_str() {
        let data_type: DataType = "Area".parse().unwrap();
        assert_eq!(data_type, DataType::Area);
        let kind: PsetKind = "T".parse().unwrap();
        assert_eq!(kind, PsetKind::Type);
    }
}
