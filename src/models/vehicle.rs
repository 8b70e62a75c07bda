//! Modelo de dominio del vehículo
//!
//! Este módulo contiene los enums de transmisión y combustible y el registro
//! de vehículo que se arma en cada submission. Los strings de los enums
//! coinciden exactamente con las categorías del dataset de entrenamiento.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tipo de transmisión - las variantes mapean a las categorías del dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
    #[serde(rename = "Semi-Auto")]
    SemiAuto,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "Manual",
            Transmission::Automatic => "Automatic",
            Transmission::SemiAuto => "Semi-Auto",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tipo de combustible - las variantes mapean a las categorías del dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    Other,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
            FuelType::Other => "Other",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registro de vehículo armado en cada submission.
///
/// Invariante: `model` pertenece a la entrada de `brand` en el catálogo
/// (validado en el controller antes de construir el registro).
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub mileage: u32,
    pub engine_size: f64,
    pub tax: u32,
    pub mpg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmission_strings_match_dataset() {
        assert_eq!(Transmission::Manual.as_str(), "Manual");
        assert_eq!(Transmission::Automatic.as_str(), "Automatic");
        assert_eq!(Transmission::SemiAuto.as_str(), "Semi-Auto");
    }

    #[test]
    fn test_transmission_deserializes_dataset_spelling() {
        let t: Transmission = serde_json::from_str("\"Semi-Auto\"").unwrap();
        assert_eq!(t, Transmission::SemiAuto);
        assert!(serde_json::from_str::<Transmission>("\"SemiAuto\"").is_err());
    }

    #[test]
    fn test_fuel_type_round_trip() {
        for fuel in [
            FuelType::Petrol,
            FuelType::Diesel,
            FuelType::Hybrid,
            FuelType::Electric,
            FuelType::Other,
        ] {
            let json = serde_json::to_string(&fuel).unwrap();
            assert_eq!(json, format!("\"{}\"", fuel.as_str()));
        }
    }
}
