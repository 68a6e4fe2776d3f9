use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThermoError {
    #[error("species {0} has no thermodynamic data")]
    UnknownSpecies(String),
    #[error("species {species}: no coefficients for the {range} temperature range")]
    RangeNotFound { species: String, range: TempRange },
    #[error("species {species}: no coefficients found for temperature {temperature} K")]
    OutOfRange { species: String, temperature: f64 },
    #[error("species {species}: NASA data must contain 17 numbers, got {len}")]
    InvalidCoefficients { species: String, len: usize },
    #[error("species {0}: NASA entry has neither a low nor a high temperature range")]
    EmptyEntry(String),
    #[error("reversible reactions need NASA data, but no thermodynamic store is attached")]
    StoreNotAttached,
}

/// the two temperature ranges of NASA-7 polynomials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TempRange {
    Low,
    High,
}

impl fmt::Display for TempRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TempRange::Low => write!(f, "low"),
            TempRange::High => write!(f, "high"),
        }
    }
}

/// 7 coefficients of NASA format valid between T_min and T_max
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NASApiece {
    pub T_min: f64,
    pub T_max: f64,
    pub coeffs: [f64; 7],
}

#[allow(non_snake_case)]
impl NASApiece {
    pub fn new(T_min: f64, T_max: f64, coeffs: [f64; 7]) -> Self {
        Self {
            T_min,
            T_max,
            coeffs,
        }
    }
    /// bounds are inclusive
    pub fn covers(&self, T: f64) -> bool {
        self.T_min <= T && T <= self.T_max
    }
    pub fn H_over_RT(&self, T: f64) -> f64 {
        H_over_RT(&self.coeffs, T)
    }
    pub fn S_over_R(&self, T: f64) -> f64 {
        S_over_R(&self.coeffs, T)
    }
    pub fn Cp_over_R(&self, T: f64) -> f64 {
        Cp_over_R(&self.coeffs, T)
    }
}

/// read-only source of NASA coefficients, owned by the caller and shared with the engine
pub trait NASAstore {
    fn get_coefficients(&self, species: &str, range: TempRange) -> Result<NASApiece, ThermoError>;
}

/// dimensionless enthalpy
#[allow(non_snake_case)]
pub fn H_over_RT(a: &[f64; 7], T: f64) -> f64 {
    a[0] + a[1] * T / 2.0
        + a[2] * T.powf(2.0) / 3.0
        + a[3] * T.powf(3.0) / 4.0
        + a[4] * T.powf(4.0) / 5.0
        + a[5] / T
}

/// dimensionless entropy
#[allow(non_snake_case)]
pub fn S_over_R(a: &[f64; 7], T: f64) -> f64 {
    a[0] * T.ln()
        + a[1] * T
        + a[2] * T.powf(2.0) / 2.0
        + a[3] * T.powf(3.0) / 3.0
        + a[4] * T.powf(4.0) / 4.0
        + a[6]
}

/// dimensionless heat capacity
#[allow(non_snake_case)]
pub fn Cp_over_R(a: &[f64; 7], T: f64) -> f64 {
    a[0] + a[1] * T + a[2] * T.powf(2.0) + a[3] * T.powf(3.0) + a[4] * T.powf(4.0)
}

/// pick the piece valid at T: low range first, then high.
/// A species without a low range is still served by its high range
#[allow(non_snake_case)]
pub fn select_coefficients(
    store: &dyn NASAstore,
    species: &str,
    T: f64,
) -> Result<NASApiece, ThermoError> {
    for range in [TempRange::Low, TempRange::High] {
        match store.get_coefficients(species, range) {
            Ok(piece) if piece.covers(T) => return Ok(piece),
            Ok(_) | Err(ThermoError::RangeNotFound { .. }) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(ThermoError::OutOfRange {
        species: species.to_string(),
        temperature: T,
    })
}
