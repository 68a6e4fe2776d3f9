use crate::Thermodynamics::DBhandlers::NASAdata::ThermoError;
use thiserror::Error;

/// physically invalid numeric input
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("A = {0:.16e}:  Negative Arrhenius prefactor is prohibited!")]
    NegativePrefactor(f64),
    #[error("T = {0:.16e}:  Negative temperatures are prohibited!")]
    NegativeTemperature(f64),
    #[error("R = {0:.16e}:  Negative ideal gas constant is prohibited!")]
    NegativeGasConstant(f64),
    #[error("E = {0:.16e}:  At T = 0 only positive activation energies give a rate coefficient!")]
    ZeroTemperature(f64),
    #[error("k = {0:.16e}:  Negative reaction rate coefficients are prohibited!")]
    NegativeRateCoefficient(f64),
    #[error("x{index} = {value:.16e}:  Negative concentrations are prohibited!")]
    NegativeConcentration { index: usize, value: f64 },
    #[error("nu_{species}{reaction} = {value}:  Negative stoichiometric coefficients are prohibited!")]
    NegativeStoichCoefficient {
        species: usize,
        reaction: usize,
        value: f64,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum KineticsError {
    /// two reactions of one mechanism share an id
    #[error("Duplicate id: {0}")]
    DuplicateReactionId(String),
    /// reactant or product is not declared in the species list
    #[error("{species} is not in species array (reaction {reaction})")]
    UndeclaredSpecies { reaction: String, species: String },
    #[error("{what} must be a vector of size {expected}, got {found}")]
    Dimension {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Progress rate for {kind} reactions is not supported (reaction {reaction})")]
    UnsupportedReaction { reaction: String, kind: String },
    #[error(transparent)]
    Thermo(#[from] ThermoError),
}

impl KineticsError {
    /// structural problems of the mechanism found at construction
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            KineticsError::DuplicateReactionId(_) | KineticsError::UndeclaredSpecies { .. }
        )
    }
}
