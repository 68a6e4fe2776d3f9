#![allow(non_snake_case)]
use crate::Kinetics::kinetics_error::DomainError;
use RustedSciThe::symbolic::symbolic_engine::Expr;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ideal gas constant used by Arrhenius-type rate constants unless the reaction sets its own
pub const R_DEFAULT: f64 = 8.314;

fn default_R() -> f64 {
    R_DEFAULT
}

fn check_arrhenius(A: f64, R: f64, T: f64) -> Result<(), DomainError> {
    if A < 0.0 {
        return Err(DomainError::NegativePrefactor(A));
    }
    if T < 0.0 {
        return Err(DomainError::NegativeTemperature(T));
    }
    if R < 0.0 {
        return Err(DomainError::NegativeGasConstant(R));
    }
    Ok(())
}

/// exp(-E/R/T), at T = 0 the limit 0 for E > 0
fn boltzmann_factor(E: f64, R: f64, T: f64) -> Result<f64, DomainError> {
    if T == 0.0 {
        return if E > 0.0 {
            Ok(0.0)
        } else {
            Err(DomainError::ZeroTemperature(E))
        };
    }
    Ok(f64::exp(-E / R / T))
}

#[enum_dispatch]
pub trait RateConstant {
    /// rate constant at temperature T (absolute temperature in Kelvin!)
    fn K_const(&self, T: f64) -> Result<f64, DomainError>;
    /// symbolic k(T), the variable is "T"
    fn K_expr(&self) -> Expr;
}

/////////////////////////CONSTANT///////////////////////////////////////////////////////////////
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ConstantStruct {
    pub k: f64,
}

impl ConstantStruct {
    pub fn new(k: f64) -> Self {
        Self { k }
    }
}

impl RateConstant for ConstantStruct {
    fn K_const(&self, _T: f64) -> Result<f64, DomainError> {
        if self.k < 0.0 {
            return Err(DomainError::NegativeRateCoefficient(self.k));
        }
        Ok(self.k)
    }
    fn K_expr(&self) -> Expr {
        Expr::Const(self.k)
    }
}

/////////////////////////ARRHENIUS///////////////////////////////////////////////////////////////
// k = A*exp(-E/(R*T))
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ArrheniusStruct {
    pub A: f64,
    pub E: f64,
    #[serde(default = "default_R")]
    pub R: f64,
}

impl ArrheniusStruct {
    pub fn new(A: f64, E: f64) -> Self {
        Self { A, E, R: R_DEFAULT }
    }
    pub fn with_R(A: f64, E: f64, R: f64) -> Self {
        Self { A, E, R }
    }
}

impl RateConstant for ArrheniusStruct {
    fn K_const(&self, T: f64) -> Result<f64, DomainError> {
        check_arrhenius(self.A, self.R, T)?;
        Ok(self.A * boltzmann_factor(self.E, self.R, T)?)
    }
    fn K_expr(&self) -> Expr {
        let T = Expr::Var("T".to_owned());
        let A = Expr::Const(self.A);
        let E = Expr::Const(-self.E);
        let R = Expr::Const(self.R);
        A * (E / (R * T)).exp()
    }
}

/////////////////////////MODIFIED ARRHENIUS///////////////////////////////////////////////////////
// k = A*T^b*exp(-E/(R*T))
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ModifiedArrheniusStruct {
    pub A: f64,
    pub b: f64,
    pub E: f64,
    #[serde(default = "default_R")]
    pub R: f64,
}

impl ModifiedArrheniusStruct {
    pub fn new(A: f64, b: f64, E: f64) -> Self {
        Self {
            A,
            b,
            E,
            R: R_DEFAULT,
        }
    }
    pub fn with_R(A: f64, b: f64, E: f64, R: f64) -> Self {
        Self { A, b, E, R }
    }
}

impl RateConstant for ModifiedArrheniusStruct {
    fn K_const(&self, T: f64) -> Result<f64, DomainError> {
        check_arrhenius(self.A, self.R, T)?;
        let factor = boltzmann_factor(self.E, self.R, T)?;
        if factor == 0.0 {
            // T^b may be infinite here
            return Ok(0.0);
        }
        Ok(self.A * T.powf(self.b) * factor)
    }
    fn K_expr(&self) -> Expr {
        let T = Expr::Var("T".to_owned());
        let A = Expr::Const(self.A);
        let b = Expr::Const(self.b);
        let E = Expr::Const(-self.E);
        let R = Expr::Const(self.R);
        A * T.clone().pow(b) * (E / (R * T)).exp()
    }
}

/// closed set of rate constant models, JSON form is externally tagged:
/// {"Arrhenius": {"A": 3.52e10, "E": 7.14e4}}
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[enum_dispatch(RateConstant)]
pub enum RateCoeffModel {
    #[serde(alias = "constant")]
    Constant(ConstantStruct),
    #[serde(alias = "arrhenius")]
    Arrhenius(ArrheniusStruct),
    #[serde(rename = "modifiedArrhenius", alias = "ModifiedArrhenius")]
    ModifiedArrhenius(ModifiedArrheniusStruct),
}

impl RateCoeffModel {
    /// rate constant for n temperatures between T0 and Tend (both included)
    pub fn K_const_for_T_range(
        &self,
        T0: f64,
        Tend: f64,
        n: usize,
    ) -> Result<Vec<f64>, DomainError> {
        linspace(T0, Tend, n)
            .into_iter()
            .map(|Ti| self.K_const(Ti))
            .collect()
    }
}

impl fmt::Display for RateCoeffModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RateCoeffModel::Constant(c) => write!(f, "k = {}", c.k),
            RateCoeffModel::Arrhenius(a) => write!(f, "A = {}, E = {}, R = {}", a.A, a.E, a.R),
            RateCoeffModel::ModifiedArrhenius(m) => {
                write!(f, "A = {}, b = {}, E = {}, R = {}", m.A, m.b, m.E, m.R)
            }
        }
    }
}

/// n evenly spaced points from start to end inclusive
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}
