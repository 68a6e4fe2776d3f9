#![allow(non_snake_case)]
use crate::Kinetics::kinetics_error::{DomainError, KineticsError};
use crate::Kinetics::mechanism::Mechanism;
use crate::Kinetics::rate_coeff::{RateConstant, linspace};
use crate::Kinetics::reaction::Reaction;
use crate::Kinetics::stoichiometry::StoichiometryMatrices;
use crate::Thermodynamics::DBhandlers::NASAdata::{NASAstore, ThermoError};
use crate::Thermodynamics::backward_rates::ThermoChem;
use log::{debug, info};
use nalgebra::{DMatrix, DVector};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// NASA store shared between the caller and any number of engines
pub type SharedNASAstore = Arc<dyn NASAstore + Send + Sync>;

/// rates of one point of a temperature sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub T: f64,
    pub progress_rates: Vec<f64>,
    pub reaction_rates: Vec<f64>,
}

#[derive(Clone)]
pub struct KineticsEngine {
    mechanism: Mechanism,
    stoich: StoichiometryMatrices,
    /// nu_prod - nu_react
    net: DMatrix<f64>,
    /// indices of species met in reversible reactions, sorted
    thermo_species: Vec<usize>,
    thermo: Option<SharedNASAstore>,
}

impl KineticsEngine {
    pub fn new(mechanism: Mechanism) -> Self {
        let stoich = StoichiometryMatrices::from_mechanism(&mechanism);
        let net = stoich.net();
        let thermo_species: BTreeSet<usize> = mechanism
            .reactions()
            .iter()
            .filter(|r| r.reversible)
            .flat_map(|r| r.species_names())
            .filter_map(|name| mechanism.species_index(name))
            .collect();
        info!(
            "kinetics engine for '{}': {} species, {} reactions, {} species need NASA data",
            mechanism.id(),
            mechanism.n_species(),
            mechanism.n_reactions(),
            thermo_species.len()
        );
        Self {
            mechanism,
            stoich,
            net,
            thermo_species: thermo_species.into_iter().collect(),
            thermo: None,
        }
    }

    /// validates the parts and builds the engine in one step
    pub fn from_parts(
        id: &str,
        species: Vec<String>,
        reactions: Vec<Reaction>,
    ) -> Result<Self, KineticsError> {
        Ok(Self::new(Mechanism::new(id, species, reactions)?))
    }

    /// attach the NASA coefficient store used for backward rates
    pub fn with_thermo(mut self, store: SharedNASAstore) -> Self {
        self.thermo = Some(store);
        self
    }

    pub fn mechanism(&self) -> &Mechanism {
        &self.mechanism
    }
    pub fn species(&self) -> &[String] {
        self.mechanism.species()
    }
    pub fn reactions(&self) -> &[Reaction] {
        self.mechanism.reactions()
    }
    pub fn stoichiometry(&self) -> &StoichiometryMatrices {
        &self.stoich
    }
    /// species whose NASA data is needed
    pub fn thermo_species(&self) -> Vec<&str> {
        self.thermo_species
            .iter()
            .map(|&i| self.mechanism.species()[i].as_str())
            .collect()
    }
    pub fn has_thermo(&self) -> bool {
        self.thermo.is_some()
    }

    /// forward rate constants of all reactions at T
    pub fn rate_coefficients(&self, T: f64) -> Result<Vec<f64>, KineticsError> {
        let ks = self
            .reactions()
            .iter()
            .map(|r| r.rate_coeff.K_const(T))
            .collect::<Result<Vec<f64>, DomainError>>()?;
        Ok(ks)
    }

    /// net rate of every reaction: kf*prod(c^nu_react) - kb*prod(c^nu_prod)
    pub fn progress_rate(&self, concentrations: &[f64], T: f64) -> Result<Vec<f64>, KineticsError> {
        let I = self.mechanism.n_species();
        if concentrations.len() != I {
            return Err(KineticsError::Dimension {
                what: "concentrations",
                expected: I,
                found: concentrations.len(),
            });
        }
        if let Some(r) = self.reactions().iter().find(|r| !r.is_elementary()) {
            return Err(KineticsError::UnsupportedReaction {
                reaction: r.id.clone(),
                kind: r.kind.to_string(),
            });
        }
        let kf = self.rate_coefficients(T)?;
        let thermo = self.thermo_at(T)?;
        let mut omega = Vec::with_capacity(kf.len());
        for (j, reaction) in self.reactions().iter().enumerate() {
            let forward = kf[j] * concentration_product(concentrations, &self.stoich.nu_react, j)?;
            let rate = if reaction.reversible {
                let tc = thermo.as_ref().ok_or(ThermoError::StoreNotAttached)?;
                let kb = tc.backward_coeff(&self.stoich.net_column(j), kf[j]);
                forward - kb * concentration_product(concentrations, &self.stoich.nu_prod, j)?
            } else {
                forward
            };
            omega.push(rate);
        }
        debug!("progress rates at T = {}: {:?}", T, omega);
        Ok(omega)
    }

    /// production rate of every species, (nu_prod - nu_react) * omega
    pub fn reaction_rate(&self, progress_rates: &[f64]) -> Result<Vec<f64>, KineticsError> {
        let J = self.mechanism.n_reactions();
        if progress_rates.len() != J {
            return Err(KineticsError::Dimension {
                what: "progress rates",
                expected: J,
                found: progress_rates.len(),
            });
        }
        let omega = DVector::from_column_slice(progress_rates);
        let rates = &self.net * &omega;
        Ok(rates.as_slice().to_vec())
    }

    /// equilibrium constants, None for irreversible reactions
    pub fn equilibrium_constants(&self, T: f64) -> Result<Vec<Option<f64>>, KineticsError> {
        let thermo = self.thermo_at(T)?;
        self.reactions()
            .iter()
            .enumerate()
            .map(|(j, r)| match (r.reversible, thermo.as_ref()) {
                (false, _) => Ok(None),
                (true, Some(tc)) => Ok(Some(tc.equilibrium_constant(&self.stoich.net_column(j)))),
                (true, None) => Err(ThermoError::StoreNotAttached.into()),
            })
            .collect()
    }

    /// backward rate constants kb = kf/Ke, None for irreversible reactions
    pub fn backward_rate_coefficients(&self, T: f64) -> Result<Vec<Option<f64>>, KineticsError> {
        let kf = self.rate_coefficients(T)?;
        let Ke = self.equilibrium_constants(T)?;
        Ok(kf
            .into_iter()
            .zip(Ke)
            .map(|(kf, Ke)| Ke.map(|Ke| kf / Ke))
            .collect())
    }

    /// progress and species rates at n temperatures from T0 to Tend, both included
    pub fn rates_for_T_range(
        &self,
        concentrations: &[f64],
        T0: f64,
        Tend: f64,
        n: usize,
    ) -> Result<Vec<SweepPoint>, KineticsError> {
        linspace(T0, Tend, n)
            .into_iter()
            .map(|T| {
                let progress_rates = self.progress_rate(concentrations, T)?;
                let reaction_rates = self.reaction_rate(&progress_rates)?;
                Ok(SweepPoint {
                    T,
                    progress_rates,
                    reaction_rates,
                })
            })
            .collect()
    }

    /// NASA data at T, None when the mechanism has no reversible reactions
    fn thermo_at(&self, T: f64) -> Result<Option<ThermoChem>, ThermoError> {
        if !self.mechanism.has_reversible() {
            return Ok(None);
        }
        let store = self.thermo.as_ref().ok_or(ThermoError::StoreNotAttached)?;
        let tc = ThermoChem::new(
            store.as_ref(),
            self.mechanism.species(),
            &self.thermo_species,
            T,
        )?;
        Ok(Some(tc))
    }
}

/// prod_i c_i^nu_ij over species with nonzero exponent
fn concentration_product(
    concentrations: &[f64],
    nu: &DMatrix<f64>,
    j: usize,
) -> Result<f64, DomainError> {
    let mut product = 1.0;
    for (i, &c) in concentrations.iter().enumerate() {
        let nu_ij = nu[(i, j)];
        if nu_ij < 0.0 {
            return Err(DomainError::NegativeStoichCoefficient {
                species: i,
                reaction: j,
                value: nu_ij,
            });
        }
        if nu_ij == 0.0 {
            continue;
        }
        if c < 0.0 {
            return Err(DomainError::NegativeConcentration { index: i, value: c });
        }
        product *= c.powf(nu_ij);
    }
    Ok(product)
}

impl fmt::Debug for KineticsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KineticsEngine")
            .field("mechanism", &self.mechanism)
            .field("stoich", &self.stoich)
            .field("thermo_species", &self.thermo_species)
            .field("thermo", &self.thermo.is_some())
            .finish_non_exhaustive()
    }
}
