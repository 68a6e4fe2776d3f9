#![allow(non_snake_case)]
use crate::Thermodynamics::DBhandlers::NASAdata::{NASAstore, ThermoError, select_coefficients};
use log::debug;
use nalgebra::DVector;

/// standard pressure, Pa
pub const P0: f64 = 1.0e5;
/// gas constant of the equilibrium constant, J/(mol K)
pub const R_THERMO: f64 = 8.3144598;

/// H/RT and S/R of the mechanism species at one temperature.
/// Only species taking part in reversible reactions are evaluated, the rest stay zero
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoChem {
    pub T: f64,
    pub h_rt: DVector<f64>,
    pub s_r: DVector<f64>,
}

impl ThermoChem {
    pub fn new(
        store: &dyn NASAstore,
        species: &[String],
        needed: &[usize],
        T: f64,
    ) -> Result<Self, ThermoError> {
        let mut h_rt = DVector::zeros(species.len());
        let mut s_r = DVector::zeros(species.len());
        for &i in needed {
            let piece = select_coefficients(store, &species[i], T)?;
            h_rt[i] = piece.H_over_RT(T);
            s_r[i] = piece.S_over_R(T);
        }
        debug!("NASA data evaluated for {} species at T = {}", needed.len(), T);
        Ok(Self { T, h_rt, s_r })
    }

    /// ΔH/RT of a reaction with net stoichiometric column nu
    pub fn delta_H_over_RT(&self, nu: &DVector<f64>) -> f64 {
        nu.dot(&self.h_rt)
    }

    /// ΔS/R of a reaction with net stoichiometric column nu
    pub fn delta_S_over_R(&self, nu: &DVector<f64>) -> f64 {
        nu.dot(&self.s_r)
    }

    /// Ke = (p0/RT)^gamma * exp(ΔS/R - ΔH/RT), gamma = sum of nu
    pub fn equilibrium_constant(&self, nu: &DVector<f64>) -> f64 {
        let gamma = nu.sum();
        let minus_dG_over_RT = self.delta_S_over_R(nu) - self.delta_H_over_RT(nu);
        let fact = P0 / R_THERMO / self.T;
        fact.powf(gamma) * minus_dG_over_RT.exp()
    }

    /// kb = kf / Ke
    pub fn backward_coeff(&self, nu: &DVector<f64>, kf: f64) -> f64 {
        kf / self.equilibrium_constant(nu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Examples::demo_data::gri_nasa_library;
    use approx::assert_relative_eq;

    fn species() -> Vec<String> {
        ["H", "O", "OH", "H2", "H2O", "O2"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_equilibrium_constant_values() {
        let lib = gri_nasa_library();
        let sp = species();
        let all: Vec<usize> = (0..sp.len()).collect();
        // H + O2 <=> OH + O
        let nu1 = DVector::from_vec(vec![-1.0, 1.0, 1.0, 0.0, 0.0, -1.0]);
        // 2H2 + O2 <=> 2H2O
        let nu4 = DVector::from_vec(vec![0.0, 0.0, 0.0, -2.0, 2.0, -1.0]);

        let tc = ThermoChem::new(&lib, &sp, &all, 1000.0).unwrap();
        assert_relative_eq!(
            tc.equilibrium_constant(&nu1),
            0.003979362891604494,
            max_relative = 1e-9
        );
        let tc = ThermoChem::new(&lib, &sp, &all, 2500.0).unwrap();
        assert_relative_eq!(
            tc.equilibrium_constant(&nu4),
            5878.335410739593,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            tc.backward_coeff(&nu4, 5878.335410739593),
            1.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_reverse_reaction_reciprocal() {
        let lib = gri_nasa_library();
        let sp = species();
        let all: Vec<usize> = (0..sp.len()).collect();
        let nu = DVector::from_vec(vec![1.0, -1.0, 1.0, -1.0, 0.0, 0.0]);
        let tc = ThermoChem::new(&lib, &sp, &all, 1500.0).unwrap();
        let forward = tc.equilibrium_constant(&nu);
        let reverse = tc.equilibrium_constant(&(-nu));
        assert_relative_eq!(forward * reverse, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_only_needed_species_are_looked_up() {
        let lib = gri_nasa_library();
        let mut sp = species();
        sp.push("AR".to_string());
        // AR has no data, but is not needed
        let tc = ThermoChem::new(&lib, &sp, &[0, 5], 800.0).unwrap();
        assert_eq!(tc.h_rt[6], 0.0);
        assert_eq!(tc.h_rt[1], 0.0);
        assert!(tc.h_rt[0] > 0.0);
        assert_eq!(
            ThermoChem::new(&lib, &sp, &[6], 800.0),
            Err(ThermoError::UnknownSpecies("AR".to_string()))
        );
    }

    #[test]
    fn test_temperature_outside_data() {
        let lib = gri_nasa_library();
        let sp = species();
        let result = ThermoChem::new(&lib, &sp, &[0], 5000.0);
        assert_eq!(
            result,
            Err(ThermoError::OutOfRange {
                species: "H".to_string(),
                temperature: 5000.0
            })
        );
    }
}
