use crate::Kinetics::mechanism::Mechanism;
use log::warn;
use nalgebra::{DMatrix, DVector};
use std::collections::HashMap;

/// matrices of stoichiometric coefficients, I x J (species x reactions)
#[derive(Debug, Clone, PartialEq)]
pub struct StoichiometryMatrices {
    pub nu_react: DMatrix<f64>,
    pub nu_prod: DMatrix<f64>,
}

impl StoichiometryMatrices {
    /// zero-initialized I x J matrices, then every declared coefficient is written in its cell.
    /// If a species is listed twice on one side of a reaction the later coefficient overwrites the earlier
    pub fn from_mechanism(mechanism: &Mechanism) -> Self {
        let I = mechanism.n_species();
        let J = mechanism.n_reactions();
        let index: HashMap<&str, usize> = mechanism
            .species()
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();
        let mut nu_react = DMatrix::zeros(I, J);
        let mut nu_prod = DMatrix::zeros(I, J);
        for (j, reaction) in mechanism.reactions().iter().enumerate() {
            fill_column(&mut nu_react, &index, &reaction.reactants, j, &reaction.id);
            fill_column(&mut nu_prod, &index, &reaction.products, j, &reaction.id);
        }
        Self { nu_react, nu_prod }
    }

    /// nu_prod - nu_react
    pub fn net(&self) -> DMatrix<f64> {
        &self.nu_prod - &self.nu_react
    }

    /// net stoichiometric column of reaction j
    pub fn net_column(&self, j: usize) -> DVector<f64> {
        &self.nu_prod.column(j) - &self.nu_react.column(j)
    }

    pub fn n_species(&self) -> usize {
        self.nu_react.nrows()
    }

    pub fn n_reactions(&self) -> usize {
        self.nu_react.ncols()
    }
}

fn fill_column(
    matrix: &mut DMatrix<f64>,
    index: &HashMap<&str, usize>,
    stoich: &[(String, f64)],
    j: usize,
    reaction_id: &str,
) {
    let mut seen: Vec<&str> = Vec::with_capacity(stoich.len());
    for (name, nu) in stoich.iter() {
        // species existence is guaranteed by Mechanism::new
        if let Some(&i) = index.get(name.as_str()) {
            if seen.contains(&name.as_str()) {
                warn!(
                    "species {} listed twice in reaction {}, coefficient {} overwrites {}",
                    name,
                    reaction_id,
                    nu,
                    matrix[(i, j)]
                );
            }
            seen.push(name.as_str());
            matrix[(i, j)] = *nu;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::rate_coeff::{ConstantStruct, RateCoeffModel};
    use crate::Kinetics::reaction::{Reaction, ReactionType};

    fn mechanism(reactions: Vec<Reaction>) -> Mechanism {
        let species = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        Mechanism::new("stoich", species, reactions).unwrap()
    }

    fn reaction(id: &str, reactants: &[(&str, f64)], products: &[(&str, f64)]) -> Reaction {
        Reaction::new(
            id,
            false,
            ReactionType::Elementary,
            reactants,
            products,
            RateCoeffModel::Constant(ConstantStruct::new(1.0)),
        )
    }

    #[test]
    fn test_matrices() {
        // A => 2B ; B => A + 3C ; 2B + A => D
        let mech = mechanism(vec![
            reaction("r1", &[("A", 1.0)], &[("B", 2.0)]),
            reaction("r2", &[("B", 1.0)], &[("A", 1.0), ("C", 3.0)]),
            reaction("r3", &[("B", 2.0), ("A", 1.0)], &[("D", 1.0)]),
        ]);
        let s = StoichiometryMatrices::from_mechanism(&mech);
        assert_eq!((s.n_species(), s.n_reactions()), (4, 3));
        let nu_react = DMatrix::from_row_slice(
            4,
            3,
            &[
                1.0, 0.0, 1.0, //
                0.0, 1.0, 2.0, //
                0.0, 0.0, 0.0, //
                0.0, 0.0, 0.0,
            ],
        );
        let nu_prod = DMatrix::from_row_slice(
            4,
            3,
            &[
                0.0, 1.0, 0.0, //
                2.0, 0.0, 0.0, //
                0.0, 3.0, 0.0, //
                0.0, 0.0, 1.0,
            ],
        );
        assert_eq!(s.nu_react, nu_react);
        assert_eq!(s.nu_prod, nu_prod);
        let net = s.net();
        let col = |j: usize| net.column(j).iter().cloned().collect::<Vec<f64>>();
        assert_eq!(col(0), vec![-1.0, 2.0, 0.0, 0.0]);
        assert_eq!(col(1), vec![1.0, -1.0, 3.0, 0.0]);
        assert_eq!(col(2), vec![-1.0, -2.0, 0.0, 1.0]);
        assert_eq!(s.net_column(1).iter().cloned().collect::<Vec<f64>>(), col(1));
    }

    #[test]
    fn test_duplicate_species_last_write_wins() {
        let mech = mechanism(vec![reaction("r1", &[("A", 1.0), ("A", 2.0)], &[("B", 1.0)])]);
        let s = StoichiometryMatrices::from_mechanism(&mech);
        assert_eq!(s.nu_react[(0, 0)], 2.0);
    }

    #[test]
    fn test_repeated_map_key_last_write_wins() {
        let r: Reaction = serde_json::from_str(
            r#"{"id": "r1", "type": "Elementary", "reactants": {"B": 1, "A": 1, "A": 2},
                "products": {"D": 1}, "rate_coeff": {"Constant": {"k": 1.0}}}"#,
        )
        .unwrap();
        let s = StoichiometryMatrices::from_mechanism(&mechanism(vec![r]));
        assert_eq!(s.nu_react[(0, 0)], 2.0);
        assert_eq!(s.nu_react[(1, 0)], 1.0);
    }

    #[test]
    fn test_deterministic() {
        let mech = mechanism(vec![reaction("r1", &[("C", 0.5)], &[("D", 1.5)])]);
        assert_eq!(
            StoichiometryMatrices::from_mechanism(&mech),
            StoichiometryMatrices::from_mechanism(&mech)
        );
    }

    #[test]
    fn test_zero_progress_gives_zero_rates() {
        let mech = mechanism(vec![
            reaction("r1", &[("A", 1.0)], &[("B", 2.0)]),
            reaction("r2", &[("C", 1.0)], &[("D", 1.0)]),
        ]);
        let s = StoichiometryMatrices::from_mechanism(&mech);
        let rates = &s.net() * &DVector::<f64>::zeros(2);
        assert!(rates.iter().all(|&r| r == 0.0));
    }
}
