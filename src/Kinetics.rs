/// error taxonomy of the kinetics part of the crate: validation, dimension, domain,
/// unsupported reaction and thermodynamic lookup errors
pub mod kinetics_error;
/// eng
/// Rate constant models of elementary reactions: constant, Arrhenius and modified Arrhenius.
/// Every model is checked at evaluation time (negative prefactor, temperature, gas constant)
/// and can also produce a symbolic expression of k(T).
/// # Examples
/// ```
/// use ChemKin::Kinetics::rate_coeff::{ArrheniusStruct, RateCoeffModel, RateConstant};
/// let k = RateCoeffModel::Arrhenius(ArrheniusStruct::new(2.0, 3.0));
/// let value = k.K_const(100.0).unwrap();
/// assert!((value - 1.9927962618542914).abs() < 1e-12);
/// ```
pub mod rate_coeff;
/// Reaction record: id, reversibility, type of reaction, stoichiometry of reactants
/// and products and the rate constant model.
/// Stoichiometry may be written in compact form "H:1 O2:1"
/// # Examples
/// ```
/// use ChemKin::Kinetics::reaction::parse_stoich_string;
/// let stoich = parse_stoich_string("H2:1 OH:1").unwrap();
/// assert_eq!(stoich, vec![("H2".to_string(), 1.0), ("OH".to_string(), 1.0)]);
/// ```
pub mod reaction;
/// validated set of species and reactions. After construction the mechanism is read-only
pub mod mechanism;
/// eng
/// The module takes a mechanism and produces the matrices of stoichiometric coefficients
/// of reactants and products (rows - species in the order of the mechanism, columns - reactions)
pub mod stoichiometry;
/// eng
/// Main API of the Kinetics module. The engine owns the mechanism and computes
/// 1) rate constants of all reactions at given temperature
/// 2) progress rates (forward minus backward for reversible reactions)
/// 3) production rate of every species
/// Backward rate constants of reversible reactions are found from the equilibrium constant
/// built with NASA-7 polynomials; the NASA library is passed to the engine by the user.
/// # Examples
/// ```
/// use ChemKin::Examples::demo_data::h2_o2_irreversible;
/// use ChemKin::Kinetics::kinetics_engine::KineticsEngine;
/// let engine = KineticsEngine::new(h2_o2_irreversible().unwrap());
/// let omega = engine.progress_rate(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 100.0).unwrap();
/// let rates = engine.reaction_rate(&omega).unwrap();
/// assert_eq!(rates.len(), 6);
/// ```
pub mod kinetics_engine;
/// pretty tables and serializable summary of computed rates
pub mod kinetics_output;
