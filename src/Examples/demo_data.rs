use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::mechanism::Mechanism;
use crate::Kinetics::rate_coeff::{
    ArrheniusStruct, ConstantStruct, ModifiedArrheniusStruct, RateCoeffModel,
};
use crate::Kinetics::reaction::{Reaction, ReactionType};
use crate::Thermodynamics::DBhandlers::NASAdata::NASApiece;
use crate::Thermodynamics::DBhandlers::nasa_library::{NASAlibrary, ThermoEntry};

/// species order of the hydrogen-oxygen demo mechanisms
pub const H2_O2_SPECIES: [&str; 6] = ["H", "O", "OH", "H2", "H2O", "O2"];

fn h2_o2_reactions(reversible: bool) -> Vec<Reaction> {
    vec![
        Reaction::new(
            "reaction01",
            reversible,
            ReactionType::Elementary,
            &[("H", 1.0), ("O2", 1.0)],
            &[("OH", 1.0), ("O", 1.0)],
            RateCoeffModel::Arrhenius(ArrheniusStruct::new(3.52e10, 7.14e4)),
        )
        .with_equation("H + O2 [=] OH + O"),
        Reaction::new(
            "reaction02",
            reversible,
            ReactionType::Elementary,
            &[("H2", 1.0), ("O", 1.0)],
            &[("OH", 1.0), ("H", 1.0)],
            RateCoeffModel::ModifiedArrhenius(ModifiedArrheniusStruct::new(5.06e-2, 2.7, 2.63e4)),
        )
        .with_equation("H2 + O [=] OH + H"),
        Reaction::new(
            "reaction03",
            reversible,
            ReactionType::Elementary,
            &[("H2", 1.0), ("OH", 1.0)],
            &[("H2O", 1.0), ("H", 1.0)],
            RateCoeffModel::Constant(ConstantStruct::new(1.0e3)),
        )
        .with_equation("H2 + OH [=] H2O + H"),
    ]
}

fn species() -> Vec<String> {
    H2_O2_SPECIES.iter().map(|s| s.to_string()).collect()
}

/// three irreversible elementary reactions of hydrogen oxidation
pub fn h2_o2_irreversible() -> Result<Mechanism, KineticsError> {
    Mechanism::new("h2_o2_irreversible", species(), h2_o2_reactions(false))
}

/// the same three reactions, all reversible
pub fn h2_o2_reversible() -> Result<Mechanism, KineticsError> {
    Mechanism::new("h2_o2_reversible", species(), h2_o2_reactions(true))
}

/// GRI-Mech 3.0 NASA-7 data of H, O, OH, H2, H2O and O2
pub fn gri_nasa_library() -> NASAlibrary {
    #[rustfmt::skip]
    let data: [(&str, [f64; 7], [f64; 7]); 6] = [
        ("H",
         [2.5, 7.05332819e-13, -1.99591964e-15, 2.30081632e-18, -9.27732332e-22, 25473.6599, -0.446682853],
         [2.5, -2.308430e-11, 1.615619e-14, -4.735152e-18, 4.981974e-22, 25473.6599, -0.446683]),
        ("O",
         [3.16826710, -3.27931884e-03, 6.64306396e-06, -6.12806624e-09, 2.11265971e-12, 29122.2592, 2.05193346],
         [2.56942078, -8.59741137e-05, 4.19484589e-08, -1.00177799e-11, 1.22833691e-15, 29217.5791, 4.78433864]),
        ("OH",
         [3.99201543, -2.40131752e-03, 4.61793841e-06, -3.88113333e-09, 1.36411470e-12, 3615.08056, -0.103925458],
         [3.09288767, 5.48429716e-04, 1.26505228e-07, -8.79461556e-11, 1.17412376e-14, 3858.657, 4.4766961]),
        ("H2",
         [2.34433112, 7.98052075e-03, -1.94781510e-05, 2.01572094e-08, -7.37611761e-12, -917.935173, 0.683010238],
         [3.33727920, -4.94024731e-05, 4.99456778e-07, -1.79566394e-10, 2.00255376e-14, -950.158922, -3.20502331]),
        ("H2O",
         [4.19864056, -2.03643410e-03, 6.52040211e-06, -5.48797062e-09, 1.77197817e-12, -30293.7267, -0.849032208],
         [3.03399249, 2.17691804e-03, -1.64072518e-07, -9.70419870e-11, 1.68200992e-14, -30004.2971, 4.96677010]),
        ("O2",
         [3.78245636, -2.99673416e-03, 9.84730201e-06, -9.68129509e-09, 3.24372837e-12, -1063.94356, 3.65767573],
         [3.28253784, 1.48308754e-03, -7.57966669e-07, 2.09470555e-10, -2.16717794e-14, -1088.45772, 5.45323129]),
    ];
    let mut lib = NASAlibrary::new();
    for (name, low, high) in data {
        lib.insert(
            name,
            ThermoEntry::new(
                NASApiece::new(200.0, 1000.0, low),
                NASApiece::new(1000.0, 3500.0, high),
            ),
        );
    }
    lib
}
