use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::mechanism::{Mechanism, MechanismInput};
use crate::Thermodynamics::DBhandlers::NASAdata::ThermoError;
use crate::Thermodynamics::DBhandlers::nasa_library::{NASAlibrary, ThermoEntryRepr};
use log::{error, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File '{0}' does not exist")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid mechanism: {0}")]
    Mechanism(#[from] KineticsError),
    #[error("invalid NASA data: {0}")]
    Thermo(#[from] ThermoError),
}

/// reads a JSON document, on a parse error the problematic line is logged with a pointer
/// to the column
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        error!(
            "Error parsing '{}' at line {}, column {}: {}",
            path.display(),
            e.line(),
            e.column(),
            e
        );
        if let Some(line) = content.lines().nth(e.line().saturating_sub(1)) {
            error!("Problematic line: {}", line);
            if e.column() >= 1 && e.column() <= line.len() {
                error!("{}^", " ".repeat(e.column() - 1));
            }
        }
        LoadError::Json(e)
    })
}

/// reads and validates a mechanism:
/// {"id": .., "species": [..], "reactions": [{"id": .., "reversible": .., "type": ..,
///  "reactants": "H:1 O2:1", "products": {"OH": 1, "O": 1}, "rate_coeff": {..}}]}
pub fn load_mechanism<P: AsRef<Path>>(path: P) -> Result<Mechanism, LoadError> {
    let path = path.as_ref();
    let input: MechanismInput = read_json(path)?;
    if input.reactions.is_empty() {
        warn!("mechanism file '{}' contains no reactions", path.display());
    }
    let mechanism = Mechanism::try_from(input)?;
    info!(
        "Loaded mechanism '{}' from file '{}'",
        mechanism.id(),
        path.display()
    );
    Ok(mechanism)
}

/// reads a NASA library, each species either as {"low": {..}, "high": {..}} or as
/// 17 numbers [T_low, T_mid, T_high, a_low[7], a_high[7]]
pub fn load_nasa_library<P: AsRef<Path>>(path: P) -> Result<NASAlibrary, LoadError> {
    let path = path.as_ref();
    let raw: HashMap<String, ThermoEntryRepr> = read_json(path)?;
    let library = NASAlibrary::try_from(raw)?;
    for name in library.species() {
        if let Some(entry) = library.get(name) {
            if entry.low.is_none() || entry.high.is_none() {
                warn!("species '{}' has only one NASA temperature range", name);
            }
        }
    }
    info!(
        "Loaded NASA data of {} species from file '{}'",
        library.len(),
        path.display()
    );
    Ok(library)
}

/// writes any serializable value as pretty JSON
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path.as_ref(), json)?;
    info!("Saved '{}'", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Examples::demo_data::{gri_nasa_library, h2_o2_reversible};
    use crate::Kinetics::rate_coeff::{ArrheniusStruct, RateCoeffModel};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MECHANISM: &str = r#"{"id": "h2_o2", "species": ["H", "O", "OH", "H2", "H2O", "O2"],
        "reactions": [{"id": "reaction01", "reversible": false, "type": "Elementary",
                       "equation": "H + O2 [=] OH + O",
                       "reactants": "H:1 O2:1", "products": {"OH": 1, "O": 1},
                       "rate_coeff": {"Arrhenius": {"A": 3.52e10, "E": 7.14e4}}},
                      {"id": "reaction02", "type": "Elementary",
                       "reactants": {"H2": 1, "O": 1}, "products": "OH:1 H:1",
                       "rate_coeff": {"modifiedArrhenius": {"A": 5.06e-2, "b": 2.7, "E": 2.63e4}}}]}"#;

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_load_mechanism() {
        let file = temp_file_with(MECHANISM);
        let mech = load_mechanism(file.path()).unwrap();
        assert_eq!(mech.id(), "h2_o2");
        assert_eq!(mech.n_species(), 6);
        assert_eq!(mech.n_reactions(), 2);
        assert_eq!(
            mech.reactions()[0].rate_coeff,
            RateCoeffModel::Arrhenius(ArrheniusStruct::new(3.52e10, 7.14e4))
        );
        assert!(!mech.reactions()[1].reversible);
    }

    #[test]
    fn test_load_mechanism_not_found() {
        let result = load_mechanism("definitely_not_here.json");
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_load_mechanism_invalid_json() {
        let file = temp_file_with("{\"id\": \"broken\",\n \"species\": [\"H\" \"O\"]}");
        assert!(matches!(load_mechanism(file.path()), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_mechanism_undeclared_species() {
        let content = MECHANISM.replace("\"H2O\", ", "").replace("H:1 O2:1", "H:1 N2:1");
        let file = temp_file_with(&content);
        match load_mechanism(file.path()) {
            Err(LoadError::Mechanism(e)) => assert!(e.is_validation()),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_load_nasa_library() {
        let file = temp_file_with(
            r#"{"AR": [300, 1000, 5000,
                       2.5, 0, 0, 0, 0, -745.375, 4.366,
                       2.5, 0, 0, 0, 0, -745.375, 4.366],
                "H": {"high": {"T_min": 1000, "T_max": 3500,
                               "coeffs": [2.5, 0, 0, 0, 0, 25473.6599, -0.446683]}}}"#,
        );
        let lib = load_nasa_library(file.path()).unwrap();
        assert_eq!(lib.species(), vec!["AR", "H"]);
        assert!(lib.get("H").unwrap().low.is_none());
    }

    #[test]
    fn test_load_nasa_library_wrong_length() {
        let file = temp_file_with(r#"{"AR": [300, 1000, 5000, 2.5]}"#);
        assert!(matches!(
            load_nasa_library(file.path()),
            Err(LoadError::Thermo(ThermoError::InvalidCoefficients { len: 4, .. }))
        ));
    }

    #[test]
    fn test_load_nasa_library_empty_entry() {
        let file = temp_file_with(r#"{"AR": {}}"#);
        assert!(matches!(
            load_nasa_library(file.path()),
            Err(LoadError::Thermo(ThermoError::EmptyEntry(_)))
        ));
        let file = temp_file_with(
            r#"{"AR": {"Low": {"T_min": 300, "T_max": 1000,
                               "coeffs": [2.5, 0, 0, 0, 0, -745.375, 4.366]}}}"#,
        );
        assert!(matches!(load_nasa_library(file.path()), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_demo_data_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mech_path = dir.path().join("mechanism.json");
        let thermo_path = dir.path().join("nasa.json");
        let mech = h2_o2_reversible().unwrap();
        save_json(&mech, &mech_path).unwrap();
        save_json(&gri_nasa_library(), &thermo_path).unwrap();

        let loaded = load_mechanism(&mech_path).unwrap();
        assert_eq!(loaded.species(), mech.species());
        assert_eq!(loaded.reactions().len(), 3);
        assert!(loaded.reactions().iter().all(|r| r.reversible));
        assert_eq!(loaded.reactions()[2].reactants, mech.reactions()[2].reactants);
        let lib = load_nasa_library(&thermo_path).unwrap();
        assert_eq!(lib.len(), 6);
    }
}
