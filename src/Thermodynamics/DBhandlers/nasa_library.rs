use crate::Thermodynamics::DBhandlers::NASAdata::{NASApiece, NASAstore, TempRange, ThermoError};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// NASA-7 data of one species: a low and a high temperature piece
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThermoEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<NASApiece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<NASApiece>,
}

impl ThermoEntry {
    pub fn new(low: NASApiece, high: NASApiece) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    /// flat layout [T_low, T_mid, T_high, a_low[7], a_high[7]]
    pub fn from_flat(species: &str, data: &[f64]) -> Result<Self, ThermoError> {
        if data.len() != 17 {
            return Err(ThermoError::InvalidCoefficients {
                species: species.to_string(),
                len: data.len(),
            });
        }
        let (t_low, t_mid, t_high) = (data[0], data[1], data[2]);
        let mut low = [0.0; 7];
        let mut high = [0.0; 7];
        low.copy_from_slice(&data[3..10]);
        high.copy_from_slice(&data[10..17]);
        Ok(Self::new(
            NASApiece::new(t_low, t_mid, low),
            NASApiece::new(t_mid, t_high, high),
        ))
    }

    pub fn get(&self, range: TempRange) -> Option<&NASApiece> {
        match range {
            TempRange::Low => self.low.as_ref(),
            TempRange::High => self.high.as_ref(),
        }
    }
}

/// on-disk form of a library entry: flat 17 numbers or explicit ranges
#[derive(Deserialize)]
#[serde(untagged)]
pub enum ThermoEntryRepr {
    Flat(Vec<f64>),
    Ranges(ThermoEntry),
}

/// in-memory NASA library: species name -> coefficients
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "HashMap<String, ThermoEntryRepr>")]
pub struct NASAlibrary {
    entries: HashMap<String, ThermoEntry>,
}

impl NASAlibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, species: &str, entry: ThermoEntry) -> Option<ThermoEntry> {
        self.entries.insert(species.to_string(), entry)
    }

    pub fn insert_flat(&mut self, species: &str, data: &[f64]) -> Result<(), ThermoError> {
        let entry = ThermoEntry::from_flat(species, data)?;
        self.insert(species, entry);
        Ok(())
    }

    pub fn get(&self, species: &str) -> Option<&ThermoEntry> {
        self.entries.get(species)
    }

    pub fn contains(&self, species: &str) -> bool {
        self.entries.contains_key(species)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// species names, sorted
    pub fn species(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl TryFrom<HashMap<String, ThermoEntryRepr>> for NASAlibrary {
    type Error = ThermoError;
    fn try_from(raw: HashMap<String, ThermoEntryRepr>) -> Result<Self, Self::Error> {
        let mut library = NASAlibrary::new();
        for (species, repr) in raw {
            let entry = match repr {
                ThermoEntryRepr::Flat(data) => ThermoEntry::from_flat(&species, &data)?,
                ThermoEntryRepr::Ranges(entry) if entry.low.is_none() && entry.high.is_none() => {
                    return Err(ThermoError::EmptyEntry(species));
                }
                ThermoEntryRepr::Ranges(entry) => entry,
            };
            library.insert(&species, entry);
        }
        Ok(library)
    }
}

impl Serialize for NASAlibrary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl NASAstore for NASAlibrary {
    fn get_coefficients(&self, species: &str, range: TempRange) -> Result<NASApiece, ThermoError> {
        let entry = self
            .entries
            .get(species)
            .ok_or_else(|| ThermoError::UnknownSpecies(species.to_string()))?;
        entry
            .get(range)
            .copied()
            .ok_or_else(|| ThermoError::RangeNotFound {
                species: species.to_string(),
                range,
            })
    }
}
