use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::reaction::Reaction;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// raw form of a mechanism as it comes from a file, not yet validated
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MechanismInput {
    #[serde(default)]
    pub id: String,
    pub species: Vec<String>,
    pub reactions: Vec<Reaction>,
}

/// Validated mechanism: species order defines the row index of every matrix and of the
/// species rate vector, reaction order defines the column index.
/// Reaction ids are unique and every species used by a reaction is declared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mechanism {
    id: String,
    species: Vec<String>,
    reactions: Vec<Reaction>,
}

impl Mechanism {
    pub fn new(
        id: &str,
        species: Vec<String>,
        reactions: Vec<Reaction>,
    ) -> Result<Self, KineticsError> {
        let species_set: HashSet<&str> = species.iter().map(|s| s.as_str()).collect();
        let mut ids: HashSet<&str> = HashSet::new();
        for r in reactions.iter() {
            if !ids.insert(r.id.as_str()) {
                return Err(KineticsError::DuplicateReactionId(r.id.clone()));
            }
            if let Some(missing) = r.species_names().find(|s| !species_set.contains(s)) {
                return Err(KineticsError::UndeclaredSpecies {
                    reaction: r.id.clone(),
                    species: missing.to_string(),
                });
            }
        }
        info!(
            "mechanism '{}' validated: {} species, {} reactions",
            id,
            species.len(),
            reactions.len()
        );
        Ok(Self {
            id: id.to_string(),
            species,
            reactions,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn species(&self) -> &[String] {
        &self.species
    }
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }
    /// number of species, I
    pub fn n_species(&self) -> usize {
        self.species.len()
    }
    /// number of reactions, J
    pub fn n_reactions(&self) -> usize {
        self.reactions.len()
    }
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s == name)
    }
    pub fn has_reversible(&self) -> bool {
        self.reactions.iter().any(|r| r.reversible)
    }
}

impl TryFrom<MechanismInput> for Mechanism {
    type Error = KineticsError;
    fn try_from(input: MechanismInput) -> Result<Self, Self::Error> {
        Mechanism::new(&input.id, input.species, input.reactions)
    }
}
