use crate::Kinetics::rate_coeff::RateCoeffModel;
use regex::Regex;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// enum for types of reactions. Only elementary reactions have a computable rate law here,
/// the other kinds are kept so that they can be rejected with a clear message
#[derive(Debug, PartialEq, Clone)]
pub enum ReactionType {
    Elementary,
    ThreeBody,
    Falloff,
    Other(String),
}

impl ReactionType {
    pub fn as_str(&self) -> &str {
        match self {
            ReactionType::Elementary => "Elementary",
            ReactionType::ThreeBody => "ThreeBody",
            ReactionType::Falloff => "Falloff",
            ReactionType::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for ReactionType {
    fn from(s: &str) -> Self {
        match s {
            "Elementary" | "elementary" | "elem" => ReactionType::Elementary,
            "ThreeBody" | "three-body" | "threebody" => ReactionType::ThreeBody,
            "Falloff" | "falloff" => ReactionType::Falloff,
            other => ReactionType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReactionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ReactionType::from(s.as_str()))
    }
}

impl Serialize for ReactionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

fn stoich_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([^\s:]+):([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)$")
            .expect("stoichiometry token pattern is valid")
    })
}

/// parses compact stoichiometry "H2:1 O:1" into pairs (species, coefficient)
/// in the order they are written
pub fn parse_stoich_string(s: &str) -> Result<Vec<(String, f64)>, String> {
    let re = stoich_token_regex();
    let mut result = Vec::new();
    for token in s.split_whitespace() {
        let caps = re
            .captures(token)
            .ok_or_else(|| format!("invalid stoichiometry token '{}'", token))?;
        let coeff = caps[2]
            .parse::<f64>()
            .map_err(|e| format!("invalid coefficient in '{}': {}", token, e))?;
        result.push((caps[1].to_string(), coeff));
    }
    Ok(result)
}

/// inverse of parse_stoich_string
pub fn stoich_to_string(stoich: &[(String, f64)]) -> String {
    stoich
        .iter()
        .map(|(name, nu)| format!("{}:{}", name, nu))
        .collect::<Vec<_>>()
        .join(" ")
}

/// accepts "H2:1 O:1" or {"H2": 1, "O": 1}; map entries keep their written order and
/// repeated keys are passed through
struct StoichVisitor;

impl<'de> Visitor<'de> for StoichVisitor {
    type Value = Vec<(String, f64)>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a string like \"H2:1 O:1\" or a map of species to coefficients")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
        parse_stoich_string(s).map_err(E::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut stoich = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, nu)) = map.next_entry::<String, f64>()? {
            stoich.push((name, nu));
        }
        Ok(stoich)
    }
}

fn deserialize_stoich<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StoichVisitor)
}

fn serialize_stoich<S>(stoich: &[(String, f64)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&stoich_to_string(stoich))
}

/// one reaction of a mechanism
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Reaction {
    pub id: String,
    #[serde(default)]
    pub reversible: bool,
    #[serde(rename = "type")]
    pub kind: ReactionType,
    /// human readable equation, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    #[serde(
        deserialize_with = "deserialize_stoich",
        serialize_with = "serialize_stoich"
    )]
    pub reactants: Vec<(String, f64)>,
    #[serde(
        deserialize_with = "deserialize_stoich",
        serialize_with = "serialize_stoich"
    )]
    pub products: Vec<(String, f64)>,
    pub rate_coeff: RateCoeffModel,
}

impl Reaction {
    pub fn new(
        id: &str,
        reversible: bool,
        kind: ReactionType,
        reactants: &[(&str, f64)],
        products: &[(&str, f64)],
        rate_coeff: RateCoeffModel,
    ) -> Self {
        let to_owned = |v: &[(&str, f64)]| {
            v.iter()
                .map(|(name, nu)| (name.to_string(), *nu))
                .collect::<Vec<_>>()
        };
        Self {
            id: id.to_string(),
            reversible,
            kind,
            equation: None,
            reactants: to_owned(reactants),
            products: to_owned(products),
            rate_coeff,
        }
    }

    pub fn with_equation(mut self, equation: &str) -> Self {
        self.equation = Some(equation.to_string());
        self
    }

    pub fn is_elementary(&self) -> bool {
        self.kind == ReactionType::Elementary
    }

    /// all species names mentioned in reactants and products
    pub fn species_names(&self) -> impl Iterator<Item = &str> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .map(|(name, _)| name.as_str())
    }

    /// equation if given, otherwise built from the stoichiometry
    pub fn display_equation(&self) -> String {
        if let Some(eq) = &self.equation {
            return eq.clone();
        }
        let side = |v: &[(String, f64)]| {
            v.iter()
                .map(|(name, nu)| {
                    if *nu == 1.0 {
                        name.clone()
                    } else {
                        format!("{}{}", nu, name)
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ")
        };
        let arrow = if self.reversible { "<=>" } else { "=>" };
        format!("{} {} {}", side(&self.reactants), arrow, side(&self.products))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::rate_coeff::{ArrheniusStruct, ConstantStruct};

    #[test]
    fn test_parse_stoich_string() {
        let stoich = parse_stoich_string("  H:1 O2:2.5\tOH:1e0 ").unwrap();
        assert_eq!(
            stoich,
            vec![
                ("H".to_string(), 1.0),
                ("O2".to_string(), 2.5),
                ("OH".to_string(), 1.0)
            ]
        );
        assert!(parse_stoich_string("").unwrap().is_empty());
        assert!(parse_stoich_string("H:").is_err());
        assert!(parse_stoich_string("H:one").is_err());
        assert!(parse_stoich_string("H2O").is_err());
    }

    #[test]
    fn test_negative_coefficient_is_parsed() {
        // negative values are rejected later by the engine, with reaction and species indices
        let stoich = parse_stoich_string("H:-1").unwrap();
        assert_eq!(stoich, vec![("H".to_string(), -1.0)]);
    }

    #[test]
    fn test_reaction_type_from_str() {
        assert_eq!(ReactionType::from("Elementary"), ReactionType::Elementary);
        assert_eq!(ReactionType::from("elem"), ReactionType::Elementary);
        assert_eq!(ReactionType::from("three-body"), ReactionType::ThreeBody);
        assert_eq!(
            ReactionType::from("Duplicate"),
            ReactionType::Other("Duplicate".to_string())
        );
    }

    #[test]
    fn test_reaction_deserialize() {
        let json = r#"{"id": "reaction01", "reversible": false, "type": "Elementary",
            "equation": "H + O2 [=] OH + O",
            "reactants": "H:1 O2:1", "products": {"OH": 1, "O": 1},
            "rate_coeff": {"Arrhenius": {"A": 3.52e10, "E": 7.14e4}}}"#;
        let r: Reaction = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, "reaction01");
        assert!(!r.reversible);
        assert!(r.is_elementary());
        assert_eq!(
            r.reactants,
            vec![("H".to_string(), 1.0), ("O2".to_string(), 1.0)]
        );
        // map form keeps the written order
        assert_eq!(
            r.products,
            vec![("OH".to_string(), 1.0), ("O".to_string(), 1.0)]
        );
        assert_eq!(
            r.rate_coeff,
            RateCoeffModel::Arrhenius(ArrheniusStruct::new(3.52e10, 7.14e4))
        );
        let back = serde_json::to_value(&r).unwrap();
        assert_eq!(back["reactants"], "H:1 O2:1");
        assert_eq!(back["type"], "Elementary");
    }

    #[test]
    fn test_map_form_keeps_order_and_repeats() {
        let json = r#"{"id": "r", "type": "Elementary",
            "reactants": {"O2": 1, "H": 1, "H": 2}, "products": "OH:1 O:1",
            "rate_coeff": {"Constant": {"k": 1.0}}}"#;
        let r: Reaction = serde_json::from_str(json).unwrap();
        assert_eq!(
            r.reactants,
            vec![
                ("O2".to_string(), 1.0),
                ("H".to_string(), 1.0),
                ("H".to_string(), 2.0)
            ]
        );
    }

    #[test]
    fn test_stoich_wrong_type() {
        let json = r#"{"id": "r", "type": "Elementary", "reactants": 5, "products": "OH:1",
            "rate_coeff": {"Constant": {"k": 1.0}}}"#;
        assert!(serde_json::from_str::<Reaction>(json).is_err());
    }

    #[test]
    fn test_display_equation() {
        let r = Reaction::new(
            "r1",
            true,
            ReactionType::Elementary,
            &[("H2", 2.0), ("O2", 1.0)],
            &[("H2O", 2.0)],
            RateCoeffModel::Constant(ConstantStruct::new(1.0)),
        );
        assert_eq!(r.display_equation(), "2H2 + O2 <=> 2H2O");
        let r = r.with_equation("2 H2 + O2 [=] 2 H2O");
        assert_eq!(r.display_equation(), "2 H2 + O2 [=] 2 H2O");
        let names: Vec<&str> = r.species_names().collect();
        assert_eq!(names, vec!["H2", "O2", "H2O"]);
    }
}
