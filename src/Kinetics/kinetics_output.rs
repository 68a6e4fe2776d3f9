use crate::Kinetics::kinetics_engine::{KineticsEngine, SweepPoint};
use crate::Kinetics::kinetics_error::KineticsError;
use prettytable::{Cell, Row, Table, row};
use serde::{Deserialize, Serialize};

/// everything computed for one state (c, T), ready to be printed or sent as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesSummary {
    pub species: Vec<String>,
    pub reactions: Vec<String>,
    pub equations: Vec<String>,
    pub temperature: f64,
    pub ks: Vec<f64>,
    /// None for irreversible reactions; absent when the mechanism has none reversible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backward_ks: Option<Vec<Option<f64>>>,
    pub progress_rates: Vec<f64>,
    pub reaction_rates: Vec<f64>,
}

impl RatesSummary {
    #[allow(non_snake_case)]
    pub fn compute(
        engine: &KineticsEngine,
        concentrations: &[f64],
        T: f64,
    ) -> Result<Self, KineticsError> {
        let progress_rates = engine.progress_rate(concentrations, T)?;
        let reaction_rates = engine.reaction_rate(&progress_rates)?;
        let ks = engine.rate_coefficients(T)?;
        let backward_ks = if engine.mechanism().has_reversible() {
            Some(engine.backward_rate_coefficients(T)?)
        } else {
            None
        };
        Ok(Self {
            species: engine.species().to_vec(),
            reactions: engine.reactions().iter().map(|r| r.id.clone()).collect(),
            equations: engine
                .reactions()
                .iter()
                .map(|r| r.display_equation())
                .collect(),
            temperature: T,
            ks,
            backward_ks,
            progress_rates,
            reaction_rates,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// one row per reaction: id, equation, kf, kb, progress rate
    pub fn reactions_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["reaction", "equation", "kf", "kb", "progress rate"]);
        for (j, id) in self.reactions.iter().enumerate() {
            let kb = self
                .backward_ks
                .as_ref()
                .and_then(|kb| kb[j])
                .map(|kb| format!("{:.6e}", kb))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(Row::new(vec![
                Cell::new(id),
                Cell::new(&self.equations[j]),
                Cell::new(&format!("{:.6e}", self.ks[j])),
                Cell::new(&kb),
                Cell::new(&format!("{:.6e}", self.progress_rates[j])),
            ]));
        }
        table
    }

    /// one row per species with its production rate
    pub fn species_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["species", "reaction rate"]);
        for (name, rate) in self.species.iter().zip(self.reaction_rates.iter()) {
            table.add_row(row![name, format!("{:.6e}", rate)]);
        }
        table
    }

    pub fn print(&self) {
        println!("T = {} K", self.temperature);
        self.reactions_table().printstd();
        self.species_table().printstd();
    }
}

/// species production rates against temperature, one row per sweep point
pub fn sweep_table(species: &[String], sweep: &[SweepPoint]) -> Table {
    let mut table = Table::new();
    let mut header = vec![Cell::new("T")];
    header.extend(species.iter().map(|s| Cell::new(s)));
    table.add_row(Row::new(header));
    for point in sweep {
        let mut cells = vec![Cell::new(&format!("{:.2}", point.T))];
        cells.extend(
            point
                .reaction_rates
                .iter()
                .map(|r| Cell::new(&format!("{:.4e}", r))),
        );
        table.add_row(Row::new(cells));
    }
    table
}
