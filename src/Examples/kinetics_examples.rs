#![allow(non_snake_case)]
use crate::Examples::demo_data::{gri_nasa_library, h2_o2_irreversible, h2_o2_reversible};
use crate::Kinetics::kinetics_engine::KineticsEngine;
use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::kinetics_output::{RatesSummary, sweep_table};
use crate::Kinetics::rate_coeff::RateConstant;
use std::sync::Arc;

/// runs example task number `kintask`
pub fn kin_examples(kintask: usize) -> Result<(), KineticsError> {
    match kintask {
        0 => {
            // IRREVERSIBLE MECHANISM, rates at 100 K
            let engine = KineticsEngine::new(h2_o2_irreversible()?);
            let c = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
            let omega = engine.progress_rate(&c, 100.0)?;
            let rates = engine.reaction_rate(&omega)?;
            println!("progress rates: {:?}", omega);
            println!("reaction rates: {:?}", rates);
        }
        1 => {
            // REVERSIBLE MECHANISM with NASA data
            let engine =
                KineticsEngine::new(h2_o2_reversible()?).with_thermo(Arc::new(gri_nasa_library()));
            let c = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
            let summary = RatesSummary::compute(&engine, &c, 1500.0)?;
            summary.print();
        }
        2 => {
            // rate constants and their symbolic form
            let mech = h2_o2_irreversible()?;
            for reaction in mech.reactions() {
                let k = reaction.rate_coeff;
                println!("{}: {}", reaction.display_equation(), k);
                println!("k(T) = {}", k.K_expr().symplify());
                println!("k(300..3000) = {:?}", k.K_const_for_T_range(300.0, 3000.0, 4)?);
            }
        }
        3 => {
            // temperature sweep
            let engine =
                KineticsEngine::new(h2_o2_reversible()?).with_thermo(Arc::new(gri_nasa_library()));
            let c = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
            let sweep = engine.rates_for_T_range(&c, 500.0, 3000.0, 6)?;
            sweep_table(engine.species(), &sweep).printstd();
        }
        _ => {
            println!("no example with number {}", kintask);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_examples_run() {
        for task in 0..5 {
            assert!(kin_examples(task).is_ok());
        }
    }
}
