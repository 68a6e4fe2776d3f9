/// handlers for thermodynamic data
/// # Examples
/// ```
/// use ChemKin::Thermodynamics::DBhandlers::NASAdata::{NASApiece, NASAstore, TempRange};
/// use ChemKin::Thermodynamics::DBhandlers::nasa_library::{NASAlibrary, ThermoEntry};
/// let mut lib = NASAlibrary::new();
/// let low = NASApiece::new(200.0, 1000.0, [2.5, 0.0, 0.0, 0.0, 0.0, 25473.6599, -0.446682853]);
/// let high = NASApiece::new(1000.0, 3500.0, [2.5, 0.0, 0.0, 0.0, 0.0, 25473.6599, -0.446683]);
/// lib.insert("H", ThermoEntry::new(low, high));
/// let piece = lib.get_coefficients("H", TempRange::Low).unwrap();
/// assert_eq!(piece.Cp_over_R(300.0), 2.5);
/// ```
#[allow(non_snake_case)]
pub mod DBhandlers;
/// equilibrium constants and backward rate coefficients from NASA-7 data
pub mod backward_rates;
