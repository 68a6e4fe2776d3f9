/// hydrogen-oxygen demo mechanisms and GRI-Mech 3.0 NASA data
pub mod demo_data;
/// example tasks of the Kinetics module
pub mod kinetics_examples;
