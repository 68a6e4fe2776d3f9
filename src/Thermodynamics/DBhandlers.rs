/// NASA-7 polynomials, the coefficient store interface and thermo errors
pub mod NASAdata;
/// in-memory NASA library
pub mod nasa_library;
