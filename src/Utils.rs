/// loaders of mechanisms and NASA libraries from JSON files
pub mod load_from_file;
