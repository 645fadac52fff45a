pub mod profile;
pub mod viewer;
