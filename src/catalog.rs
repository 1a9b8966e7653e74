pub mod domain;
pub mod factory;
pub mod store;
