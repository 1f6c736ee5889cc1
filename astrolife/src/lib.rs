pub mod domain;
pub mod keys;
pub mod persistence;
pub mod ports;
pub mod services;
