// Storage module for session state
pub mod city_store;

pub use city_store::*;
