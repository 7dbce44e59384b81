// Models module - City records and the static tables the views render

pub mod city;
pub mod prediction;
pub mod contact;
pub mod zone;
pub mod inventory;
pub mod volunteer;

// Re-export all models for easier imports
pub use city::*;
pub use prediction::*;
pub use contact::*;
pub use zone::*;
pub use inventory::*;
pub use volunteer::*;
