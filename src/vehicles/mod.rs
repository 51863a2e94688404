//! Vehicle Registry Module
//! Mission: In-memory vehicle records with public reads and gated writes

pub mod api;
pub mod models;
pub mod store;

pub use models::{Vehicle, VehicleDraft};
pub use store::VehicleStore;
