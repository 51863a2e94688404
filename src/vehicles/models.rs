//! Vehicle Models
//! Mission: Define the vehicle record and its request payloads

use serde::{Deserialize, Serialize};

/// A registered vehicle.
///
/// The identifier is server-assigned, immutable, and never reused even
/// after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Client-supplied vehicle fields for create and update.
///
/// Any `id` sent in the body is ignored; on update the path id wins.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
}
