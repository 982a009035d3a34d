//! Domain DTOs for the food plate API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single menu item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodPlate {
    pub id: u64,
    pub name: String,
    pub image: String,
    /// Decimal price carried as text, e.g. `"19.90"`.
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// Form payload submitted by the add and edit modals.
///
/// Forms never carry an id. `available` is normally absent; when present it
/// overrides the edited plate's availability on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// Request payload for `POST /foods` and `PUT /foods/{id}`: a plate minus its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodPlateBody {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl FoodDraft {
    /// Body for a new plate. New plates are always listed as available.
    pub fn into_create_body(self) -> FoodPlateBody {
        FoodPlateBody {
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: true,
        }
    }

    /// Body for replacing `base`: draft fields win, availability falls back to
    /// the base plate.
    pub fn into_update_body(self, base: &FoodPlate) -> FoodPlateBody {
        FoodPlateBody {
            available: self.available.unwrap_or(base.available),
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> FoodDraft {
        FoodDraft {
            name: "Ramen".to_string(),
            image: "x".to_string(),
            price: "10.00".to_string(),
            description: "y".to_string(),
            available: None,
        }
    }

    fn unavailable_plate() -> FoodPlate {
        FoodPlate {
            id: 4,
            name: "Old".to_string(),
            image: "old".to_string(),
            price: "1.00".to_string(),
            description: "old".to_string(),
            available: false,
        }
    }

    #[test]
    fn create_body_forces_available() {
        let mut d = draft();
        d.available = Some(false);
        assert!(d.into_create_body().available);
    }

    #[test]
    fn update_body_keeps_base_availability() {
        let body = draft().into_update_body(&unavailable_plate());
        assert!(!body.available);
        assert_eq!(body.name, "Ramen");
        assert_eq!(body.price, "10.00");
    }

    #[test]
    fn update_body_prefers_draft_availability() {
        let mut d = draft();
        d.available = Some(true);
        assert!(d.into_update_body(&unavailable_plate()).available);
    }

    #[test]
    fn draft_without_available_deserializes() {
        let d: FoodDraft =
            serde_json::from_str(r#"{"name":"Ramen","image":"x","price":"10.00","description":"y"}"#).unwrap();
        assert_eq!(d, draft());
    }

    #[test]
    fn body_has_no_id_field() {
        let json = serde_json::to_value(draft().into_create_body()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["available"], true);
    }
}
