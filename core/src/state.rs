//! Dashboard state and its pure transitions.
//!
//! Every method here is synchronous and performs no I/O, so the whole
//! dashboard can be exercised without a server or a renderer. `Dashboard`
//! calls these only after the backend has confirmed an operation.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::{FoodDraft, FoodPlate, FoodPlateBody};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Plates in backend order. Ids are unique.
    pub foods: Vec<FoodPlate>,
    pub editing_food: Option<FoodPlate>,
    pub is_add_modal_open: bool,
    pub is_edit_modal_open: bool,
    /// Message of the most recent failed operation, cleared by the next success.
    pub last_error: Option<String>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a freshly loaded one.
    pub fn set_foods(&mut self, foods: Vec<FoodPlate>) {
        debug!(count = foods.len(), "foods loaded");
        self.foods = foods;
    }

    /// Append a created plate. A plate whose id is already listed replaces the
    /// existing entry instead, keeping ids unique.
    pub fn push_food(&mut self, food: FoodPlate) {
        match self.position(food.id) {
            Some(index) => {
                warn!(id = food.id, "created plate already listed, replacing");
                self.foods[index] = food;
            }
            None => {
                debug!(id = food.id, "food appended");
                self.foods.push(food);
            }
        }
    }

    /// Swap in the server's copy of an updated plate. Returns false when no
    /// plate with that id is listed.
    pub fn replace_food(&mut self, food: FoodPlate) -> bool {
        match self.position(food.id) {
            Some(index) => {
                debug!(id = food.id, "food replaced");
                self.foods[index] = food;
                true
            }
            None => false,
        }
    }

    /// Drop the plate with `id`. Returns false when it was not listed.
    pub fn remove_food(&mut self, id: u64) -> bool {
        let before = self.foods.len();
        self.foods.retain(|food| food.id != id);
        let removed = self.foods.len() != before;
        if removed {
            debug!(id, "food removed");
        }
        removed
    }

    pub fn begin_edit(&mut self, food: FoodPlate) {
        self.editing_food = Some(food);
        self.is_edit_modal_open = true;
    }

    pub fn toggle_add_modal(&mut self) {
        self.is_add_modal_open = !self.is_add_modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.is_edit_modal_open = !self.is_edit_modal_open;
    }

    /// Target id and request body for submitting `draft` against the plate
    /// being edited.
    pub fn update_request(&self, draft: FoodDraft) -> Result<(u64, FoodPlateBody), ApiError> {
        let base = self.editing_food.as_ref().ok_or(ApiError::NoEditTarget)?;
        Ok((base.id, draft.into_update_body(base)))
    }

    pub fn record_error(&mut self, err: &ApiError) {
        self.last_error = Some(err.to_string());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.foods.iter().position(|food| food.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(id: u64) -> FoodPlate {
        FoodPlate {
            id,
            name: format!("Plate {id}"),
            image: "img".to_string(),
            price: "9.90".to_string(),
            description: "desc".to_string(),
            available: id % 2 == 0,
        }
    }

    fn ids(state: &DashboardState) -> Vec<u64> {
        state.foods.iter().map(|f| f.id).collect()
    }

    fn draft() -> FoodDraft {
        FoodDraft {
            name: "Edited".to_string(),
            image: "new".to_string(),
            price: "1.00".to_string(),
            description: "new".to_string(),
            available: None,
        }
    }

    #[test]
    fn starts_empty_and_closed() {
        let state = DashboardState::new();
        assert!(state.foods.is_empty());
        assert!(state.editing_food.is_none());
        assert!(!state.is_add_modal_open);
        assert!(!state.is_edit_modal_open);
    }

    #[test]
    fn set_foods_replaces_wholesale() {
        let mut state = DashboardState::new();
        state.set_foods(vec![plate(1)]);
        state.set_foods(vec![plate(3), plate(2)]);
        assert_eq!(ids(&state), vec![3, 2]);
    }

    #[test]
    fn push_food_appends() {
        let mut state = DashboardState::new();
        state.set_foods(vec![plate(1), plate(2)]);
        state.push_food(plate(3));
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn push_food_with_listed_id_replaces() {
        let mut state = DashboardState::new();
        state.set_foods(vec![plate(1), plate(2)]);
        let mut dup = plate(1);
        dup.name = "Dup".to_string();
        state.push_food(dup);
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(state.foods[0].name, "Dup");
    }

    #[test]
    fn replace_food_keeps_position() {
        let mut state = DashboardState::new();
        state.set_foods(vec![plate(1), plate(2), plate(3)]);
        let mut changed = plate(2);
        changed.name = "Changed".to_string();
        assert!(state.replace_food(changed.clone()));
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.foods[1], changed);
        assert_eq!(state.foods[0], plate(1));
        assert_eq!(state.foods[2], plate(3));
    }

    #[test]
    fn replace_unknown_food_is_noop() {
        let mut state = DashboardState::new();
        state.set_foods(vec![plate(1)]);
        assert!(!state.replace_food(plate(5)));
        assert_eq!(state.foods, vec![plate(1)]);
    }

    #[test]
    fn remove_food_keeps_order_of_rest() {
        let mut state = DashboardState::new();
        state.set_foods(vec![plate(1), plate(2), plate(3)]);
        assert!(state.remove_food(2));
        assert_eq!(ids(&state), vec![1, 3]);
        assert!(!state.remove_food(2));
    }

    #[test]
    fn begin_edit_opens_modal_without_touching_foods() {
        let mut state = DashboardState::new();
        state.set_foods(vec![plate(1), plate(2)]);
        let before = state.foods.clone();
        state.begin_edit(plate(2));
        assert_eq!(state.editing_food, Some(plate(2)));
        assert!(state.is_edit_modal_open);
        assert_eq!(state.foods, before);
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = DashboardState::new();
        state.toggle_add_modal();
        assert!(state.is_add_modal_open);
        state.toggle_add_modal();
        assert!(!state.is_add_modal_open);
        state.toggle_edit_modal();
        assert!(state.is_edit_modal_open);
        assert!(!state.is_add_modal_open);
    }

    #[test]
    fn update_request_merges_onto_editing_food() {
        let mut state = DashboardState::new();
        state.begin_edit(plate(4));
        let (id, body) = state.update_request(draft()).unwrap();
        assert_eq!(id, 4);
        assert_eq!(body.name, "Edited");
        assert!(body.available);
    }

    #[test]
    fn update_request_without_target_fails() {
        let err = DashboardState::new().update_request(draft()).unwrap_err();
        assert!(matches!(err, ApiError::NoEditTarget));
    }

    #[test]
    fn errors_are_recorded_and_cleared() {
        let mut state = DashboardState::new();
        state.record_error(&ApiError::NotFound);
        assert_eq!(state.last_error.as_deref(), Some("resource not found"));
        state.clear_error();
        assert!(state.last_error.is_none());
    }
}
