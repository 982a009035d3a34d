//! The dashboard controller: one owned `DashboardState` kept in step with the
//! backend through a `FoodClient` and a `Transport`.
//!
//! # Design
//! Each network operation issues exactly one request and touches local state
//! only after the server has answered successfully. Failures are handled the
//! same way for every operation: logged, recorded in `last_error` and returned
//! to the caller, with `foods` left as it was.

use tracing::{error, warn};

use crate::client::FoodClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::DashboardState;
use crate::transport::Transport;
use crate::types::{FoodDraft, FoodPlate};

#[derive(Debug)]
pub struct Dashboard<T> {
    client: FoodClient,
    transport: T,
    state: DashboardState,
}

impl<T: Transport> Dashboard<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::with_client(FoodClient::new(base_url), transport)
    }

    pub fn with_client(client: FoodClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: DashboardState::new(),
        }
    }

    /// Snapshot handed to the renderer.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn foods(&self) -> &[FoodPlate] {
        &self.state.foods
    }

    pub fn into_state(self) -> DashboardState {
        self.state
    }

    /// Fetch the full list, replacing whatever is held locally.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let result = self.fetch_foods().await;
        let foods = self.settle("load", result)?;
        self.state.set_foods(foods);
        Ok(())
    }

    /// Create a plate from `draft`; new plates are always available.
    pub async fn create(&mut self, draft: FoodDraft) -> Result<FoodPlate, ApiError> {
        let result = self.post_food(draft).await;
        let food = self.settle("create", result)?;
        self.state.push_food(food.clone());
        Ok(food)
    }

    /// Submit `draft` against the plate selected by `begin_edit`.
    pub async fn update(&mut self, draft: FoodDraft) -> Result<FoodPlate, ApiError> {
        let result = self.put_food(draft).await;
        let food = self.settle("update", result)?;
        if !self.state.replace_food(food.clone()) {
            warn!(id = food.id, "updated plate is not listed locally");
        }
        Ok(food)
    }

    pub async fn delete(&mut self, id: u64) -> Result<(), ApiError> {
        let request = self.client.build_delete_food(id);
        let result = self.round_trip(request, FoodClient::parse_delete_food).await;
        self.settle("delete", result)?;
        self.state.remove_food(id);
        Ok(())
    }

    pub fn begin_edit(&mut self, food: FoodPlate) {
        self.state.begin_edit(food);
    }

    pub fn toggle_add_modal(&mut self) {
        self.state.toggle_add_modal();
    }

    pub fn toggle_edit_modal(&mut self) {
        self.state.toggle_edit_modal();
    }

    pub fn dismiss_error(&mut self) {
        self.state.clear_error();
    }

    async fn fetch_foods(&self) -> Result<Vec<FoodPlate>, ApiError> {
        let request = self.client.build_list_foods();
        self.round_trip(request, FoodClient::parse_list_foods).await
    }

    async fn post_food(&self, draft: FoodDraft) -> Result<FoodPlate, ApiError> {
        let request = self.client.build_create_food(&draft.into_create_body())?;
        self.round_trip(request, FoodClient::parse_create_food).await
    }

    async fn put_food(&self, draft: FoodDraft) -> Result<FoodPlate, ApiError> {
        let (id, body) = self.state.update_request(draft)?;
        let request = self.client.build_update_food(id, &body)?;
        self.round_trip(request, FoodClient::parse_update_food).await
    }

    async fn round_trip<R>(
        &self,
        request: HttpRequest,
        parse: fn(&FoodClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let response = self.transport.execute(request).await?;
        parse(&self.client, response)
    }

    fn settle<R>(&mut self, operation: &str, result: Result<R, ApiError>) -> Result<R, ApiError> {
        match result {
            Ok(value) => {
                self.state.clear_error();
                Ok(value)
            }
            Err(e) => {
                error!("{operation} failed: {e}");
                self.state.record_error(&e);
                Err(e)
            }
        }
    }
}
