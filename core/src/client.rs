//! Stateless HTTP request builder and response parser for the food plate API.
//!
//! # Design
//! `FoodClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method producing an `HttpRequest` and a `parse_*` method
//! consuming an `HttpResponse`; a `Transport` runs the round trip in between.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{FoodPlate, FoodPlateBody};

#[derive(Debug, Clone)]
pub struct FoodClient {
    base_url: String,
}

impl FoodClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_foods(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, self.collection())
    }

    pub fn build_get_food(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Get, self.item(id))
    }

    pub fn build_create_food(&self, body: &FoodPlateBody) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, self.collection(), body)
    }

    pub fn build_update_food(&self, id: u64, body: &FoodPlateBody) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, self.item(id), body)
    }

    pub fn build_delete_food(&self, id: u64) -> HttpRequest {
        self.bare(HttpMethod::Delete, self.item(id))
    }

    pub fn parse_list_foods(&self, response: HttpResponse) -> Result<Vec<FoodPlate>, ApiError> {
        check_status(&response, &[200])?;
        decode(&response.body)
    }

    pub fn parse_get_food(&self, response: HttpResponse) -> Result<FoodPlate, ApiError> {
        check_status(&response, &[200])?;
        decode(&response.body)
    }

    pub fn parse_create_food(&self, response: HttpResponse) -> Result<FoodPlate, ApiError> {
        check_status(&response, &[201])?;
        decode(&response.body)
    }

    pub fn parse_update_food(&self, response: HttpResponse) -> Result<FoodPlate, ApiError> {
        check_status(&response, &[200])?;
        decode(&response.body)
    }

    /// json-server answers a delete with `200 {}`, the bundled mock with 204.
    pub fn parse_delete_food(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])
    }

    fn collection(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    fn item(&self, id: u64) -> String {
        format!("{}/foods/{id}", self.base_url)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(&self, method: HttpMethod, path: String, body: &FoodPlateBody) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
