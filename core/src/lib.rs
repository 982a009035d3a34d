//! Headless controller and API client for the food plate dashboard.
//!
//! # Overview
//! `Dashboard` owns the list of food plates shown by the UI together with the
//! modal flags, and keeps that list consistent with the backend's `/foods`
//! resource. The renderer reads `Dashboard::state()` and calls the controller
//! operations; it never mutates state itself.
//!
//! # Design
//! - `FoodClient` is stateless: `build_*` produces plain-data requests,
//!   `parse_*` consumes plain-data responses.
//! - `Transport` runs one round trip; `ReqwestTransport` is the stock one.
//! - `DashboardState` holds pure transitions, applied only after the server
//!   confirms an operation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod state;
pub mod transport;
pub mod types;

pub use client::FoodClient;
pub use dashboard::Dashboard;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::DashboardState;
pub use transport::{ReqwestTransport, Transport};
pub use types::{FoodDraft, FoodPlate, FoodPlateBody};
