use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

pub mod config;
pub mod error;

use error::AppError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// Request body for `POST /foods` and `PUT /foods/{id}`: a plate without its id.
#[derive(Debug, Deserialize)]
pub struct FoodPlateBody {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    #[serde(default)]
    pub available: bool,
}

impl FoodPlateBody {
    fn into_plate(self, id: u64) -> FoodPlate {
        FoodPlate {
            id,
            name: self.name,
            image: self.image,
            price: self.price,
            description: self.description,
            available: self.available,
        }
    }
}

/// Insertion-ordered plate storage. Ids are never reused within one store.
#[derive(Debug)]
pub struct Store {
    foods: Vec<FoodPlate>,
    next_id: u64,
}

impl Store {
    pub fn with_foods(foods: Vec<FoodPlate>) -> Self {
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self { foods, next_id }
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.foods.iter().position(|f| f.id == id)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Build the router over a store pre-populated with `foods`.
pub fn app_with(foods: Vec<FoodPlate>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::with_foods(foods)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/{id}", get(get_food).put(update_food).delete(delete_food))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Vec::new()).await
}

pub async fn run_with(listener: TcpListener, foods: Vec<FoodPlate>) -> Result<(), std::io::Error> {
    info!("Serving {} seeded plates", foods.len());
    axum::serve(listener, app_with(foods)).await
}

async fn list_foods(State(db): State<Db>) -> Json<Vec<FoodPlate>> {
    let store = db.read().await;
    Json(store.foods.clone())
}

async fn create_food(
    State(db): State<Db>,
    Json(input): Json<FoodPlateBody>,
) -> (StatusCode, Json<FoodPlate>) {
    let mut store = db.write().await;
    let food = input.into_plate(store.next_id);
    store.next_id += 1;
    store.foods.push(food.clone());
    debug!(id = food.id, "created plate");
    (StatusCode::CREATED, Json(food))
}

async fn get_food(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<FoodPlate>, AppError> {
    let store = db.read().await;
    let index = store.position(id).ok_or(AppError::NotFound(id))?;
    Ok(Json(store.foods[index].clone()))
}

async fn update_food(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<FoodPlateBody>,
) -> Result<Json<FoodPlate>, AppError> {
    let mut store = db.write().await;
    let index = store.position(id).ok_or(AppError::NotFound(id))?;
    let food = input.into_plate(id);
    store.foods[index] = food.clone();
    debug!(id, "replaced plate");
    Ok(Json(food))
}

async fn delete_food(State(db): State<Db>, Path(id): Path<u64>) -> Result<StatusCode, AppError> {
    let mut store = db.write().await;
    let index = store.position(id).ok_or(AppError::NotFound(id))?;
    store.foods.remove(index);
    debug!(id, "deleted plate");
    Ok(StatusCode::NO_CONTENT)
}
