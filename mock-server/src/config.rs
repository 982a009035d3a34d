use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use serde::Deserialize;
use tracing::{info, warn};

use crate::FoodPlate;

pub struct Config {
    pub port: u16,
    pub seed: Vec<FoodPlate>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3333"),
            seed: env::var("FOODS_SEED").map(|path| load_seed(&path)).unwrap_or_default(),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let fallback = || {
        default
            .parse::<T>()
            .unwrap_or_else(|_| panic!("default for {key} must parse"))
    };

    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            fallback()
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            fallback()
        }
    }
}

/// Either a json-server database (`{"foods": [...]}`) or a bare plate array.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedFile {
    Database { foods: Vec<FoodPlate> },
    Plates(Vec<FoodPlate>),
}

pub fn parse_seed(raw: &str) -> Result<Vec<FoodPlate>, serde_json::Error> {
    serde_json::from_str(raw).map(|seed| match seed {
        SeedFile::Database { foods } => foods,
        SeedFile::Plates(foods) => foods,
    })
}

fn load_seed(path: &str) -> Vec<FoodPlate> {
    let parsed = read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| parse_seed(&raw).map_err(|e| e.to_string()));

    match parsed {
        Ok(foods) => {
            info!("Loaded {} plates from {path}", foods.len());
            foods
        }
        Err(e) => {
            warn!("Failed to load seed from {path}: {e}, starting empty");
            Vec::new()
        }
    }
}
