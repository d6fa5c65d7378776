//! Embedded seed data standing in for the external data-fetching layer.

use serde::Deserialize;

use crate::models::campsite::Campsite;
use crate::models::comment::Comment;

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Deserialize, Debug, Clone)]
pub struct Seed {
    pub campsites: Vec<Campsite>,
    pub comments: Vec<Comment>,
}

pub fn load_seed() -> Result<Seed, serde_json::Error> {
    serde_json::from_str(SEED_JSON)
}
