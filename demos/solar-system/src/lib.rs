use wasm_bindgen::prelude::*;

mod bodies;
mod focus;
mod game;
mod interaction;
mod orbit;
mod scene;
mod sim;
use game::Orrery;

orrery_web::export_game!(Orrery, "solar-system");
