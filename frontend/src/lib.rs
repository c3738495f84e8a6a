#![deny(clippy::all)]
#![allow(non_snake_case)]

mod components;
mod history;
pub mod route;
mod state;

pub use components::App;
pub use state::Request;
