//! In-memory employee list and the controller that keeps it in step with
//! the API.

mod controller;
mod state;

pub use controller::{Controller, FormAction};
