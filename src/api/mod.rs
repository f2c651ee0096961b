pub mod client;
pub mod types;

pub use client::EmployeeClient;
pub use types::{Employee, EmployeeDraft};
