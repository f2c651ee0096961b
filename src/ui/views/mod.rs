mod registry;

pub use registry::{RegistryView, ViewAction};
