pub mod traits;
pub mod components;
pub mod eccentricity;
pub mod naive;

pub use traits::{CenterFinder, CenterResult, EccentricityMap};
pub use components::find_connected_component;
pub use eccentricity::{compute_eccentricity, Workspace};
