pub mod beam;
pub mod config;
pub mod constants;
pub mod controller;
pub mod interp;
pub mod refraction;
pub mod scene;

pub use beam::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use interp::*;
pub use refraction::*;
pub use scene::*;
