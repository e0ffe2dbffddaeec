pub mod camera;
pub mod constants;
pub mod error;
pub mod input;
pub mod lighting;
pub mod model;
pub mod motion;
pub mod orbit;
pub mod rig;
pub mod schedule;
pub mod storefront;
pub mod transform;

pub use camera::*;
pub use error::*;
pub use lighting::*;
pub use model::{acquire_phone, AcquiredPhone, PhoneModel, PhoneSource};
pub use motion::*;
pub use rig::*;
pub use schedule::*;
pub use transform::*;

// Shader bundled as a string constant
pub static PHONE_WGSL: &str = include_str!("../shaders/phone.wgsl");
