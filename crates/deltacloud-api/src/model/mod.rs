// Deltacloud resource models
//
// Typed views of the XML resources a Deltacloud server exposes. Scalar
// fields are optional because servers omit elements depending on backend
// driver and resource state; unmarshalling never invents defaults.

mod action;
mod api;
mod image;
mod instance;
mod key;
mod profile;
mod realm;

pub use action::Action;
pub use api::{Api, Driver};
pub use image::Image;
pub use instance::Instance;
pub use key::Key;
pub use profile::{HardwareProfile, Property, PropertyRange};
pub use realm::Realm;
