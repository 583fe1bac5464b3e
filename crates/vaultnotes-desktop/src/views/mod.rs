//! Routed views.

mod admin;
mod home;
mod landing;
mod login;
mod register;

pub use admin::Admin;
pub use home::Home;
pub use landing::Landing;
pub use login::Login;
pub use register::Register;
