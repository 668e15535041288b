//! Routed pages. Each page owns its own fetch/validation logic; shared
//! domain state lives in `crate::state`.

pub mod home;
pub mod login;
pub mod settings;
pub mod signup;
pub mod stream;
