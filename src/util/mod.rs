//! Shared helpers: the unauthenticated-redirect guard and session
//! persistence.

pub mod auth;
pub mod storage;
