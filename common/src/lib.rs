//! Shared wire types for the test case manager.
//!
//! Everything the frontend exchanges with the backend over JSON lives here:
//! domain models, request bodies, response bodies, plus the generation form
//! model and its validation. The backend speaks camelCase, so every
//! serializable type carries `rename_all = "camelCase"`.

pub mod form;
pub mod model;
pub mod requests;
pub mod responses;
