//! Uploaded file value object.

pub mod model;

pub use model::StoredUpload;
