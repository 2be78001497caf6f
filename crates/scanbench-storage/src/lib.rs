//! # scanbench-storage
//!
//! Everything between an untrusted upload and a file on disk:
//! filename sanitization, the extension allow-list, and the flat local
//! upload directory.

pub mod policy;
pub mod providers;
pub mod sanitize;

pub use policy::AllowList;
pub use providers::local::UploadStore;
pub use sanitize::secure_filename;
