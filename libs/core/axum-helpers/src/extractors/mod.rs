//! Custom Axum extractors

pub mod object_id_path;

pub use object_id_path::ObjectIdPath;
