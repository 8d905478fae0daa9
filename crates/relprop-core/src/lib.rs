mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::EntityType;

pub mod stmt;

pub mod store;
pub use store::Store;

/// A Result type alias that uses relprop's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
