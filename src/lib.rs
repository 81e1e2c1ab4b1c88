//! Movie catalogue API.
//!
//! - **`store`**: the file-backed movie collection and its locking discipline.
//! - **`handlers`**: actix-web routes translating `/movies` requests into store calls.
//! - **`movie`** / **`error`**: the record type and the error taxonomy shared by both.
//! - **`config`**, **`cors`**, **`logger`**: process wiring used by the server binary.

pub mod config;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod movie;
pub mod store;

pub use error::StoreError;
pub use movie::Movie;
pub use store::MovieStore;
