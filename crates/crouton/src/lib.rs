pub mod db;
pub use db::Db;

pub mod model;
pub use model::Model;

pub mod schema;

pub use crouton_core::{driver, Error, Result};
