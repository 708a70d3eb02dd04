pub use crouton_core::schema::*;
