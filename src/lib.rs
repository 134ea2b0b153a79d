pub mod fields;
pub mod model;
pub mod record;
pub mod session;
pub mod types;
