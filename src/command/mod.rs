mod build;
mod models;
mod validate;

pub use build::build;
pub use models::models;
pub use validate::validate;
