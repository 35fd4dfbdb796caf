pub mod error;
pub mod persons;

pub use error::AppError;
