pub mod convert;
pub mod journal;
pub mod schema;

pub use sea_orm;
