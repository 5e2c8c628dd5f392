pub mod admin;

pub use admin::AdminRecord;
