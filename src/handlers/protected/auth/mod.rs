pub mod verify;

pub use verify::verify_get;
