// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Route Prefix: none (/auth/*, /health, /)
// Middleware: context resolution only; nothing here rejects anonymous callers.

pub mod auth;
pub mod system;

pub use system::{health, not_found, root};
