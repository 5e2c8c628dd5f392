// handlers/mod.rs - Handler tiers
//
// Public (no session) → Protected (session required) → Admin (admin gate)

pub mod admin;
pub mod protected;
pub mod public;
pub mod utils;
