// handlers/admin/mod.rs - Admin-only handlers
//
// Route Prefix: /api/admin/*
// Middleware: require_admin on the whole group.

pub mod session;

pub use session::refresh_post as session_refresh;
