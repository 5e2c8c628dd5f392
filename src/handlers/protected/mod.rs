// handlers/protected/mod.rs - Handlers that need a resolved session
//
// Route Prefix: /api/auth/*
// Each handler checks the RequestContext itself and answers 401 when anonymous.

pub mod auth;
