// handlers/public/auth/mod.rs - Public authentication handlers
//
// Session acquisition and disposal. No identity required.

pub mod login; // POST /auth/login - verify credentials, set session cookies
pub mod logout; // POST /auth/logout - expire session cookies

pub use login::login_post;
pub use logout::logout_post;
