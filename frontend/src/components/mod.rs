pub mod navbar;
pub mod route_guard;
