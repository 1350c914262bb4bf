#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001" // Local backend during development
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // Same-origin in production
}
