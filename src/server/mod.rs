pub mod routes;

pub use routes::{app_router, AppState};
