//! HTTP API handlers for wordmix-server

pub mod health;
pub mod ui;
pub mod words;

pub use health::health_routes;
pub use ui::redirect_to_index;
pub use words::new_word;
