mod health;
mod metrics;
mod generate;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use generate::generate_copy_handler;
