use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("copy_requests_total", "Total number of generation requests").unwrap();
    pub static ref VALIDATION_ERRORS: Counter =
        register_counter!("copy_validation_errors_total", "Requests rejected before the provider call").unwrap();
    pub static ref PROVIDER_ERRORS: Counter =
        register_counter!("copy_provider_errors_total", "Failed completion provider calls").unwrap();
    pub static ref VARIATIONS_RETURNED: Counter =
        register_counter!("copy_variations_returned_total", "Variations returned to callers").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "copy_request_latency_seconds",
        "Completion provider round-trip latency in seconds"
    )
    .unwrap();
}
