pub mod request_id;
pub mod request_timing;

pub use request_id::{CORRELATION_ID_HEADER, CorrelationId, RequestId, RequestIdService};
pub use request_timing::{RequestTiming, RequestTimingService};
