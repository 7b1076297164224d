use std::future::{Ready, ready};
use std::rc::Rc;
use std::time::Instant;

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderName, HeaderValue},
};
use futures_util::future::LocalBoxFuture;

use crate::config::ExecutionTimingOptions;

/// Measures each request, adding the elapsed milliseconds as a response
/// header and/or a log line.
pub struct RequestTiming {
    options: Rc<TimingSettings>,
}

struct TimingSettings {
    enabled: bool,
    header: Option<HeaderName>,
    log_timings: bool,
}

impl RequestTiming {
    pub fn new(options: &ExecutionTimingOptions) -> Self {
        let header = if options.include_header {
            match HeaderName::from_bytes(options.header_name.as_bytes()) {
                Ok(name) => Some(name),
                Err(_) => {
                    log::warn!(
                        "Invalid execution timing header name {:?}, header disabled",
                        options.header_name
                    );
                    None
                }
            }
        } else {
            None
        };

        Self {
            options: Rc::new(TimingSettings {
                enabled: options.enabled,
                header,
                log_timings: options.log_timings,
            }),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTiming
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTimingService {
            service,
            options: Rc::clone(&self.options),
        }))
    }
}

pub struct RequestTimingService<S> {
    service: S,
    options: Rc<TimingSettings>,
}

impl<S, B> Service<ServiceRequest> for RequestTimingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.options.enabled {
            return Box::pin(self.service.call(req));
        }

        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();
        let options = Rc::clone(&self.options);
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let elapsed_ms = started.elapsed().as_millis();

            if let Some(name) = &options.header {
                if let Ok(value) = HeaderValue::from_str(&elapsed_ms.to_string()) {
                    res.headers_mut().insert(name.clone(), value);
                }
            }

            if options.log_timings {
                log::info!("Request {} {} executed in {} ms", method, path, elapsed_ms);
            }

            Ok(res)
        })
    }
}
