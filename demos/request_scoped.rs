//! Request-scoped logging: inject a correlation ID at the boundary of a
//! unit of work and let every call in it resolve the same ID.

use ctxlog::info;
use ctxlog::prelude::*;

fn handle_request(logger: &Logger, request_id: &str) {
    let ctx = RequestContext::new().with_request_id(request_id);
    let logger = logger.with_context(ctx);

    info!(logger, "request accepted");
    authorize(&logger);
    info!(logger, "request completed");
}

fn authorize(logger: &Logger) {
    // Same bound context, no explicit threading of the ID
    info!(logger, "authorization ok");
}

fn main() {
    let logger = Logger::builder()
        .format(PatternLayout::new(
            "%timestamp% | %level% | %requestId% | %function% | %message%",
        ))
        .appender(ConsoleAppender::new())
        .build();

    handle_request(&logger, "req-1001");
    handle_request(&logger, "req-1002");

    // Calls outside any request resolve the sentinel
    info!(logger, "idle");
}
