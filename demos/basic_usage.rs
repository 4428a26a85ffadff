//! Basic usage: build a console logger and log at each level.

use ctxlog::prelude::*;
use ctxlog::{debug, error, info, warn};

fn main() {
    let logger = Logger::builder()
        .min_level(LogLevel::Debug)
        .appender(ConsoleAppender::new())
        .build();

    debug!(logger, "starting up");
    info!(logger, "listening on port {}", 8080);
    warn!(logger, "disk usage at {}%", 91);
    error!(logger, "upstream refused connection");

    logger.info_with_fields(
        "user logged in",
        LogContext::new()
            .with_field("user_id", 1234)
            .with_field("method", "oauth"),
    );
}
