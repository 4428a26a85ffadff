//! File logging via a resolved configuration value.

use ctxlog::prelude::*;

fn main() -> Result<()> {
    let config = LoggerConfig {
        minimum_level: "debug".to_string(),
        format: RenderMode::Json,
        destinations: vec![
            Destination::Console,
            Destination::File {
                path: "app.log".into(),
            },
        ],
        ..LoggerConfig::default()
    };

    let logger = Logger::from_config(&config)?;

    logger.debug("configured from a resolved value");
    logger.info("this line reaches both destinations");

    logger.flush()?;
    Ok(())
}
