use anyhow::Result;
use simplelog::*;

use crate::config::Config;

pub fn initialize_logger(config: &Config) -> Result<()> {
    let logger_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();

    TermLogger::init(
        config.get_log_level(),
        logger_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    Ok(())
}
