use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, warn};

use mqtt_frame_check::{
    config::{exit_status, Args, Config, EXIT_ERROR},
    FixedHeader, Report,
};

fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());

    let mut logger = env_logger::Builder::from_default_env();
    if config.as_ref().is_ok_and(|config| config.verbose) {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    debug!(
        "Checking {} byte packet from {:?}",
        config.packet.len(),
        config.source
    );

    let result = config.check();
    match &result {
        Ok(check) => {
            let header = FixedHeader::from_bytes(&config.packet).ok();
            if let Some(header) = &header {
                debug!("Topic length {} ({})", check.topic_len, header);
            }

            println!("{}", Report::new(header.as_ref(), check));

            if !check.matches {
                warn!(
                    "Remaining length mismatch: declared {}, computed {} (off by {})",
                    check.declared_remaining_len,
                    check.computed_remaining_len,
                    check.discrepancy()
                );
            }
        }
        Err(err) => error!("{}", err),
    }

    ExitCode::from(exit_status(&result, config.strict))
}
