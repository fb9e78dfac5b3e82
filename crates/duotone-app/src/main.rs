mod controller;

use anyhow::Result;

use duotone_engine::device::GpuInit;
use duotone_engine::logging::{LoggingConfig, init_logging};
use duotone_engine::window::{Runtime, RuntimeConfig};

use crate::controller::Backdrop;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Duotone".to_string(),
        ..RuntimeConfig::default()
    };

    log::info!("starting duotone");
    Runtime::run(config, GpuInit::default(), Backdrop::new())
}
