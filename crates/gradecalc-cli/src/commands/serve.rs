//! The `gradecalc serve` command.

use std::path::PathBuf;

use anyhow::Result;

use gradecalc_server::load_config_from;

pub async fn execute(bind: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(addr) = bind {
        config.bind_addr = addr;
    }

    gradecalc_server::serve(config).await
}
