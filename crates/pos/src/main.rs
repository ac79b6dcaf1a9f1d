use anyhow::Context;
use chrono::Local;

use pos::{PosConfig, PosState};

fn main() -> anyhow::Result<()> {
    let config = PosConfig::from_env().context("failed to read POS_* configuration")?;
    pos_observability::init(config.log_format);
    tracing::info!(?config, "pos starting");

    let mut state = PosState::sample().context("failed to load sample data")?;
    let mut ids = config.id_generator(state.orders.ids());
    let today = Local::now().date_naive();

    let summary = pos::run_checkout(&mut state, ids.as_mut(), today)?;
    let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
    println!("{json}");
    Ok(())
}
