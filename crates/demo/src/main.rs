use satchel_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;
    satchel_observability::init_with(config.log_format);

    tracing::info!(owner = %config.owner_name, strategy = ?config.strategy, "starting demo");

    let stdout = std::io::stdout();
    satchel_demo::run(&config, &mut stdout.lock())
}
