use anyhow::Context;
use cardio_nn::{EguiDisplay, RunConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    cardio_nn::run(&config, &mut out, &mut EguiDisplay)
        .with_context(|| format!("heart-disease run on {} failed", config.train_path))?;

    Ok(())
}
