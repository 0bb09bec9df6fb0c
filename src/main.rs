use std::io::{self, IsTerminal};

use log::info;
use phonextract::{render::Renderer, shell::Shell, AppError, Config, PhoneNumberEngine};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let engine = PhoneNumberEngine::new();
    let config = Config::from_env()?.validate(&engine)?;
    info!("Starting with {:?}", config);

    let stdout = io::stdout();
    let renderer = Renderer::new(stdout.is_terminal());
    let shell = Shell::new(&engine, &config, renderer);
    shell.run(&mut io::stdin().lock(), &mut stdout.lock())?;
    Ok(())
}
