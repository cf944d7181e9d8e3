use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server;

/// Handle the `serve` command: blocks until the server is stopped.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { listen } = cmd {
        let mut cfg = cfg.clone();
        if let Some(addr) = listen {
            cfg.listen = addr.clone();
        }
        actix_web::rt::System::new().block_on(server::run(cfg))?;
    }
    Ok(())
}
