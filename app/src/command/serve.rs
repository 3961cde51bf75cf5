use sift_server::AppState;

use super::{GlobalOptions, build_interpreter, open_store};

#[derive(Debug, Clone)]
pub struct ServeInput {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub options: GlobalOptions,
}

/// Runs the HTTP API until interrupted.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = input.options.load_config()?;
        if let Some(host) = input.host {
            config.server.host = host;
        }
        if let Some(port) = input.port {
            config.server.port = port;
        }

        let state = AppState::new(open_store(&config)?, build_interpreter(&config)?);
        sift_server::serve(state, &config.server.addr()).await?;
        Ok(())
    }
}
