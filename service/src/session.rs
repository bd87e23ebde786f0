//! The line loop: read a command, answer it, repeat

use anyhow::{Context, Result};
use champ_engine::DecisionProvider;
use champ_protocol::{Command, RequestKind, Response};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::config::ServiceConfig;
use crate::init::{BackendConfig, EnvLookup, ProcessEnv};

/// How a session stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The host sent `quit`
    Quit,
    /// The input stream closed
    EndOfInput,
    /// An I/O fault stopped the loop; a final error line was attempted
    Fault(String),
}

/// What to do after answering a line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Continue(Response),
    Shutdown(Response),
}

impl Reply {
    pub fn response(&self) -> &Response {
        match self {
            Reply::Continue(response) | Reply::Shutdown(response) => response,
        }
    }
}

/// One request/response session over a pair of byte streams.
///
/// Every non-blank input line gets exactly one response line, written and
/// flushed before the next line is read.
pub struct Session<P, E = ProcessEnv> {
    config: ServiceConfig,
    provider: P,
    env: E,
    backend: Option<BackendConfig>,
}

impl<P: DecisionProvider> Session<P> {
    pub fn new(config: ServiceConfig, provider: P) -> Self {
        Self::with_env(config, provider, ProcessEnv)
    }
}

impl<P: DecisionProvider, E: EnvLookup> Session<P, E> {
    /// Create a session that reads credentials from `env`
    pub fn with_env(config: ServiceConfig, provider: P, env: E) -> Self {
        Self {
            config,
            provider,
            env,
            backend: None,
        }
    }

    /// The backend named by the most recent `init`, if any
    pub fn backend(&self) -> Option<&BackendConfig> {
        self.backend.as_ref()
    }

    /// Serve until `quit`, end of input, or an I/O fault.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> SessionEnd
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(provider = self.provider.name(), "session started");

        match self.serve(reader, &mut writer).await {
            Ok(end) => {
                info!(?end, "session finished");
                end
            }
            Err(e) => {
                let detail = format!("{:#}", e);
                error!(error = %detail, "session aborted");

                let response = Response::error(format!("Service error: {}", detail));
                if let Err(e) = write_response(&mut writer, &response).await {
                    warn!(error = %e, "failed to report service error");
                }

                SessionEnd::Fault(detail)
            }
        }
    }

    async fn serve<R, W>(&mut self, reader: R, writer: &mut W) -> Result<SessionEnd>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read command")?
        {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let reply = self.handle_line(line);
            write_response(writer, reply.response()).await?;

            if let Reply::Shutdown(_) = reply {
                return Ok(SessionEnd::Quit);
            }
        }

        Ok(SessionEnd::EndOfInput)
    }

    /// Answer one non-blank input line
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.dispatch(command),
            Err(e) => {
                warn!(error = %e, "rejected input line");
                Reply::Continue(Response::error(e.to_string()))
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Reply {
        let response = match command {
            Command::Init { backend, api_key } => self.init(backend, api_key),
            Command::ChooseMove(request) => self.decide(RequestKind::Move, &request),
            Command::ChooseSwitch(request) => self.decide(RequestKind::Switch, &request),
            Command::ChooseTeamPreview(request) => self.decide(RequestKind::TeamPreview, &request),
            Command::Quit => {
                info!("quit received");
                return Reply::Shutdown(Response::ok_message("Shutting down"));
            }
            Command::Unknown(action) => {
                warn!(%action, "unknown action");
                Response::error(format!("Unknown action: {}", action))
            }
        };

        Reply::Continue(response)
    }

    fn init(&mut self, backend: Option<String>, api_key: Option<String>) -> Response {
        let config = BackendConfig {
            backend: backend.unwrap_or_else(|| self.config.default_backend.clone()),
            api_key,
        };

        let response = match config.validate(&self.env) {
            Ok(message) => {
                info!(backend = %config.backend, "backend initialized");
                Response::ok_message(message)
            }
            Err(e) => {
                warn!(backend = %config.backend, error = %e, "backend initialization failed");
                Response::error(e.to_string())
            }
        };

        self.backend = Some(config);
        response
    }

    fn decide(&self, kind: RequestKind, request: &serde_json::Value) -> Response {
        let response = self.provider.respond(kind, request);

        match &response.choice {
            Some(choice) => debug!(
                action = kind.action(),
                %choice,
                score = ?response.score,
                "decision made"
            ),
            None => debug!(
                action = kind.action(),
                message = ?response.message,
                "decision failed"
            ),
        }

        response
    }
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, response: &Response) -> Result<()> {
    let mut line = response.to_line().context("Failed to encode response")?;
    line.push('\n');

    writer
        .write_all(line.as_bytes())
        .await
        .context("Failed to write response")?;
    writer.flush().await.context("Failed to flush response")?;

    Ok(())
}
