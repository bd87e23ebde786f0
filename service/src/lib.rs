//! Decision service for Pokemon Showdown hosts.
//!
//! The host writes one JSON command per line and reads one JSON response per
//! line back:
//!
//! ```text
//! > {"action":"init","backend":"deepseek"}
//! < {"status":"ok","message":"AI initialized with deepseek"}
//! > {"action":"choose_move","request":{"active":[{"moves":[...]}]}}
//! < {"status":"ok","choice":"move 1","score":75.0,"reasoning":"..."}
//! > {"action":"quit"}
//! < {"status":"ok","message":"Shutting down"}
//! ```

mod config;
mod init;
pub mod logging;
mod session;

pub use config::{BACKEND_ENV, DEFAULT_BACKEND, ServiceConfig};
pub use init::{Backend, BackendConfig, EnvLookup, InitError, ProcessEnv};
pub use session::{Reply, Session, SessionEnd};

pub use champ_engine::{DecisionProvider, Heuristic};
