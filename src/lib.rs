//! Matrícula Probe
//!
//! Checks whether a student enrollment number ("matrícula") exists in the
//! Aluno Online portal. The portal offers no existence lookup, so the probe
//! drives its HTML login flow with a fixed placeholder password and
//! classifies the rejection message it gets back:
//!
//! - "não existe" in the error text → the matrícula is not registered
//! - "Credenciais Inválidas" → the matrícula exists (wrong password, as expected)
//! - any other error text is passed through verbatim
//! - no error block at all → the portal accepted the probe; the raw page is
//!   returned as-is
//!
//! The probe is exposed over a single HTTP endpoint, `POST /existeMatricula`.
//!
//! # Examples
//!
//! ```rust
//! use matricula_probe::{SessionManager, Settings};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! let manager = SessionManager::new(settings)?;
//! let outcome = manager.check_matricula("201920301011").await?;
//! println!("exists: {}", outcome.success);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use session::SessionManager;
pub use types::{PingResponse, ProbeOutcome, ProbeRequest};
