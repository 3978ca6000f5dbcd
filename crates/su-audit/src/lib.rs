//! # su-audit
//!
//! Audit records for superuser login attempts.
//!
//! - [`LoginAttemptEvent`] - One audited attempt (username and outcome, never the secret)
//! - [`AuditSink`] - Pluggable trait for audit backends
//! - [`TracingAuditSink`] - Emits records through `tracing`
//! - [`MemoryAuditSink`] - Keeps records in memory for inspection
//!
//! ## Example
//!
//! ```rust
//! use su_audit::{AuditSink, MemoryAuditSink, Outcome};
//!
//! let sink = MemoryAuditSink::new();
//! sink.record_login_attempt("eve", false).expect("record");
//!
//! let events = sink.events();
//! assert_eq!(events[0].username, "eve");
//! assert_eq!(events[0].outcome, Outcome::Failure);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod events;
pub mod sink;

// Re-export main types
pub use error::{AuditError, Result};
pub use events::{LoginAttemptEvent, Outcome, SUPERUSER_METHOD, Severity};
pub use sink::{AuditSink, MemoryAuditSink, NoopAuditSink, TracingAuditSink};
