//! Domain primitives, pure helpers, ports and use-cases.
//!
//! Purpose: keep request glue testable without actix or reqwest. Everything
//! here is either a pure function of its inputs or talks to the outside world
//! through a trait in [`ports`].
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error payload.
//! - `DashboardService`: page loader and profile update action.
//! - Formatting helpers: character counters, display names, profile
//!   completeness, social links and URL component encoding.

pub mod character_counter;
pub mod dashboard;
pub mod display_name;
pub mod error;
pub mod ports;
pub mod profile;
pub mod profile_completeness;
pub mod session;
pub mod social_links;
pub mod trace_id;
pub mod url_encoding;

pub use self::dashboard::{ActionOutcome, DashboardData, DashboardService};
pub use self::error::{Error, ErrorCode};
pub use self::profile::{Module, ModuleVersion, ProfileForm, ProfileUpdate, UserProfile};
pub use self::session::{RequestContext, SESSION_COOKIE, Session, SessionToken, SessionUser};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
