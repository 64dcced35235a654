//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod form_state;
pub mod route_guard;
pub mod sign_out;
pub mod submission;
pub mod validator;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use form_state::{FormState, SubmitPhase};
pub use route_guard::{GuardDecision, RouteGuardUseCase, guard};
pub use sign_out::SignOutUseCase;
pub use submission::{SubmissionCoordinator, SubmitOutcome, failure_message};
pub use validator::validate;
