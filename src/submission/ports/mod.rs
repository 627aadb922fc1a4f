//! Port contracts for the external collaborators of the creation flows.
//!
//! Token issuance, the authenticated HTTP gateway, client-side navigation,
//! and user-visible notifications are all owned by other parts of the
//! application; the flows only depend on these traits.

mod auth;
mod gateway;
mod navigator;
mod notifier;

pub use auth::{AccessToken, AccessTokenProvider, AuthError, AuthResult};
pub use gateway::{GatewayError, GatewayResult, SubmitGateway};
pub use navigator::Navigator;
pub use notifier::{NotificationKind, Notifier};
