//! Authentication capability.
//!
//! The portal does not authenticate anyone itself; an external provider
//! (sign-in screens, password resets, email verification) owns that flow.
//! The portal only needs to resolve the current identity and to observe
//! identity changes, so that is all the trait exposes.
//!
//! Dashboard-facing writes require a verified email; [`Identity::is_verified`]
//! is the gate.

use async_trait::async_trait;
use tokio::sync::watch;

use farmstand_core::{Email, VendorId};

/// The authenticated identity behind a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-assigned id; doubles as the vendor record key.
    pub id: VendorId,
    /// The identity's email address.
    pub email: Email,
    /// Whether the email address has been verified.
    pub email_verified: bool,
}

impl Identity {
    /// Whether this identity may access vendor-facing operations.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.email_verified
    }
}

/// Capability trait for the external auth provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The identity currently signed in, if any.
    async fn current_identity(&self) -> Option<Identity>;

    /// Observe sign-in/sign-out transitions.
    ///
    /// The receiver yields the identity in effect after each change; `None`
    /// means signed out.
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}

/// An identity provider backed by an in-process value.
///
/// Used in local development and tests, where there is no real auth service
/// to call. `set_identity` models sign-in/sign-out transitions.
pub struct StaticIdentityProvider {
    tx: watch::Sender<Option<Identity>>,
}

impl StaticIdentityProvider {
    /// Create a provider with an initial identity (or signed-out state).
    #[must_use]
    pub fn new(identity: Option<Identity>) -> Self {
        let (tx, _rx) = watch::channel(identity);
        Self { tx }
    }

    /// Replace the current identity, notifying subscribers.
    pub fn set_identity(&self, identity: Option<Identity>) {
        // send only fails when every receiver is gone; the state still
        // updates for future subscribers
        let _ = self.tx.send(identity);
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_identity(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }
}
