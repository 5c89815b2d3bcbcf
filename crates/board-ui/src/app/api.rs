//! Board REST client shared through a yew context.
//!
//! One client is built at boot. Signing in or out swaps its bearer token in
//! place, so components holding the context never see a stale client.

use std::rc::Rc;

use crate::core::auth::Session;
use crate::services::api::ApiClient;

/// Context value handed to every screen that talks to the board backend.
#[derive(Clone, Debug)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Client for `base_url`, already carrying the token of a restored session.
    pub(crate) fn for_session(base_url: impl Into<String>, session: &Session) -> Self {
        let ctx = Self {
            client: Rc::new(ApiClient::new(base_url)),
        };
        ctx.authorize(session);
        ctx
    }

    /// Send `session`'s token with every following request.
    pub(crate) fn authorize(&self, session: &Session) {
        self.client.set_token(session.token().map(ToString::to_string));
    }

    /// Drop the bearer token; later requests go out anonymous.
    pub(crate) fn revoke(&self) {
        self.client.set_token(None);
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
