//! TLS policy selection for the underlying transport.

use reqwest::{Certificate, ClientBuilder};

/// How server certificates are validated for an exchange.
///
/// The process-wide default is [`TlsPolicy::TrustAny`], which disables
/// certificate validation entirely. This is an explicit weakening intended
/// only for environments that opt in (internal meshes, self-signed test
/// endpoints); anything talking to the open internet should use
/// [`TlsPolicy::Strict`] or pin roots with [`TlsPolicy::CustomRoots`].
#[derive(Debug, Clone, Default)]
pub enum TlsPolicy {
    /// Accept any certificate, valid or not.
    #[default]
    TrustAny,
    /// Full validation against the built-in root store.
    Strict,
    /// Full validation against exactly these roots; the built-in store is
    /// disabled so only the pinned certificates are trusted.
    CustomRoots(Vec<Certificate>),
}

impl TlsPolicy {
    /// Starts a [`ClientBuilder`] configured with this policy.
    pub(crate) fn client_builder(&self) -> ClientBuilder {
        let builder = reqwest::Client::builder();
        match self {
            TlsPolicy::TrustAny => builder.danger_accept_invalid_certs(true),
            TlsPolicy::Strict => builder,
            TlsPolicy::CustomRoots(roots) => {
                let mut builder = builder.tls_built_in_root_certs(false);
                for root in roots {
                    builder = builder.add_root_certificate(root.clone());
                }
                builder
            }
        }
    }
}
