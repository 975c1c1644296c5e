//! Upstream URL template.

use crate::routing::Operation;
use crate::upstream::Credentials;

/// Build `<base>/waInstance{id}/{operation}/{token}`.
///
/// Credentials are substituted verbatim. A trailing slash on `base` is ignored.
pub fn build_url(base: &str, credentials: &Credentials, op: Operation) -> String {
    format!(
        "{}/waInstance{}/{}/{}",
        base.trim_end_matches('/'),
        credentials.id_instance,
        op.name(),
        credentials.api_token_instance,
    )
}
