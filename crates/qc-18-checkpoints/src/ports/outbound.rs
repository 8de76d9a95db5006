//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::CheckpointResult;
use async_trait::async_trait;

/// DNS TXT record lookup.
///
/// Implementations are responsible for DNSSEC validation. Returning an empty
/// list or [`crate::CheckpointError::DnsUnavailable`] both mean "nothing to
/// add"; the DNS stage never fails because of the resolver.
#[async_trait]
pub trait TxtRecordResolver: Send + Sync {
    /// Resolve TXT records for all `names` and return them flattened.
    async fn resolve_txt(&self, names: &[&str]) -> CheckpointResult<Vec<String>>;
}
