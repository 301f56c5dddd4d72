use crate::constants::LIVENESS_TEXT;

/// Liveness probe
///
/// Returns fixed text without touching the store, so it answers even when
/// the store is unreachable.
pub async fn probe() -> &'static str {
    LIVENESS_TEXT
}
