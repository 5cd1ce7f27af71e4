/// Liveness probe. Does not touch the store.
pub async fn health() -> &'static str {
    "ok"
}
