//! Tracing subscriber setup.
//!
//! Log lines are compact and leave out module paths; resource logs carry an
//! `entity_type` field instead. The level comes from `RUST_LOG`.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
