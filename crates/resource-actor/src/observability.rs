//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); actors identify
//! themselves with an `entity_type` field instead. Verbosity comes from `RUST_LOG`, falling back
//! to `info` when the variable is unset or unparsable.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Actor lifecycle, saves, request spans
//! RUST_LOG=debug cargo run     # Full payloads on every Get/Save/FindAll
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started` / `Shutdown` with the store size
//! - **Store Operations**: `Get` (with `found`), `Save` (with `is_new`), `FindAll` (with `count`)
//! - **Client Calls**: one span per `ActorClient` call, named after the method
//!
//! With `RUST_LOG=info`, creating a pet reads:
//!
//! ```text
//! INFO create_pet: Saving pet pet=Pet { id: None, name: "Leo", .. }
//! INFO create_pet:save: Saved entity_type="Pet" id=14 is_new=true size=14
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "create_pet:save")
        .init();
}
