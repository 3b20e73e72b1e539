//! Tracing initialisation.
//!
//! Enable with `RUST_LOG`, e.g. `RUST_LOG=bis_eval=debug` for linkage and
//! entry events or `RUST_LOG=bis_eval=trace` for every invocation and
//! dispatch. Set `BISMUTH_LOG_TREE=1` to render spans as an indented tree.
//! All output goes to stderr; stdout stays reserved for the program.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment switch for the hierarchical layout.
pub const LOG_TREE_ENV: &str = "BISMUTH_LOG_TREE";

/// Install the global subscriber. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var(LOG_TREE_ENV).is_ok_and(|v| v != "0");

        let tree_layer = tree.then(|| {
            // writes to stderr by default
            tracing_tree::HierarchicalLayer::new(2).with_targets(true)
        });
        let fmt_layer = (!tree).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
        });

        tracing_subscriber::registry()
            .with(tree_layer)
            .with(fmt_layer)
            .with(filter)
            .init();
    });
}
