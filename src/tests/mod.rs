//! Crate-level tests: dispatcher behaviour against recording collaborators,
//! plus browser-only checks of the JS boundary.

mod support;
