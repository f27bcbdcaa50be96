//! Sub-reducers used by the action handlers in `update.rs`.
//!
//! Reducers are synchronous and never touch the network; handlers await the
//! collaborator first and only then call into a reducer.

pub mod comments;
