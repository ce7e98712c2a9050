//! Integration and property tests for the netdyn evaluation core live in
//! `tests/`; this crate intentionally exports nothing.
