//! End-to-end workflows across the workspace crates.

#[cfg(test)]
mod integration;
