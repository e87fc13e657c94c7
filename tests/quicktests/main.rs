//! Property and scenario tests run against the public API only.

mod avl;
mod bst;
mod heap;
mod structure;

/// Turns on log output for a test run. Safe to call from every test.
fn init_logger() {
    let _ = pretty_env_logger::try_init();
}

/// Removes repeated keys while keeping the first occurrence of each.
fn unique(xs: &[i32]) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    xs.iter().copied().filter(|x| seen.insert(*x)).collect()
}
