//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `kennel_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("kennel_core ping={}", kennel_core::ping());
    println!("kennel_core version={}", kennel_core::core_version());
}
