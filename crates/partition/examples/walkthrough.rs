//! Partition walkthrough: fill a 1 MiB arena, free two tenants, compact.
//!
//! Demonstrates:
//!   1. Creating an arena with `ArenaConfig`
//!   2. Allocating with first-fit until the arena is exactly full
//!   3. Releasing blocks and inspecting the fragmented layout
//!   4. Compacting so a request that did not fit now succeeds
//!   5. Choosing a strategy from a text tag
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example walkthrough

use partition::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_layout(title: &str, arena: &Arena) {
    println!("{title}");
    print!("{}", arena.report());
    println!("  {}", arena.stats());
}

fn main() -> Result<(), ArenaError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut arena = Arena::new(ArenaConfig::default())?;
    print_layout("Initial:", &arena);

    for (name, size) in [
        ("P1", 51_300),
        ("P2", 89_123),
        ("P6", 49_144),
        ("P3", 81_297),
        ("P4", 777_712),
    ] {
        arena.allocate(size, name, Strategy::FirstFit)?;
    }
    print_layout("After allocation:", &arena);

    arena.release("P6")?;
    arena.release("P1")?;
    print_layout("After release:", &arena);

    let request = 51_300 + 49_144;
    match arena.allocate(request, "P7", Strategy::BestFit) {
        Err(ArenaError::OutOfMemory { largest_hole, .. }) => {
            println!("P7 ({request}) does not fit; largest hole is {largest_hole}");
        }
        other => println!("unexpected: {other:?}"),
    }

    arena.compact();
    print_layout("After compaction:", &arena);

    let strategy: Strategy = "worst-fit".parse()?;
    arena.allocate(request, "P7", strategy)?;
    print_layout("After placing P7:", &arena);

    if let Err(err) = "next-fit".parse::<Strategy>() {
        println!("rejected tag: {err}");
    }

    let released = arena.teardown();
    println!("Released {released} blocks");
    Ok(())
}
