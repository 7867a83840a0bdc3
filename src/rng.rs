use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// The only process-wide mutable state the engine owns: the base seed every
/// worker's RNG is derived from. A seed of `0` means "pick one from the
/// system clock", matching the reference implementation's `get_rng`.
static SEED: AtomicU64 = AtomicU64::new(0);

/// Set the process-wide RNG seed. Pass `0` to fall back to a time-based seed.
pub fn set_seed(seed: u64) {
    SEED.store(seed, Ordering::SeqCst);
}

fn time_seed() -> u64 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before the Unix epoch");
    since_epoch.as_secs() * 1_000_000_000 + since_epoch.subsec_nanos() as u64
}

fn base_seed() -> u64 {
    let seed = SEED.load(Ordering::SeqCst);
    if seed != 0 {
        seed
    } else {
        time_seed()
    }
}

/// Build a deterministic, independent RNG for worker `index`.
///
/// A fixed process-wide seed plus a fixed worker count yields identical
/// per-worker RNGs across runs, which is what makes `Model::step` reproducible
/// under a fixed seed and worker count.
pub fn worker_rng(index: u64) -> StdRng {
    // A large odd multiplier spreads consecutive worker indices across the
    // seed space so nearby indices don't produce correlated streams.
    let derived = base_seed()
        .wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    StdRng::seed_from_u64(derived)
}
