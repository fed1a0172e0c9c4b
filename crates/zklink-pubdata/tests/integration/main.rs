extern crate alloc;

mod block_stream;
mod records;

use rand::{SeedableRng, rngs::StdRng};

// HELPER FUNCTIONS
// ================================================================================================

/// Returns a deterministic rng so failures can be reproduced.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x7a6b_6c69_6e6b)
}
