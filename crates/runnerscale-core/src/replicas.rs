//! Replica calculation — pending jobs to desired runner count.
//!
//! ```text
//! if pending == 0:
//!     desired = 1                      // keep one runner warm
//! else:
//!     desired = pending / capacity + 1 // floor, then +1
//! ```
//!
//! This is not ceiling division: with a capacity of 10, exactly 10
//! pending jobs already asks for 2 runners.

use std::num::NonZeroU64;

/// Map a pending-job count to the number of runners the autoscaler
/// should provide. Never returns less than 1.
pub fn desired_replicas(pending_jobs: u64, jobs_per_runner: NonZeroU64) -> u64 {
    if pending_jobs == 0 {
        return 1;
    }
    (pending_jobs / jobs_per_runner.get()).saturating_add(1)
}
