//! Merge rules for forward-scheduled contributions.
//!
//! A batch submitted at height `H` spreads its `i`-th value onto slot
//! `H + i`. Contributions only ever add to a slot, so batches landing in
//! the same block commute regardless of the order the VM applies them.

use crate::types::ErrorKind;

/// Height of the slot receiving the contribution at `offset` of a batch
/// submitted at `start`.
pub fn slot_height(start: u64, offset: usize) -> Result<u64, ErrorKind> {
    let offset = u64::try_from(offset).map_err(|_| ErrorKind::Overflow)?;
    start.checked_add(offset).ok_or(ErrorKind::Overflow)
}

/// Adds `contribution` onto a slot. An absent slot counts as zero.
pub fn merge(existing: Option<u64>, contribution: u64) -> Result<u64, ErrorKind> {
    existing
        .unwrap_or(0)
        .checked_add(contribution)
        .ok_or(ErrorKind::Overflow)
}
