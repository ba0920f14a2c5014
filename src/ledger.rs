multiversx_sc::imports!();

use crate::init_gate;
use crate::schedule::{merge, slot_height};
use crate::types::ErrorKind;

/// Upper bound on the height range scanned by a single `getValues` query.
const MAX_RANGE_QUERY: u64 = 100;

/// Sparse ledger of accumulated values, keyed by block height.
#[multiversx_sc::module]
pub trait LedgerModule: init_gate::InitGateModule {
    // ========================================================
    // ENDPOINT: setValues
    // Spreads the values forward from the current block:
    // values[i] is added onto the slot at height + i.
    // ========================================================

    #[endpoint(setValues)]
    fn set_values(&self, values: MultiValueEncoded<u64>) -> bool {
        let caller = self.blockchain().get_caller();
        let height = self.blockchain().get_block_nonce();
        let values = values.to_vec();

        match self.try_set_values(height, &values) {
            Ok(done) => {
                self.values_scheduled_event(&caller, height, values.len() as u64);
                done
            },
            Err(kind) => sc_panic!(kind.message()),
        }
    }

    /// Computes every merged total before writing any of them, so a
    /// failing batch leaves the ledger untouched.
    fn try_set_values(
        &self,
        height: u64,
        values: &ManagedVec<Self::Api, u64>,
    ) -> Result<bool, ErrorKind> {
        self.require_initialized()?;

        let mut totals: ManagedVec<Self::Api, u64> = ManagedVec::new();
        for (offset, contribution) in values.iter().enumerate() {
            let slot = slot_height(height, offset)?;
            totals.push(merge(self.slots().get(&slot), contribution)?);
        }

        for (offset, total) in totals.iter().enumerate() {
            let slot = slot_height(height, offset)?;
            self.slots().insert(slot, total);
        }

        Ok(true)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getValue)]
    fn get_value(&self, height: u64) -> Option<u64> {
        self.slots().get(&height)
    }

    /// Present slots in `[from, from + count)`, ascending by height.
    #[view(getValues)]
    fn get_values(&self, from: u64, count: u64) -> MultiValueEncoded<MultiValue2<u64, u64>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        // Inclusive bound, so the slot at u64::MAX stays reachable.
        let last = from.saturating_add(core::cmp::min(count, MAX_RANGE_QUERY) - 1);

        for height in from..=last {
            if let Some(value) = self.slots().get(&height) {
                result.push((height, value).into());
            }
        }
        result
    }

    #[view(getSlotCount)]
    fn get_slot_count(&self) -> u64 {
        self.slots().len() as u64
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("valuesScheduled")]
    fn values_scheduled_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] height: u64,
        count: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("slots")]
    fn slots(&self) -> MapMapper<u64, u64>;
}
