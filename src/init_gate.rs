multiversx_sc::imports!();

use crate::types::{ErrorKind, GateState};

/// One-time initialization gate shared by every mutating endpoint.
#[multiversx_sc::module]
pub trait InitGateModule {
    // ========================================================
    // ENDPOINT: initialize
    // Anyone may call it, but only once for the contract's lifetime.
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(&self) -> bool {
        let caller = self.blockchain().get_caller();

        match self.try_initialize() {
            Ok(done) => {
                let height = self.blockchain().get_block_nonce();
                self.initialized_event(&caller, height);
                done
            },
            Err(kind) => sc_panic!(kind.message()),
        }
    }

    #[view(isInitialized)]
    fn is_initialized(&self) -> bool {
        self.gate_state().get().is_initialized()
    }

    fn try_initialize(&self) -> Result<bool, ErrorKind> {
        let next = self.gate_state().get().initialize()?;
        self.gate_state().set(next);
        Ok(true)
    }

    fn require_initialized(&self) -> Result<(), ErrorKind> {
        self.gate_state().get().require_initialized()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("initialized")]
    fn initialized_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] height: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("gateState")]
    fn gate_state(&self) -> SingleValueMapper<GateState>;
}
