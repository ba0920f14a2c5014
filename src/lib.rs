#![no_std]

multiversx_sc::imports!();

pub mod init_gate;
pub mod ledger;
pub mod ledger_proxy;
pub mod schedule;
pub mod types;

use types::GateState;

// ============================================================
// Contract
// ============================================================

/// Accumulates caller-submitted value sequences into a block-height
/// indexed ledger, once a one-time `initialize` call has opened it.
#[multiversx_sc::contract]
pub trait ScheduledLedger: init_gate::InitGateModule + ledger::LedgerModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.gate_state().set(GateState::Uninitialized);
    }

    /// Keeps both the gate and the ledger as they are.
    #[upgrade]
    fn upgrade(&self) {}
}
