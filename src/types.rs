multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Gate State — one-way contract lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GateState {
    /// Deployed, `initialize` not yet called. Ledger writes are refused.
    Uninitialized,
    /// Terminal. Ledger writes are accepted, `initialize` is refused.
    Initialized,
}

impl GateState {
    pub fn is_initialized(&self) -> bool {
        *self == GateState::Initialized
    }

    /// The only transition of the gate. A second call fails even when
    /// issued by the same caller.
    pub fn initialize(&self) -> Result<GateState, ErrorKind> {
        match self {
            GateState::Uninitialized => Ok(GateState::Initialized),
            GateState::Initialized => Err(ErrorKind::NotAuthorized),
        }
    }

    pub fn require_initialized(&self) -> Result<(), ErrorKind> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(ErrorKind::NotAuthorized)
        }
    }
}

// ============================================================
// Error Kind — typed failures surfaced by the endpoints
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Re-initialization, or a ledger write before initialization.
    NotAuthorized,
    /// A merged slot total or a target height left the u64 range.
    Overflow,
}

impl ErrorKind {
    /// Fixed numeric code of the kind. Reverts on chain carry only the
    /// message, so this is the mapping off-chain callers use to turn a
    /// revert message back into its code.
    pub const fn code(&self) -> u32 {
        match self {
            ErrorKind::NotAuthorized => 1,
            ErrorKind::Overflow => 2,
        }
    }

    /// Revert message used when the kind reaches an endpoint boundary.
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorKind::NotAuthorized => "Not authorized",
            ErrorKind::Overflow => "Value overflow",
        }
    }

    /// Inverse of [`ErrorKind::message`].
    pub fn from_message(message: &str) -> Option<ErrorKind> {
        match message {
            "Not authorized" => Some(ErrorKind::NotAuthorized),
            "Value overflow" => Some(ErrorKind::Overflow),
            _ => None,
        }
    }
}
