// ============================================================================
// Domain Models Module
// Contains split requests, results and the participant rows built from them
// ============================================================================

pub mod allocation;
pub mod config;
pub mod participant;
pub mod request;
pub mod split_type;

pub use allocation::{Allocation, SplitId};
pub use config::EngineConfig;
pub use participant::{
    assign_shares, balance_entries, non_zero_participants, BalanceEntry, ExpenseParticipant,
    UserId,
};
pub use request::{ParticipantWeights, SplitRequest};
pub use split_type::SplitType;
