// ============================================================================
// Expense Participants
// Per-user amounts posted to the backend and the balances they imply
// ============================================================================

use crate::engine::{SplitError, SplitResult};
use crate::numeric::{MinorUnits, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One participant row of an expense: how much of it this user carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExpenseParticipant {
    pub user_id: UserId,
    pub amount: MinorUnits,
}

impl ExpenseParticipant {
    pub fn new(user_id: UserId, amount: MinorUnits) -> Self {
        Self { user_id, amount }
    }
}

/// Pair users with allocated shares, positionally.
///
/// # Errors
/// `ParticipantMismatch` if the two lists differ in length.
pub fn assign_shares(
    user_ids: &[UserId],
    shares: &[MinorUnits],
) -> SplitResult<Vec<ExpenseParticipant>> {
    if user_ids.len() != shares.len() {
        return Err(SplitError::ParticipantMismatch {
            users: user_ids.len(),
            shares: shares.len(),
        });
    }

    Ok(user_ids
        .iter()
        .zip(shares)
        .map(|(user_id, amount)| ExpenseParticipant::new(*user_id, *amount))
        .collect())
}

/// Drop rows that carry nothing; they are not stored.
pub fn non_zero_participants(participants: &[ExpenseParticipant]) -> Vec<ExpenseParticipant> {
    participants
        .iter()
        .filter(|p| !p.amount.is_zero())
        .copied()
        .collect()
}

/// Change to the balance `user_id` keeps with `friend_id`.
///
/// Positive means `user_id` owes `friend_id`; negative means `user_id`
/// is owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalanceEntry {
    pub user_id: UserId,
    pub friend_id: UserId,
    pub amount: MinorUnits,
}

impl BalanceEntry {
    /// The entry that undoes this one, used when an expense is deleted.
    pub fn reversed(&self) -> NumericResult<Self> {
        Ok(Self {
            amount: self.amount.checked_neg()?,
            ..*self
        })
    }
}

/// Double-entry balance changes caused by an expense paid by `payer`.
///
/// Each non-payer participant yields two entries: the payer is owed the
/// participant's amount and the participant owes it to the payer. The
/// payer's own row is skipped, as are zero rows.
pub fn balance_entries(
    payer: UserId,
    participants: &[ExpenseParticipant],
) -> NumericResult<Vec<BalanceEntry>> {
    let mut entries = Vec::with_capacity(participants.len() * 2);

    for participant in participants {
        if participant.user_id == payer || participant.amount.is_zero() {
            continue;
        }

        entries.push(BalanceEntry {
            user_id: payer,
            friend_id: participant.user_id,
            amount: participant.amount.checked_neg()?,
        });
        entries.push(BalanceEntry {
            user_id: participant.user_id,
            friend_id: payer,
            amount: participant.amount,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(raw: i64) -> MinorUnits {
        MinorUnits::from_raw(raw)
    }

    #[test]
    fn test_assign_shares() {
        let users = [UserId(1), UserId(2), UserId(3)];
        let shares = [cents(334), cents(333), cents(333)];
        let participants = assign_shares(&users, &shares).unwrap();

        assert_eq!(participants.len(), 3);
        assert_eq!(participants[0], ExpenseParticipant::new(UserId(1), cents(334)));
        assert_eq!(participants[2].user_id, UserId(3));
    }

    #[test]
    fn test_assign_shares_length_mismatch() {
        let result = assign_shares(&[UserId(1)], &[cents(1), cents(2)]);
        assert_eq!(
            result,
            Err(SplitError::ParticipantMismatch { users: 1, shares: 2 })
        );
    }

    #[test]
    fn test_non_zero_participants() {
        let participants = [
            ExpenseParticipant::new(UserId(1), cents(500)),
            ExpenseParticipant::new(UserId(2), cents(0)),
            ExpenseParticipant::new(UserId(3), cents(-500)),
        ];
        let kept = non_zero_participants(&participants);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|p| p.user_id != UserId(2)));
    }

    #[test]
    fn test_balance_entries_skip_payer() {
        let participants = [
            ExpenseParticipant::new(UserId(1), cents(334)),
            ExpenseParticipant::new(UserId(2), cents(333)),
            ExpenseParticipant::new(UserId(3), cents(333)),
        ];
        let entries = balance_entries(UserId(1), &participants).unwrap();

        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            BalanceEntry {
                user_id: UserId(1),
                friend_id: UserId(2),
                amount: cents(-333),
            }
        );
        assert_eq!(
            entries[1],
            BalanceEntry {
                user_id: UserId(2),
                friend_id: UserId(1),
                amount: cents(333),
            }
        );

        // Double entry: every change is mirrored
        let net: i64 = entries.iter().map(|e| e.amount.raw_value()).sum();
        assert_eq!(net, 0);
    }

    #[test]
    fn test_reversed_entry() {
        let entry = BalanceEntry {
            user_id: UserId(2),
            friend_id: UserId(1),
            amount: cents(333),
        };
        let reversed = entry.reversed().unwrap();
        assert_eq!(reversed.amount, cents(-333));
        assert_eq!(reversed.user_id, entry.user_id);
    }
}
