use anchor_lang::prelude::*;

/**
 * Per-holder reward record
 *
 * Mirrors the holder's token balance as reported by the ledger and carries
 * the holder's checkpoint into the pool accumulator.
 *
 * Derivation: ["holder", reward_pool, holder]
 *
 * Lifecycle:
 * 1. Created on the first balance notification for the address
 *    (or when the admin excludes an address that was never reported)
 * 2. last_non_zero_at set when the balance leaves zero, reset to 0 when it
 *    returns to exactly zero
 * 3. reward_debt / accrued_rewards persist across exits and re-entries
 *
 * Hold states:
 * - NeverHeld: balance == 0, last_non_zero_at == 0
 * - Holding(t0): balance > 0, last_non_zero_at == t0
 * - Eligible: Holding(t0) and now - t0 >= min_hold_time_sec
 */
#[account]
#[derive(Default, Debug)]
pub struct HolderRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Pool this record belongs to
    pub reward_pool: Pubkey,

    /// Holder wallet (token account owner)
    pub holder: Pubkey,

    /// Balance mirrored from the token ledger
    pub balance: u64,

    /// Time the balance last went from zero to non-zero
    /// - 0 with a zero balance means NeverHeld
    /// - 0 with a non-zero balance means Holding(0); read it together with `balance`
    pub last_non_zero_at: i64,

    /// Accumulator value already priced into `balance`, unscaled
    pub reward_debt: u128,

    /// Rewards checkpointed but not yet claimed
    pub accrued_rewards: u64,

    /// Time of the last successful claim (0 = never claimed)
    pub last_claim_at: i64,

    /// Whether the holder is on the pool's exclusion list
    pub excluded: bool,
}

impl HolderRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<HolderRecord>();

    /// Holder currently has a non-zero balance
    pub fn is_holding(&self) -> bool {
        self.balance > 0
    }

    /// Holder has held continuously for at least `min_hold_time_sec`
    pub fn hold_time_met(&self, now: i64, min_hold_time_sec: i64) -> bool {
        self.is_holding() && now.saturating_sub(self.last_non_zero_at) >= min_hold_time_sec
    }

    /// A previous claim is too recent
    pub fn cooldown_active(&self, now: i64, claim_cooldown_sec: i64) -> bool {
        self.last_claim_at != 0 && now.saturating_sub(self.last_claim_at) < claim_cooldown_sec
    }
}
