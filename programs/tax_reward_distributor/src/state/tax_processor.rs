use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::utils::{bps_share, weighted_share};

/// One destination slot of the tax processor
/// - Moves Unset -> Set exactly once; nothing moves it back
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WireSlot {
    #[default]
    Unset,
    Set(Pubkey),
}

impl WireSlot {
    pub fn get(&self) -> Option<Pubkey> {
        match self {
            WireSlot::Unset => None,
            WireSlot::Set(key) => Some(*key),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, WireSlot::Set(_))
    }

    /// Wires the slot to `key`
    ///
    /// Returns true when the slot changed. Re-submitting the key already held
    /// is a no-op; any other key on a filled slot is rejected.
    pub fn wire(&mut self, key: Pubkey) -> Result<bool> {
        require_keys_neq!(key, Pubkey::default(), DistributorError::ZeroAddress);
        match self {
            WireSlot::Unset => {
                *self = WireSlot::Set(key);
                Ok(true)
            }
            WireSlot::Set(current) if *current == key => Ok(false),
            WireSlot::Set(_) => err!(DistributorError::AlreadyWired),
        }
    }

    /// Wired key or DestinationNotWired
    pub fn require(&self) -> Result<Pubkey> {
        self.get().ok_or_else(|| DistributorError::DestinationNotWired.into())
    }
}

/// The five places collected tax can be routed to
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Destinations {
    /// Reward pool receiving the reward share
    pub reward: WireSlot,
    /// Router program converting the swap share into settlement currency
    pub swap_venue: WireSlot,
    /// Token account receiving the burn share
    pub burn_sink: WireSlot,
    /// Settlement token account of the marketing treasury
    pub marketing: WireSlot,
    /// Settlement token account of the vesting treasury
    pub vesting: WireSlot,
}

impl Destinations {
    pub fn all_wired(&self) -> bool {
        self.reward.is_set()
            && self.swap_venue.is_set()
            && self.burn_sink.is_set()
            && self.marketing.is_set()
            && self.vesting.is_set()
    }

    /// Checks the accounts supplied to a tax pass against the wired slots
    /// - Slots are checked in declaration order; an unset slot fails first
    pub fn require_matches(&self, supplied: &Destinations) -> Result<()> {
        let pairs = [
            (self.reward, supplied.reward),
            (self.swap_venue, supplied.swap_venue),
            (self.burn_sink, supplied.burn_sink),
            (self.marketing, supplied.marketing),
            (self.vesting, supplied.vesting),
        ];
        for (wired, account) in pairs {
            let wired = wired.require()?;
            require!(
                account.get() == Some(wired),
                DistributorError::DestinationMismatch
            );
        }
        Ok(())
    }
}

/// Vault balances around the swap leg of a tax pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapBalances {
    pub tax_before: u64,
    pub tax_after: u64,
    pub settlement_before: u64,
    pub settlement_after: u64,
}

/// Result of splitting a processed amount of the taxed token
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaxSplit {
    pub reward_share: u64,
    pub burn_share: u64,
    /// Remainder; absorbs rounding so the three shares sum to the amount
    pub swap_share: u64,
}

/// Result of splitting swap proceeds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettlementSplit {
    pub marketing_share: u64,
    /// Remainder; absorbs rounding
    pub vesting_share: u64,
}

/**
 * Tax processor state account
 *
 * Receives collected transfer tax in its tax vault and routes it on
 * `process`: reward share to the reward pool, burn share to the burn sink,
 * the rest swapped for settlement currency which is then split between the
 * marketing and vesting treasuries.
 *
 * Derivation: ["tax_processor", token_mint]
 *
 * Split convention:
 * - reward_bps and burn_bps are basis points of the processed amount;
 *   the swap leg takes whatever is left
 * - marketing_bps and vesting_bps are relative weights of the swap proceeds
 */
#[account]
#[derive(Default, Debug)]
pub struct TaxProcessor {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Privileged operator
    pub admin: Pubkey,

    /// Account allowed to call process besides the admin
    pub keeper: Pubkey,

    /// Taxed token mint
    pub token_mint: Pubkey,

    /// Settlement currency mint the swap leg converts into
    pub settlement_mint: Pubkey,

    /// Token account receiving collected tax
    /// - Derived from: ["tax_vault", tax_processor]
    pub tax_vault: Pubkey,

    /// Token account receiving swap proceeds
    /// - Derived from: ["settlement_vault", tax_processor]
    pub settlement_vault: Pubkey,

    /// Wire-once destination slots
    pub destinations: Destinations,

    /// Share of each processed amount sent to the reward pool
    pub reward_bps: u16,

    /// Share of each processed amount sent to the burn sink
    pub burn_bps: u16,

    /// Weight of the marketing treasury in the swap proceeds
    pub marketing_bps: u16,

    /// Weight of the vesting treasury in the swap proceeds
    pub vesting_bps: u16,

    /// Kill-switch; process fails while false
    pub processing_enabled: bool,

    /// Lifetime amount taken out of the tax vault
    pub total_processed: u64,

    /// Lifetime reward shares
    pub total_rewarded: u64,

    /// Lifetime burn shares
    pub total_burned: u64,

    /// Lifetime swap shares
    pub total_swapped: u64,

    /// Lifetime settlement currency received
    pub total_settlement_out: u64,

    /// Time of the last successful process
    pub last_processed_at: i64,
}

impl TaxProcessor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<TaxProcessor>();

    /// Checks split ratios against the program bounds
    pub fn validate_split(
        reward_bps: u16,
        burn_bps: u16,
        marketing_bps: u16,
        vesting_bps: u16,
    ) -> Result<()> {
        require!(
            reward_bps as u64 + burn_bps as u64 <= BPS_DENOMINATOR,
            DistributorError::InvalidSplit
        );
        require!(
            marketing_bps as u64 <= BPS_DENOMINATOR && vesting_bps as u64 <= BPS_DENOMINATOR,
            DistributorError::InvalidSplit
        );
        require!(
            marketing_bps as u64 + vesting_bps as u64 > 0,
            DistributorError::InvalidSplit
        );
        Ok(())
    }

    /// Wires every supplied destination into its slot
    ///
    /// Returns the slots that changed, for event emission.
    pub fn wire_destinations(
        &mut self,
        reward: Option<Pubkey>,
        swap_venue: Option<Pubkey>,
        burn_sink: Option<Pubkey>,
        marketing: Option<Pubkey>,
        vesting: Option<Pubkey>,
    ) -> Result<Vec<(&'static str, Pubkey)>> {
        require!(!self.destinations.all_wired(), DistributorError::AlreadyWired);

        let requests = [
            ("reward", &mut self.destinations.reward, reward),
            ("swap_venue", &mut self.destinations.swap_venue, swap_venue),
            ("burn_sink", &mut self.destinations.burn_sink, burn_sink),
            ("marketing", &mut self.destinations.marketing, marketing),
            ("vesting", &mut self.destinations.vesting, vesting),
        ];

        let mut wired = Vec::new();
        for (name, slot, key) in requests {
            if let Some(key) = key {
                if slot.wire(key)? {
                    wired.push((name, key));
                }
            }
        }
        Ok(wired)
    }

    /// Checks whether a process call may run against `available` tokens
    pub fn validate_process(
        &self,
        amount: u64,
        available: u64,
        now: i64,
        deadline: i64,
    ) -> Result<()> {
        require!(self.processing_enabled, DistributorError::ProcessingDisabled);
        require!(amount > 0, DistributorError::ZeroAmount);
        require!(now <= deadline, DistributorError::DeadlineExpired);
        require!(available >= amount, DistributorError::InsufficientBalance);
        Ok(())
    }

    /// Splits `amount` into reward, burn and swap shares
    pub fn split(&self, amount: u64) -> Result<TaxSplit> {
        let reward_share = bps_share(amount, self.reward_bps)?;
        let burn_share = bps_share(amount, self.burn_bps)?;
        let swap_share = amount
            .checked_sub(reward_share)
            .and_then(|rest| rest.checked_sub(burn_share))
            .ok_or(DistributorError::ArithmeticOverflow)?;

        Ok(TaxSplit {
            reward_share,
            burn_share,
            swap_share,
        })
    }

    /// Splits swap proceeds between marketing and vesting
    pub fn split_settlement(&self, settlement_out: u64) -> Result<SettlementSplit> {
        let marketing_share = weighted_share(
            settlement_out,
            self.marketing_bps as u64,
            self.marketing_bps as u64 + self.vesting_bps as u64,
        )?;
        let vesting_share = settlement_out
            .checked_sub(marketing_share)
            .ok_or(DistributorError::ArithmeticOverflow)?;

        Ok(SettlementSplit {
            marketing_share,
            vesting_share,
        })
    }

    /// Checks the swap leg against what the pass asked for and splits its proceeds
    ///
    /// The venue must take exactly the swap share out of the tax vault, and
    /// the settlement vault must grow by at least `min_settlement_out`. With
    /// no swap share, balances are unchanged and only a zero minimum passes.
    pub fn settle_swap(
        &self,
        split: &TaxSplit,
        balances: &SwapBalances,
        min_settlement_out: u64,
    ) -> Result<(u64, SettlementSplit)> {
        let spent = balances
            .tax_before
            .checked_sub(balances.tax_after)
            .ok_or(DistributorError::SwapInputMismatch)?;
        require!(spent == split.swap_share, DistributorError::SwapInputMismatch);

        let settlement_out = balances
            .settlement_after
            .checked_sub(balances.settlement_before)
            .ok_or(DistributorError::SlippageExceeded)?;
        require!(
            settlement_out >= min_settlement_out,
            DistributorError::SlippageExceeded
        );

        Ok((settlement_out, self.split_settlement(settlement_out)?))
    }

    /// Adds a completed pass to the lifetime statistics
    pub fn record_processed(
        &mut self,
        amount: u64,
        split: &TaxSplit,
        settlement_out: u64,
        now: i64,
    ) -> Result<()> {
        self.total_processed = self
            .total_processed
            .checked_add(amount)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        self.total_rewarded = self
            .total_rewarded
            .checked_add(split.reward_share)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        self.total_burned = self
            .total_burned
            .checked_add(split.burn_share)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        self.total_swapped = self
            .total_swapped
            .checked_add(split.swap_share)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        self.total_settlement_out = self
            .total_settlement_out
            .checked_add(settlement_out)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        self.last_processed_at = now;
        Ok(())
    }
}
