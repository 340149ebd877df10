use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use yield_aggregator::interfaces::ExternalVault;

/// In-memory share vault with switchable failure modes.
#[derive(Clone, Debug)]
pub struct MockVault {
    pub key: Pubkey,
    pub asset: Pubkey,
    pub total_assets: u64,
    pub total_shares: u64,
    pub balances: BTreeMap<Pubkey, u64>,

    /// Capacity reported by `max_deposit` (and enforced by `deposit`).
    pub deposit_cap: Option<u64>,
    /// Capacity reported by `max_withdraw`/`max_redeem` (and enforced).
    pub withdraw_cap: Option<u64>,
    pub fail_deposits: bool,
    /// `withdraw`/`redeem` revert while `max_withdraw` keeps reporting capacity.
    pub fail_withdrawals: bool,
    /// Every `max_*` query reverts.
    pub fail_max_queries: bool,

    pub deposit_calls: u32,
    pub withdraw_calls: u32,
    pub redeem_calls: u32,
}

fn revert<T>() -> Result<T> {
    Err(ProgramError::Custom(0xdead).into())
}

impl MockVault {
    pub fn new(key: Pubkey, asset: Pubkey) -> Self {
        MockVault {
            key,
            asset,
            total_assets: 0,
            total_shares: 0,
            balances: BTreeMap::new(),
            deposit_cap: None,
            withdraw_cap: None,
            fail_deposits: false,
            fail_withdrawals: false,
            fail_max_queries: false,
            deposit_calls: 0,
            withdraw_calls: 0,
            redeem_calls: 0,
        }
    }

    /// Yield earned by the vault: every share is worth more.
    pub fn accrue(&mut self, gain: u64) {
        self.total_assets += gain;
    }

    pub fn slash(&mut self, loss: u64) {
        self.total_assets -= loss;
    }

    /// Seeds a position without going through `deposit`.
    pub fn seed(&mut self, owner: Pubkey, assets: u64) {
        let shares = self.shares_floor(assets);
        self.total_assets += assets;
        self.total_shares += shares;
        *self.balances.entry(owner).or_default() += shares;
    }

    pub fn shares(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn shares_floor(&self, assets: u64) -> u64 {
        if self.total_shares == 0 || self.total_assets == 0 {
            return assets;
        }
        (assets as u128 * self.total_shares as u128 / self.total_assets as u128) as u64
    }

    fn shares_ceil(&self, assets: u64) -> u64 {
        if self.total_shares == 0 || self.total_assets == 0 {
            return assets;
        }
        let numerator = assets as u128 * self.total_shares as u128;
        numerator.div_ceil(self.total_assets as u128) as u64
    }

    fn assets_floor(&self, shares: u64) -> u64 {
        if self.total_shares == 0 {
            return shares;
        }
        (shares as u128 * self.total_assets as u128 / self.total_shares as u128) as u64
    }

    fn debit(&mut self, owner: &Pubkey, shares: u64) -> Result<()> {
        let balance = self.shares(owner);
        if balance < shares {
            return revert();
        }
        self.balances.insert(*owner, balance - shares);
        Ok(())
    }
}

impl ExternalVault for MockVault {
    fn key(&self) -> Pubkey {
        self.key
    }

    fn asset(&self) -> Result<Pubkey> {
        Ok(self.asset)
    }

    fn balance_of(&self, owner: &Pubkey) -> Result<u64> {
        Ok(self.shares(owner))
    }

    fn convert_to_assets(&self, shares: u64) -> Result<u64> {
        Ok(self.assets_floor(shares))
    }

    fn convert_to_shares(&self, assets: u64) -> Result<u64> {
        Ok(self.shares_floor(assets))
    }

    fn max_deposit(&self, _receiver: &Pubkey) -> Result<u64> {
        if self.fail_max_queries {
            return revert();
        }
        Ok(self.deposit_cap.unwrap_or(u64::MAX - self.total_assets))
    }

    fn max_withdraw(&self, owner: &Pubkey) -> Result<u64> {
        if self.fail_max_queries {
            return revert();
        }
        let owned = self.assets_floor(self.shares(owner));
        Ok(self.withdraw_cap.map_or(owned, |cap| cap.min(owned)))
    }

    fn max_redeem(&self, owner: &Pubkey) -> Result<u64> {
        if self.fail_max_queries {
            return revert();
        }
        let owned = self.shares(owner);
        Ok(self.withdraw_cap.map_or(owned, |cap| self.shares_floor(cap).min(owned)))
    }

    fn deposit(&mut self, assets: u64, receiver: &Pubkey) -> Result<u64> {
        self.deposit_calls += 1;
        if self.fail_deposits || assets > self.deposit_cap.unwrap_or(u64::MAX) {
            return revert();
        }
        let shares = self.shares_floor(assets);
        self.total_assets += assets;
        self.total_shares += shares;
        *self.balances.entry(*receiver).or_default() += shares;
        Ok(shares)
    }

    fn withdraw(&mut self, assets: u64, _receiver: &Pubkey, owner: &Pubkey) -> Result<u64> {
        self.withdraw_calls += 1;
        if self.fail_withdrawals || assets > self.withdraw_cap.unwrap_or(u64::MAX) {
            return revert();
        }
        let shares = self.shares_ceil(assets);
        self.debit(owner, shares)?;
        self.total_assets -= assets;
        self.total_shares -= shares;
        Ok(shares)
    }

    fn redeem(&mut self, shares: u64, _receiver: &Pubkey, owner: &Pubkey) -> Result<u64> {
        self.redeem_calls += 1;
        if self.fail_withdrawals {
            return revert();
        }
        let assets = self.assets_floor(shares);
        if assets > self.withdraw_cap.unwrap_or(u64::MAX) {
            return revert();
        }
        self.debit(owner, shares)?;
        self.total_assets -= assets;
        self.total_shares -= shares;
        Ok(assets)
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, shares: u64) -> Result<()> {
        self.debit(from, shares)?;
        *self.balances.entry(*to).or_default() += shares;
        Ok(())
    }
}
