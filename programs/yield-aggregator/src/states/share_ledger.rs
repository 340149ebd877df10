use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use crate::utils::AggregatorError;

/// Raw fungible share accounting. Buffer adjustments are applied on top by the pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareLedger {
    pub raw_supply: u64,
    pub balances: BTreeMap<Pubkey, u64>,
    /// owner -> spender -> remaining allowance
    pub allowances: BTreeMap<Pubkey, BTreeMap<Pubkey, u64>>,
}

impl ShareLedger {
    pub fn balance(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or(0)
    }

    pub fn mint(&mut self, to: &Pubkey, shares: u64) -> Result<()> {
        if shares == 0 {
            return Ok(());
        }
        self.raw_supply = self.raw_supply
            .checked_add(shares)
            .ok_or(AggregatorError::OverflowInAdd)?;
        let balance = self.balances.entry(*to).or_default();
        *balance = balance
            .checked_add(shares)
            .ok_or(AggregatorError::OverflowInAdd)?;
        Ok(())
    }

    pub fn burn(&mut self, from: &Pubkey, shares: u64) -> Result<()> {
        if shares == 0 {
            return Ok(());
        }
        let balance = self.balance(from);
        require_gte!(balance, shares, AggregatorError::InsufficientBalance);

        self.set_balance(from, balance - shares);
        self.raw_supply = self.raw_supply
            .checked_sub(shares)
            .ok_or(AggregatorError::OverflowInSub)?;
        Ok(())
    }

    pub fn transfer(&mut self, from: &Pubkey, to: &Pubkey, shares: u64) -> Result<()> {
        let from_balance = self.balance(from);
        require_gte!(from_balance, shares, AggregatorError::InsufficientBalance);
        if from == to || shares == 0 {
            return Ok(());
        }

        self.set_balance(from, from_balance - shares);
        let to_balance = self.balances.entry(*to).or_default();
        *to_balance = to_balance
            .checked_add(shares)
            .ok_or(AggregatorError::OverflowInAdd)?;
        Ok(())
    }

    pub fn approve(&mut self, owner: &Pubkey, spender: &Pubkey, shares: u64) {
        let spenders = self.allowances.entry(*owner).or_default();
        if shares == 0 {
            spenders.remove(spender);
        } else {
            spenders.insert(*spender, shares);
        }
        if spenders.is_empty() {
            self.allowances.remove(owner);
        }
    }

    /// Consumes `shares` of the spender's allowance. `u64::MAX` never decreases.
    pub fn spend_allowance(&mut self, owner: &Pubkey, spender: &Pubkey, shares: u64) -> Result<()> {
        if owner == spender {
            return Ok(());
        }
        let allowance = self.allowance(owner, spender);
        if allowance == u64::MAX {
            return Ok(());
        }
        require_gte!(allowance, shares, AggregatorError::InsufficientAllowance);
        self.approve(owner, spender, allowance - shares);
        Ok(())
    }

    fn set_balance(&mut self, owner: &Pubkey, balance: u64) {
        if balance == 0 {
            self.balances.remove(owner);
        } else {
            self.balances.insert(*owner, balance);
        }
    }
}
