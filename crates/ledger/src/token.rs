use crate::{LedgerError, LedgerEvent, LogEntry, Receipt};
use alloy_primitives::{keccak256, Address, TxHash, U256};
use std::collections::HashMap;
use tracing::debug;

pub const TOKEN_NAME: &str = "Chainfly Energy Token";
pub const TOKEN_SYMBOL: &str = "CET";
pub const TOKEN_DECIMALS: u8 = 18;

/// 1,000,000 CET at 18 decimals.
pub const INITIAL_SUPPLY: U256 = U256::from_limbs([0x1bce_cced_a100_0000, 0xd3c2, 0, 0]);

/// Seconds between consecutive blocks.
const DEFAULT_BLOCK_TIME_SECS: u64 = 2;

/// Mutable token state. Calls run against a copy which is committed only
/// when the whole call succeeds.
#[derive(Debug, Clone, Default)]
struct TokenState {
    owner: Address,
    total_supply: U256,
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
}

impl TokenState {
    fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    fn only_owner(&self, caller: Address) -> Result<(), LedgerError> {
        if self.owner == caller {
            Ok(())
        } else {
            Err(LedgerError::OwnableUnauthorizedAccount(caller))
        }
    }

    /// Move `value` from `from` to `to`. A zero `from` mints, a zero `to` burns.
    fn update(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
        events: &mut Vec<LedgerEvent>,
    ) -> Result<(), LedgerError> {
        if from == Address::ZERO {
            self.total_supply = self
                .total_supply
                .checked_add(value)
                .ok_or(LedgerError::SupplyOverflow)?;
        } else {
            let balance = self.balance_of(from);
            if balance < value {
                return Err(LedgerError::InsufficientBalance {
                    sender: from,
                    balance,
                    needed: value,
                });
            }
            self.balances.insert(from, balance - value);
        }

        if to == Address::ZERO {
            self.total_supply -= value;
        } else {
            *self.balances.entry(to).or_default() += value;
        }

        events.push(LedgerEvent::Transfer { from, to, value });
        Ok(())
    }

    fn transfer(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
        events: &mut Vec<LedgerEvent>,
    ) -> Result<(), LedgerError> {
        if from == Address::ZERO {
            return Err(LedgerError::InvalidSender(from));
        }
        if to == Address::ZERO {
            return Err(LedgerError::InvalidReceiver(to));
        }
        self.update(from, to, value, events)
    }

    fn mint(
        &mut self,
        to: Address,
        value: U256,
        events: &mut Vec<LedgerEvent>,
    ) -> Result<(), LedgerError> {
        if to == Address::ZERO {
            return Err(LedgerError::InvalidReceiver(to));
        }
        self.update(Address::ZERO, to, value, events)
    }

    fn burn(
        &mut self,
        from: Address,
        value: U256,
        events: &mut Vec<LedgerEvent>,
    ) -> Result<(), LedgerError> {
        if from == Address::ZERO {
            return Err(LedgerError::InvalidSender(from));
        }
        self.update(from, Address::ZERO, value, events)
    }

    fn approve(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
        emit: Option<&mut Vec<LedgerEvent>>,
    ) -> Result<(), LedgerError> {
        if owner == Address::ZERO {
            return Err(LedgerError::InvalidApprover(owner));
        }
        if spender == Address::ZERO {
            return Err(LedgerError::InvalidSpender(spender));
        }
        self.allowances.insert((owner, spender), value);
        if let Some(events) = emit {
            events.push(LedgerEvent::Approval {
                owner,
                spender,
                value,
            });
        }
        Ok(())
    }

    fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        value: U256,
    ) -> Result<(), LedgerError> {
        let current = self.allowance(owner, spender);
        if current == U256::MAX {
            return Ok(());
        }
        if current < value {
            return Err(LedgerError::InsufficientAllowance {
                spender,
                allowance: current,
                needed: value,
            });
        }
        self.approve(owner, spender, current - value, None)
    }

    fn transfer_ownership(
        &mut self,
        new_owner: Address,
        events: &mut Vec<LedgerEvent>,
    ) {
        events.push(LedgerEvent::OwnershipTransferred {
            previous_owner: self.owner,
            new_owner,
        });
        self.owner = new_owner;
    }
}

/// The CET ledger.
///
/// Blocks are evenly spaced: block `n` has timestamp
/// `genesis_timestamp + n * block_time_secs`.
#[derive(Debug, Clone)]
pub struct CetLedger {
    state: TokenState,
    logs: Vec<LogEntry>,
    head: u64,
    genesis_timestamp: u64,
    block_time_secs: u64,
    tx_count: u64,
}

impl CetLedger {
    /// Deploy the ledger, minting [`INITIAL_SUPPLY`] to `initial_owner`.
    pub fn deploy(initial_owner: Address, genesis_timestamp: u64) -> Result<Self, LedgerError> {
        Self::deploy_with_block_time(initial_owner, genesis_timestamp, DEFAULT_BLOCK_TIME_SECS)
    }

    pub fn deploy_with_block_time(
        initial_owner: Address,
        genesis_timestamp: u64,
        block_time_secs: u64,
    ) -> Result<Self, LedgerError> {
        if initial_owner == Address::ZERO {
            return Err(LedgerError::OwnableInvalidOwner(initial_owner));
        }

        let mut ledger = Self {
            state: TokenState::default(),
            logs: Vec::new(),
            head: 0,
            genesis_timestamp,
            block_time_secs,
            tx_count: 0,
        };

        ledger.execute(initial_owner, |state, events| {
            state.transfer_ownership(initial_owner, events);
            state.mint(initial_owner, INITIAL_SUPPLY, events)
        })?;

        debug!(owner = %initial_owner, supply = %INITIAL_SUPPLY, "CET ledger deployed");
        Ok(ledger)
    }

    pub fn name(&self) -> &str {
        TOKEN_NAME
    }

    pub fn symbol(&self) -> &str {
        TOKEN_SYMBOL
    }

    pub const fn decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }

    pub const fn owner(&self) -> Address {
        self.state.owner
    }

    pub const fn total_supply(&self) -> U256 {
        self.state.total_supply
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.state.balance_of(account)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.state.allowance(owner, spender)
    }

    /// Number of the latest mined block.
    pub const fn block_number(&self) -> u64 {
        self.head
    }

    /// Timestamp of block `number`, if it has been mined.
    pub const fn block_timestamp(&self, number: u64) -> Option<u64> {
        if number > self.head {
            return None;
        }
        Some(self.timestamp_at(number))
    }

    const fn timestamp_at(&self, number: u64) -> u64 {
        self.genesis_timestamp
            .saturating_add(number.saturating_mul(self.block_time_secs))
    }

    /// Logs mined in `[from_block, to_block]`, in chain order.
    pub fn logs(&self, from_block: u64, to_block: u64) -> impl Iterator<Item = &LogEntry> {
        self.logs
            .iter()
            .filter(move |log| log.block_number >= from_block && log.block_number <= to_block)
    }

    /// Mine `count` empty blocks.
    pub const fn advance_blocks(&mut self, count: u64) {
        self.head = self.head.saturating_add(count);
    }

    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        value: U256,
    ) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.transfer(caller, to, value, events)
        })
    }

    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.spend_allowance(from, caller, value)?;
            state.transfer(from, to, value, events)
        })
    }

    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        value: U256,
    ) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.approve(caller, spender, value, Some(events))
        })
    }

    /// Burn `amount` from the caller's own balance.
    pub fn burn(&mut self, caller: Address, amount: U256) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.burn(caller, amount, events)?;
            events.push(LedgerEvent::Burned {
                from: caller,
                amount,
            });
            Ok(())
        })
    }

    /// Burn `amount` from `account` using the owner's allowance. Owner only.
    pub fn burn_from(
        &mut self,
        caller: Address,
        account: Address,
        amount: U256,
    ) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.only_owner(caller)?;
            state.spend_allowance(account, caller, amount)?;
            state.burn(account, amount, events)?;
            events.push(LedgerEvent::Burned {
                from: account,
                amount,
            });
            Ok(())
        })
    }

    /// Mint `amount` to `to`. Owner only.
    pub fn mint(
        &mut self,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.only_owner(caller)?;
            state.mint(to, amount, events)?;
            events.push(LedgerEvent::Minted { to, amount });
            Ok(())
        })
    }

    /// Mint a cashback reward to `user`. Owner only.
    pub fn give_cashback(
        &mut self,
        caller: Address,
        user: Address,
        amount: U256,
    ) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.only_owner(caller)?;
            state.mint(user, amount, events)?;
            events.push(LedgerEvent::Cashback { user, amount });
            Ok(())
        })
    }

    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.only_owner(caller)?;
            if new_owner == Address::ZERO {
                return Err(LedgerError::OwnableInvalidOwner(new_owner));
            }
            state.transfer_ownership(new_owner, events);
            Ok(())
        })
    }

    pub fn renounce_ownership(&mut self, caller: Address) -> Result<Receipt, LedgerError> {
        self.execute(caller, |state, events| {
            state.only_owner(caller)?;
            state.transfer_ownership(Address::ZERO, events);
            Ok(())
        })
    }

    /// Run `call` against staged state and mine a block if it succeeds.
    fn execute<F>(&mut self, caller: Address, call: F) -> Result<Receipt, LedgerError>
    where
        F: FnOnce(&mut TokenState, &mut Vec<LedgerEvent>) -> Result<(), LedgerError>,
    {
        let mut staged = self.state.clone();
        let mut events = Vec::new();

        if let Err(e) = call(&mut staged, &mut events) {
            debug!(caller = %caller, error = %e, "Ledger call reverted");
            return Err(e);
        }

        self.state = staged;
        Ok(self.mine(caller, events))
    }

    fn mine(&mut self, caller: Address, events: Vec<LedgerEvent>) -> Receipt {
        self.head = self.head.saturating_add(1);
        self.tx_count = self.tx_count.saturating_add(1);

        let tx_hash = self.tx_hash(caller);
        let block_number = self.head;
        let timestamp = self.timestamp_at(block_number);

        for (index, event) in events.iter().enumerate() {
            self.logs.push(LogEntry {
                event: event.clone(),
                tx_hash,
                block_number,
                log_index: index as u64,
            });
        }

        Receipt {
            tx_hash,
            block_number,
            timestamp,
            events,
        }
    }

    fn tx_hash(&self, caller: Address) -> TxHash {
        let mut preimage = Vec::with_capacity(20 + 16);
        preimage.extend_from_slice(caller.as_slice());
        preimage.extend_from_slice(&self.tx_count.to_be_bytes());
        preimage.extend_from_slice(&self.head.to_be_bytes());
        keccak256(preimage)
    }
}
