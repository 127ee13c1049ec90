//! Storage registrar: who may hold a balance, and what they paid for it.

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    traits::{fungible, tokens::Preservation, Get},
};
use sp_runtime::{
    traits::{Saturating, Zero},
    DispatchError,
};

use crate::{BalanceOf, Closure, Config, Error, Event, Pallet, StorageDeposits, LOG_TARGET};

impl<T: Config> Pallet<T> {
    pub fn is_registered(who: &T::AccountId) -> bool {
        StorageDeposits::<T>::contains_key(who)
    }

    /// Deposit escrowed for `who`, `None` when unregistered.
    pub fn storage_balance_of(who: &T::AccountId) -> Option<BalanceOf<T>> {
        StorageDeposits::<T>::get(who)
    }

    /// Minimum and maximum storage deposit. Both are the fixed per-account cost.
    pub fn storage_balance_bounds() -> (BalanceOf<T>, BalanceOf<T>) {
        let cost = T::StorageByteCost::get();
        (cost, cost)
    }

    /// Register `account`, charging `payer` the storage cost out of `deposit`.
    pub(crate) fn register_account(
        payer: &T::AccountId,
        account: &T::AccountId,
        deposit: BalanceOf<T>,
    ) -> DispatchResult {
        if Self::is_registered(account) {
            log::debug!(
                target: LOG_TARGET,
                "{account:?} is already registered, refunding {deposit:?}"
            );
            Self::emit(Event::StorageDeposited {
                payer: payer.clone(),
                account: account.clone(),
                charged: Zero::zero(),
                refunded: deposit,
            });
            return Ok(());
        }

        let cost = T::StorageByteCost::get();
        ensure!(deposit >= cost, Error::<T>::InsufficientDeposit);

        <T::NativeBalance as fungible::Mutate<_>>::transfer(
            payer,
            &Self::account_id(),
            cost,
            Preservation::Preserve,
        )?;
        StorageDeposits::<T>::insert(account, cost);

        Self::emit(Event::StorageDeposited {
            payer: payer.clone(),
            account: account.clone(),
            charged: cost,
            refunded: deposit.saturating_sub(cost),
        });
        Ok(())
    }

    /// Close the ledger entry of `who` and refund its deposit.
    ///
    /// Returns the balance held at closure, or `None` when `who` was not registered.
    pub(crate) fn unregister_account(
        who: &T::AccountId,
        closure: Closure,
    ) -> Result<Option<u128>, DispatchError> {
        let Some(escrow) = StorageDeposits::<T>::get(who) else {
            Self::emit(Event::AccountNotClosed { account: who.clone() });
            return Ok(None);
        };

        let balance = Self::ft_balance_of(who);
        match closure {
            Closure::RejectIfFunded => {
                ensure!(balance == 0, Error::<T>::PositiveBalanceNotForced);
            },
            Closure::BurnRemaining => {
                if balance > 0 {
                    log::debug!(target: LOG_TARGET, "burning {balance} held by closing {who:?}");
                }
            },
        }

        let closed = Self::remove_ledger_entry(who)?;
        StorageDeposits::<T>::remove(who);

        if !escrow.is_zero() {
            <T::NativeBalance as fungible::Mutate<_>>::transfer(
                &Self::account_id(),
                who,
                escrow,
                Preservation::Preserve,
            )?;
        }

        Self::emit(Event::AccountClosed { account: who.clone(), balance: closed });
        Ok(Some(closed))
    }
}
