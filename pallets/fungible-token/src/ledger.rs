//! Balance ledger: the only code that writes `Balances` and `TotalSupply`.

use frame_support::{dispatch::DispatchResult, ensure, BoundedVec};
use sp_runtime::DispatchError;

use crate::{Balances, Config, Error, Event, FungibleLedger, Pallet, TotalSupply};

impl<T: Config> Pallet<T> {
    /// Balance of `who`; zero for unregistered accounts.
    pub fn ft_balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    pub fn ft_total_supply() -> u128 {
        TotalSupply::<T>::get()
    }

    fn ensure_registered(who: &T::AccountId) -> DispatchResult {
        ensure!(Self::is_registered(who), Error::<T>::AccountNotRegistered);
        Ok(())
    }

    /// Move `amount` from `sender` to `receiver`. Both balances are checked before either is
    /// written.
    pub(crate) fn internal_transfer(
        sender: &T::AccountId,
        receiver: &T::AccountId,
        amount: u128,
        memo: Option<BoundedVec<u8, T::MaxMemoLength>>,
    ) -> DispatchResult {
        ensure!(sender != receiver, Error::<T>::SelfTransfer);
        ensure!(amount > 0, Error::<T>::ZeroAmount);
        Self::ensure_registered(sender)?;
        Self::ensure_registered(receiver)?;

        let sender_balance = Balances::<T>::get(sender)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        let receiver_balance = Balances::<T>::get(receiver)
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticFault)?;

        Balances::<T>::insert(sender, sender_balance);
        Balances::<T>::insert(receiver, receiver_balance);
        Self::emit(Event::Transferred {
            from: sender.clone(),
            to: receiver.clone(),
            amount,
            memo,
        });
        Ok(())
    }

    pub(crate) fn internal_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_registered(to)?;
        let supply = TotalSupply::<T>::get()
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticFault)?;
        let balance = Balances::<T>::get(to)
            .checked_add(amount)
            .ok_or(Error::<T>::ArithmeticFault)?;

        TotalSupply::<T>::put(supply);
        Balances::<T>::insert(to, balance);
        Self::emit(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    pub(crate) fn internal_burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        let balance = Balances::<T>::get(from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        let supply = TotalSupply::<T>::get()
            .checked_sub(amount)
            .ok_or(Error::<T>::ArithmeticFault)?;

        Balances::<T>::insert(from, balance);
        TotalSupply::<T>::put(supply);
        Self::emit(Event::Burned { account: from.clone(), amount });
        Ok(())
    }

    /// Drop the ledger entry of `who`, taking whatever it held out of the supply.
    ///
    /// Returns the balance the entry held. No `Burned` event: the caller reports the closure.
    pub(crate) fn remove_ledger_entry(who: &T::AccountId) -> Result<u128, DispatchError> {
        let balance = Balances::<T>::get(who);
        let supply = TotalSupply::<T>::get()
            .checked_sub(balance)
            .ok_or(Error::<T>::ArithmeticFault)?;

        Balances::<T>::remove(who);
        TotalSupply::<T>::put(supply);
        Ok(balance)
    }
}

impl<T: Config> FungibleLedger<T::AccountId> for Pallet<T> {
    fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    fn total_supply() -> u128 {
        TotalSupply::<T>::get()
    }

    fn is_registered(who: &T::AccountId) -> bool {
        Pallet::<T>::is_registered(who)
    }

    fn transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::internal_transfer(from, to, amount, None)
    }

    fn mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::internal_mint(to, amount)
    }

    fn burn(from: &T::AccountId, amount: u128) -> DispatchResult {
        Self::internal_burn(from, amount)
    }
}
