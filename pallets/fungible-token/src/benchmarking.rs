//! Benchmarking setup for pallet-fungible-token

use super::*;

#[allow(unused)]
use crate::Pallet as FungibleToken;
use alloc::vec;
use frame_benchmarking::v2::*;
use frame_support::traits::fungible::Mutate;
use frame_system::RawOrigin;
use sp_runtime::Saturating;

/// Give `who` plenty of native currency for deposits and call guards.
fn fund<T: Config>(who: &T::AccountId) {
    let amount = T::StorageByteCost::get().saturating_mul(1_000u32.into());
    T::NativeBalance::set_balance(who, amount);
}

/// Register `who` and credit it `amount` tokens.
fn holder<T: Config>(who: &T::AccountId, amount: u128) {
    StorageDeposits::<T>::insert(who, BalanceOf::<T>::zero());
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn storage_deposit() {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        fund::<T>(&FungibleToken::<T>::account_id());
        let deposit = T::StorageByteCost::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), None, deposit);

        assert!(FungibleToken::<T>::is_registered(&caller));
    }

    #[benchmark]
    fn storage_unregister() {
        let caller: T::AccountId = whitelisted_caller();
        fund::<T>(&caller);
        fund::<T>(&FungibleToken::<T>::account_id());
        holder::<T>(&caller, 1_000_000);
        StorageDeposits::<T>::insert(&caller, T::StorageByteCost::get());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Closure::BurnRemaining, BalanceOf::<T>::one());

        assert!(!FungibleToken::<T>::is_registered(&caller));
    }

    #[benchmark]
    fn ft_transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&caller);
        fund::<T>(&FungibleToken::<T>::account_id());
        holder::<T>(&caller, 10_000_000);
        holder::<T>(&recipient, 0);
        let memo: BoundedVec<u8, T::MaxMemoLength> =
            vec![0u8; T::MaxMemoLength::get() as usize].try_into().expect("memo fits");

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller.clone()),
            recipient.clone(),
            1_000_000,
            Some(memo),
            BalanceOf::<T>::one(),
        );

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn ft_transfer_call() {
        let caller: T::AccountId = whitelisted_caller();
        let receiver: T::AccountId = account("receiver", 0, 0);
        fund::<T>(&caller);
        fund::<T>(&FungibleToken::<T>::account_id());
        holder::<T>(&caller, 10_000_000);
        holder::<T>(&receiver, 0);
        let msg: BoundedVec<u8, T::MaxMessageLength> =
            vec![b'1'; T::MaxMessageLength::get() as usize].try_into().expect("msg fits");

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller.clone()),
            receiver.clone(),
            1_000_000,
            None,
            msg,
            T::GasForResolveTransfer::get(),
            BalanceOf::<T>::one(),
        );

        assert_eq!(PendingTransferCalls::<T>::get().len(), 1);
    }

    #[benchmark]
    fn mint() {
        let recipient: T::AccountId = account("recipient", 0, 0);
        holder::<T>(&recipient, 0);
        let amount: u128 = 1_000_000;
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    /// Worst case: a failed notification, everything refunded to a registered sender.
    #[benchmark]
    fn resolve_transfer() {
        let sender: T::AccountId = account("sender", 0, 0);
        let receiver: T::AccountId = account("receiver", 0, 0);
        holder::<T>(&sender, 0);
        holder::<T>(&receiver, 1_000_000);

        #[block]
        {
            FungibleToken::<T>::resolve_transfer(
                0,
                &sender,
                &receiver,
                1_000_000,
                Err(sp_runtime::DispatchError::Other("benchmark")),
            )
            .expect("resolution succeeds");
        }

        assert_eq!(Balances::<T>::get(&sender), 1_000_000);
    }

    impl_benchmark_test_suite!(FungibleToken, crate::mock::new_test_ext(), crate::mock::Test);
}
