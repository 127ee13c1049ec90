//! Storage migrations for pallet-fungible-token.
//!
//! Each migration checks the on-chain storage version first, so running it twice is harmless.
//! Wire them into the runtime's `Executive` migration tuple, oldest first:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_fungible_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_runtime::traits::Zero;
use sp_std::marker::PhantomData;

use crate::{BalanceOf, Balances, Config, Pallet, StorageDeposits, LOG_TARGET};

/// Version 0 kept balances without a storage registrar.
///
/// Every account already holding tokens is registered with a zero deposit, the same way genesis
/// registers the owner, so that it can keep sending and receiving. The escrow account gets the
/// existential deposit it would have received at genesis.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                let mut holders: u64 = 0;
                let mut registered: u64 = 0;
                for (account, balance) in Balances::<T>::iter() {
                    holders += 1;
                    if balance > 0 && !StorageDeposits::<T>::contains_key(&account) {
                        StorageDeposits::<T>::insert(&account, BalanceOf::<T>::zero());
                        registered += 1;
                    }
                }

                let seeded = Pallet::<T>::seed_pallet_account();

                StorageVersion::new(1).put::<Pallet<T>>();
                log::info!(
                    target: LOG_TARGET,
                    "Migrated storage to v1, registered {registered} of {holders} holders, \
                     escrow seeded: {seeded}"
                );

                T::DbWeight::get().reads_writes(
                    2 + holders.saturating_mul(2),
                    registered.saturating_add(if seeded { 2 } else { 1 }),
                )
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            let supply = crate::TotalSupply::<T>::get();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {on_chain_version:?}, supply {supply}"
            );
            Ok((on_chain_version, supply).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (pre_version, pre_supply): (StorageVersion, u128) =
                Decode::decode(&mut &state[..])
                    .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }
            ensure!(
                crate::TotalSupply::<T>::get() == pre_supply,
                sp_runtime::TryRuntimeError::Other("Migration changed the total supply")
            );
            ensure!(
                Balances::<T>::iter()
                    .all(|(account, balance)| balance == 0
                        || StorageDeposits::<T>::contains_key(&account)),
                sp_runtime::TryRuntimeError::Other("A token holder is still unregistered")
            );
            use frame_support::traits::fungible::Inspect;
            ensure!(
                T::NativeBalance::balance(&Pallet::<T>::account_id()) >=
                    T::NativeBalance::minimum_balance(),
                sp_runtime::TryRuntimeError::Other("Escrow account below the existential deposit")
            );
            Ok(())
        }
    }
}
