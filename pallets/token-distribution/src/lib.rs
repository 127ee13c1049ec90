#![cfg_attr(not(feature = "std"), no_std)]

//! # Token Distribution Pallet
//!
//! Receiver of `ft_transfer_call` notifications from `pallet-fungible-token`.
//!
//! The notification message is a decimal amount: the pallet burns that much (at most what it
//! was sent) out of its own token balance and keeps the whole transfer. It also keeps a
//! whitelist of wallets that an admin can pay out to from the tokens it holds.

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, Get},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_fungible_token::{FungibleLedger, TransferReceiver};
use sp_runtime::{traits::AccountIdConversion, DispatchError};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


pub const LOG_TARGET: &str = "runtime::token-distribution";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Token ledger this pallet receives from and pays out of.
        type Ledger: FungibleLedger<Self::AccountId>;

        /// Origin allowed to distribute tokens to the whitelist.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Derives the account that holds the pallet's tokens.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        #[pallet::constant]
        type MaxWallets: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Whitelisted wallets in the order they were first stored.
    #[pallet::storage]
    pub type WhitelistedWallets<T: Config> =
        StorageValue<_, BoundedVec<T::AccountId, T::MaxWallets>, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// `added` wallets were new to the whitelist.
        WalletsStored { added: u32 },
        /// A transfer call from `sender` was accepted and `burned` of its `amount` destroyed.
        TransferBurned { sender: T::AccountId, amount: u128, burned: u128 },
        TokensDistributed { wallet: T::AccountId, amount: u128 },
        DistributionFailed { wallet: T::AccountId, error: DispatchError },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The notification message is not a decimal amount.
        MessageParseFault,
        /// Notification addressed to an account other than this pallet's.
        UnknownReceiver,
        TooManyWallets,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Add `wallets` to the whitelist, skipping the ones already on it.
        ///
        /// Either every new wallet fits or none is stored.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::store_wallets(wallets.len() as u32))]
        pub fn store_wallets(
            origin: OriginFor<T>,
            wallets: BoundedVec<T::AccountId, T::MaxWallets>,
        ) -> DispatchResult {
            ensure_signed(origin)?;
            let added = Self::insert_wallets(wallets.into_inner())?;
            Self::deposit_event(Event::WalletsStored { added });
            Ok(())
        }

        /// Pay `amount_per_wallet` to every whitelisted wallet.
        ///
        /// A payment that fails is reported and skipped; the others still go through.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::distribute_tokens(T::MaxWallets::get()))]
        pub fn distribute_tokens(origin: OriginFor<T>, amount_per_wallet: u128) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            let source = Self::account_id();

            for wallet in WhitelistedWallets::<T>::get() {
                match T::Ledger::transfer(&source, &wallet, amount_per_wallet) {
                    Ok(()) => Self::deposit_event(Event::TokensDistributed {
                        wallet,
                        amount: amount_per_wallet,
                    }),
                    Err(error) => {
                        log::warn!(
                            target: LOG_TARGET,
                            "distribution to {wallet:?} failed: {error:?}"
                        );
                        Self::deposit_event(Event::DistributionFailed { wallet, error });
                    },
                }
            }
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub wallets: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            Pallet::<T>::insert_wallets(self.wallets.clone()).expect("Too many genesis wallets");
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding the tokens this pallet receives.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn get_whitelisted_wallets() -> Vec<T::AccountId> {
        WhitelistedWallets::<T>::get().into_inner()
    }

    /// Append the wallets not yet whitelisted, in first-seen order. Returns how many were new.
    fn insert_wallets(wallets: Vec<T::AccountId>) -> Result<u32, DispatchError> {
        WhitelistedWallets::<T>::try_mutate(|stored| {
            let mut added = 0u32;
            for wallet in wallets {
                if !stored.contains(&wallet) {
                    stored.try_push(wallet).map_err(|_| Error::<T>::TooManyWallets)?;
                    added += 1;
                }
            }
            Ok(added)
        })
    }

    fn parse_amount(msg: &[u8]) -> Option<u128> {
        core::str::from_utf8(msg).ok()?.parse().ok()
    }
}

impl<T: Config> TransferReceiver<T::AccountId> for Pallet<T> {
    fn notification_weight(_receiver: &T::AccountId, _msg: &[u8]) -> Weight {
        T::WeightInfo::on_transfer()
    }

    fn on_transfer(
        receiver: &T::AccountId,
        sender: &T::AccountId,
        amount: u128,
        msg: &[u8],
    ) -> Result<u128, DispatchError> {
        ensure!(*receiver == Self::account_id(), Error::<T>::UnknownReceiver);
        let requested = Self::parse_amount(msg).ok_or(Error::<T>::MessageParseFault)?;

        // A zero burn still goes through the ledger so observers see the burn line.
        let burned = requested.min(amount);
        T::Ledger::burn(receiver, burned)?;
        log::debug!(target: LOG_TARGET, "accepted {amount} from {sender:?}, burned {burned}");

        Self::deposit_event(Event::TransferBurned { sender: sender.clone(), amount, burned });
        Ok(amount)
    }
}
