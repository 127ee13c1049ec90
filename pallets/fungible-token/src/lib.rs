#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated storage getters until the accessors are migrated
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Fungible Token Pallet
//!
//! A fungible-token ledger made of three parts:
//!
//! - **Storage registrar**: accounts prepay a fixed storage deposit before they can hold a
//!   balance. Closing an account refunds the deposit and, when forced, burns what is left.
//! - **Balance ledger**: per-account balances and a total-supply counter. Every mutation is
//!   checked and either applies completely or not at all.
//! - **Transfer-and-call**: `ft_transfer_call` moves tokens to a receiver immediately and queues
//!   a notification. At the end of the block the receiver is notified and the resolution step
//!   refunds whatever the receiver did not use, or everything when the receiver failed.

extern crate alloc;

use alloc::{format, string::String};
use codec::DecodeWithMemTracking;
use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{fungible, tokens::Preservation, EnsureOrigin},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::{AccountIdConversion, One, Zero};
use sp_std::prelude::*;

pub use pallet::*;
pub use traits::{FungibleLedger, TransferReceiver};
pub use transfer_call::{Settlement, TransferCallRequest};
pub use weights::WeightInfo;

mod ledger;
pub mod migrations;
mod registrar;
mod traits;
mod transfer_call;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::fungible-token";

/// Native currency amount, used for storage deposits and the one-unit call guard.
pub type BalanceOf<T> = <<T as Config>::NativeBalance as fungible::Inspect<
    <T as frame_system::Config>::AccountId,
>>::Balance;

/// What `storage_unregister` does with an account that still holds tokens.
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    Clone,
    Copy,
    PartialEq,
    Eq,
    RuntimeDebug,
)]
pub enum Closure {
    /// Refuse to close an account with a positive balance.
    RejectIfFunded,
    /// Burn the remaining balance and close the account.
    BurnRemaining,
}

impl From<bool> for Closure {
    fn from(force: bool) -> Self {
        if force {
            Closure::BurnRemaining
        } else {
            Closure::RejectIfFunded
        }
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Native currency paying for storage deposits and call guards.
        type NativeBalance: fungible::Mutate<Self::AccountId>;

        /// Origin allowed to mint new tokens.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Notified of every `ft_transfer_call`.
        type Receiver: TransferReceiver<Self::AccountId>;

        /// Account escrowing storage deposits.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Deposit required to register one ledger entry.
        #[pallet::constant]
        type StorageByteCost: Get<BalanceOf<Self>>;

        /// Weight reserved out of the caller's gas for the resolution step.
        #[pallet::constant]
        type GasForResolveTransfer: Get<Weight>;

        #[pallet::constant]
        type MaxMemoLength: Get<u32>;

        #[pallet::constant]
        type MaxMessageLength: Get<u32>;

        /// Transfer calls that can wait for settlement at once.
        #[pallet::constant]
        type MaxPendingTransferCalls: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Example Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "EXT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equals the sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Escrowed storage deposit of every registered account.
    ///
    /// Presence of an entry is what makes an account registered; genesis accounts are
    /// registered with a zero deposit.
    #[pallet::storage]
    #[pallet::getter(fn storage_deposit_of)]
    pub type StorageDeposits<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, BalanceOf<T>, OptionQuery>;

    /// Transfer calls whose receiver has not been notified yet, in arrival order.
    #[pallet::storage]
    pub type PendingTransferCalls<T: Config> = StorageValue<
        _,
        BoundedVec<TransferCallRequest<T>, T::MaxPendingTransferCalls>,
        ValueQuery,
    >;

    #[pallet::storage]
    pub type NextTransferCallId<T> = StorageValue<_, u64, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Storage deposit handled. `refunded` is the part of the attached deposit not taken.
        StorageDeposited {
            payer: T::AccountId,
            account: T::AccountId,
            charged: BalanceOf<T>,
            refunded: BalanceOf<T>,
        },
        /// Account unregistered; `balance` is what it held at closure.
        AccountClosed { account: T::AccountId, balance: u128 },
        /// Unregister requested for an account that is not registered.
        AccountNotClosed { account: T::AccountId },
        Transferred {
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
            memo: Option<BoundedVec<u8, T::MaxMemoLength>>,
        },
        Minted { to: T::AccountId, amount: u128 },
        Burned { account: T::AccountId, amount: u128 },
        /// Tokens moved to the receiver; its notification is queued.
        TransferCallInitiated { id: u64, sender: T::AccountId, receiver: T::AccountId, amount: u128 },
        /// The sender closed its account before the transfer call settled.
        SenderAccountDeleted { id: u64, sender: T::AccountId },
        /// The receiver accepted the transfer. `used` is the amount it kept.
        TransferCallSettled {
            id: u64,
            sender: T::AccountId,
            receiver: T::AccountId,
            amount: u128,
            used: u128,
            refunded: u128,
            burned: u128,
        },
        /// The receiver failed and the transfer was reversed.
        TransferCallReverted {
            id: u64,
            sender: T::AccountId,
            receiver: T::AccountId,
            amount: u128,
            refunded: u128,
            burned: u128,
            error: DispatchError,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Attached deposit does not cover the storage cost.
        InsufficientDeposit,
        /// Account still holds tokens and closure was not forced.
        PositiveBalanceNotForced,
        AccountNotRegistered,
        InsufficientBalance,
        /// Sender and receiver are the same account.
        SelfTransfer,
        ZeroAmount,
        /// Balance or supply arithmetic overflowed.
        ArithmeticFault,
        /// Exactly one minimal unit must be attached.
        RequiresOneUnit,
        /// Gas does not cover the resolution reservation.
        InsufficientGas,
        /// The receiver notification needs more weight than it was given.
        ReceiverOutOfGas,
        TooManyPendingTransferCalls,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn on_finalize(_n: BlockNumberFor<T>) {
            Self::process_transfer_calls();
        }

        fn integrity_test() {
            assert!(
                T::GasForResolveTransfer::get().all_gte(T::WeightInfo::resolve_transfer()),
                "GasForResolveTransfer must cover the resolution weight"
            );
            assert!(
                T::StorageByteCost::get() >=
                    <T::NativeBalance as fungible::Inspect<_>>::minimum_balance(),
                "StorageByteCost must not be below the existential deposit"
            );
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Register `account_id` (the caller by default) on the ledger.
        ///
        /// Only the storage cost is taken from `deposit`; a repeated registration takes nothing.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::storage_deposit())]
        pub fn storage_deposit(
            origin: OriginFor<T>,
            account_id: Option<T::AccountId>,
            deposit: BalanceOf<T>,
        ) -> DispatchResult {
            let payer = ensure_signed(origin)?;
            let account = account_id.unwrap_or_else(|| payer.clone());
            Self::register_account(&payer, &account, deposit)
        }

        /// Close the caller's ledger entry and refund its storage deposit.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::storage_unregister())]
        pub fn storage_unregister(
            origin: OriginFor<T>,
            closure: Closure,
            deposit: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_one_unit(deposit)?;
            Self::unregister_account(&who, closure)?;
            Self::collect_one_unit(&who, deposit)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::ft_transfer())]
        pub fn ft_transfer(
            origin: OriginFor<T>,
            receiver_id: T::AccountId,
            amount: u128,
            memo: Option<BoundedVec<u8, T::MaxMemoLength>>,
            deposit: BalanceOf<T>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_one_unit(deposit)?;
            Self::internal_transfer(&sender, &receiver_id, amount, memo)?;
            Self::collect_one_unit(&sender, deposit)
        }

        /// Transfer to `receiver_id` and notify it with `msg`.
        ///
        /// The transfer happens right away. The notification and its resolution run at the end
        /// of the block within `gas`, of which `GasForResolveTransfer` is kept for the
        /// resolution. The outcome is reported by `TransferCallSettled` or
        /// `TransferCallReverted`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::ft_transfer_call().saturating_add(*gas))]
        pub fn ft_transfer_call(
            origin: OriginFor<T>,
            receiver_id: T::AccountId,
            amount: u128,
            memo: Option<BoundedVec<u8, T::MaxMemoLength>>,
            msg: BoundedVec<u8, T::MaxMessageLength>,
            gas: Weight,
            deposit: BalanceOf<T>,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_one_unit(deposit)?;
            Self::initiate_transfer_call(sender.clone(), receiver_id, amount, memo, msg, gas)?;
            Self::collect_one_unit(&sender, deposit)
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::internal_mint(&to, amount)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Receives the whole initial supply (registered without a deposit)
        pub owner: Option<T::AccountId>,
        pub total_supply: u128,
        pub token_name: Vec<u8>,
        pub token_symbol: Vec<u8>,
        pub decimals: u8,
        /// Accounts registered without a deposit
        pub registered_accounts: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            Pallet::<T>::seed_pallet_account();

            for account in &self.registered_accounts {
                StorageDeposits::<T>::insert(account, BalanceOf::<T>::zero());
            }

            match &self.owner {
                Some(owner) => {
                    StorageDeposits::<T>::insert(owner, BalanceOf::<T>::zero());
                    Balances::<T>::insert(owner, self.total_supply);
                    TotalSupply::<T>::put(self.total_supply);
                },
                None => assert!(self.total_supply == 0, "Initial supply requires an owner"),
            }
        }
    }
}

impl<T: Config> Event<T> {
    /// Text line an off-chain observer sees for this event, if it has one.
    ///
    /// Accounts are rendered with their `Debug` form: a bare number for `u64` ids, the SS58
    /// address followed by a short hex suffix for `AccountId32`. Indexers matching these lines
    /// must key on the runtime's `AccountId` type.
    pub fn log_line(&self) -> Option<String> {
        match self {
            Event::AccountClosed { account, balance } => {
                Some(format!("Closed @{account:?} with {balance}"))
            },
            Event::AccountNotClosed { account } => {
                Some(format!("The account {account:?} is not registered"))
            },
            Event::Burned { account, amount } => Some(format!("Account @{account:?} burned {amount}")),
            Event::SenderAccountDeleted { .. } => {
                Some(String::from("The account of the sender was deleted"))
            },
            _ => None,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Deposit `event`, logging its text line first.
    pub(crate) fn emit(event: Event<T>) {
        if let Some(line) = event.log_line() {
            log::info!(target: LOG_TARGET, "{line}");
        }
        Self::deposit_event(event);
    }

    /// Guarded calls carry exactly one minimal unit.
    pub(crate) fn ensure_one_unit(deposit: BalanceOf<T>) -> DispatchResult {
        ensure!(deposit == BalanceOf::<T>::one(), Error::<T>::RequiresOneUnit);
        Ok(())
    }

    /// Take the unit attached to a guarded call once the call has gone through.
    pub(crate) fn collect_one_unit(who: &T::AccountId, deposit: BalanceOf<T>) -> DispatchResult {
        <T::NativeBalance as fungible::Mutate<_>>::transfer(
            who,
            &Self::account_id(),
            deposit,
            Preservation::Preserve,
        )?;
        Ok(())
    }

    /// Account escrowing storage deposits.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Top the escrow account up to the existential deposit so that deposits and call guards
    /// below that amount can land in it. Refunds never take it below this floor.
    ///
    /// Returns whether anything was minted.
    pub(crate) fn seed_pallet_account() -> bool {
        let account = Self::account_id();
        let minimum = <T::NativeBalance as fungible::Inspect<_>>::minimum_balance();
        if <T::NativeBalance as fungible::Inspect<_>>::balance(&account) >= minimum {
            return false;
        }
        <T::NativeBalance as fungible::Mutate<_>>::set_balance(&account, minimum);
        true
    }
}
