//! Weights for pallet-fungible-token.
//!
//! Estimates until the benchmarks in `benchmarking.rs` are run against a reference machine.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn storage_deposit() -> Weight;
    fn storage_unregister() -> Weight;
    fn ft_transfer() -> Weight;
    fn ft_transfer_call() -> Weight;
    fn mint() -> Weight;
    fn resolve_transfer() -> Weight;
}

/// Weights using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `FungibleToken::StorageDeposits` (r:1 w:1)
    /// Storage: `System::Account` (r:2 w:2)
    fn storage_deposit() -> Weight {
        Weight::from_parts(45_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `FungibleToken::StorageDeposits` (r:1 w:1)
    /// Storage: `FungibleToken::Balances` (r:1 w:1)
    /// Storage: `FungibleToken::TotalSupply` (r:1 w:1)
    /// Storage: `System::Account` (r:2 w:2)
    fn storage_unregister() -> Weight {
        Weight::from_parts(60_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(5_u64))
    }
    /// Storage: `FungibleToken::StorageDeposits` (r:2 w:0)
    /// Storage: `FungibleToken::Balances` (r:2 w:2)
    /// Storage: `System::Account` (r:2 w:2)
    fn ft_transfer() -> Weight {
        Weight::from_parts(50_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(4_u64))
    }
    /// Storage: `FungibleToken::PendingTransferCalls` (r:1 w:1)
    /// Storage: `FungibleToken::NextTransferCallId` (r:1 w:1)
    /// Storage: `FungibleToken::StorageDeposits` (r:2 w:0)
    /// Storage: `FungibleToken::Balances` (r:2 w:2)
    /// Storage: `System::Account` (r:2 w:2)
    fn ft_transfer_call() -> Weight {
        Weight::from_parts(70_000_000, 12_000)
            .saturating_add(T::DbWeight::get().reads(8_u64))
            .saturating_add(T::DbWeight::get().writes(6_u64))
    }
    /// Storage: `FungibleToken::StorageDeposits` (r:1 w:0)
    /// Storage: `FungibleToken::Balances` (r:1 w:1)
    /// Storage: `FungibleToken::TotalSupply` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(25_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `FungibleToken::StorageDeposits` (r:3 w:0)
    /// Storage: `FungibleToken::Balances` (r:3 w:2)
    /// Storage: `FungibleToken::TotalSupply` (r:1 w:1)
    fn resolve_transfer() -> Weight {
        Weight::from_parts(40_000_000, 6_200)
            .saturating_add(T::DbWeight::get().reads(7_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn storage_deposit() -> Weight {
        Weight::from_parts(45_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn storage_unregister() -> Weight {
        Weight::from_parts(60_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(5_u64))
    }
    fn ft_transfer() -> Weight {
        Weight::from_parts(50_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(4_u64))
    }
    fn ft_transfer_call() -> Weight {
        Weight::from_parts(70_000_000, 12_000)
            .saturating_add(RocksDbWeight::get().reads(8_u64))
            .saturating_add(RocksDbWeight::get().writes(6_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(25_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn resolve_transfer() -> Weight {
        Weight::from_parts(40_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(7_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
}
