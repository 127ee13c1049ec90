//! Estimated weights for pallet-token-distribution.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn store_wallets(n: u32) -> Weight;
    fn distribute_tokens(n: u32) -> Weight;
    fn on_transfer() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `TokenDistribution::WhitelistedWallets` (r:1 w:1)
    /// The range of component `n` is `[1, 64]`.
    fn store_wallets(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(Weight::from_parts(400_000, 32).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenDistribution::WhitelistedWallets` (r:1 w:0)
    /// Storage: `FungibleToken::StorageDeposits` (r:n+1 w:0)
    /// Storage: `FungibleToken::Balances` (r:n+1 w:n+1)
    /// The range of component `n` is `[1, 64]`.
    fn distribute_tokens(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(Weight::from_parts(30_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes(1_u64))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    /// Storage: `FungibleToken::Balances` (r:1 w:1)
    /// Storage: `FungibleToken::TotalSupply` (r:1 w:1)
    fn on_transfer() -> Weight {
        Weight::from_parts(20_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn store_wallets(n: u32) -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(Weight::from_parts(400_000, 32).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn distribute_tokens(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 1_500)
            .saturating_add(Weight::from_parts(30_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().reads((3_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn on_transfer() -> Weight {
        Weight::from_parts(20_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
