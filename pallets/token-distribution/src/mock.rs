use crate as pallet_token_distribution;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, OnFinalize},
    weights::Weight,
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Both pallets wired together: the distribution pallet is the ledger's receiver.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        FungibleToken: pallet_fungible_token,
        TokenDistribution: pallet_token_distribution,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = pallet_balances::AccountData<u64>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type AccountStore = System;
}

pub const ADMIN: u64 = 1;
/// Holds the initial supply ("root" of the token).
pub const OWNER: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
pub const DAVE: u64 = 5;

pub const INITIAL_SUPPLY: u128 = 10_000;
pub const NATIVE_ENDOWMENT: u64 = 10_000;
pub const STORAGE_COST: u64 = 125;

pub const GAS: Weight = Weight::from_parts(150_000_000_000, 1024 * 1024);

parameter_types! {
    pub const AdminAccount: u64 = ADMIN;
    pub const FungibleTokenPalletId: PalletId = PalletId(*b"py/fungt");
    pub const TokenDistributionPalletId: PalletId = PalletId(*b"py/distr");
    pub const GasForResolveTransfer: Weight = Weight::from_parts(10_000_000_000, 64 * 1024);
}

pub struct EnsureAdmin;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAdmin {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == AdminAccount::get() => {
                Ok(account)
            },
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(AdminAccount::get()))
    }
}

impl pallet_fungible_token::Config for Test {
    type NativeBalance = Balances;
    type AdminOrigin = EnsureAdmin;
    type Receiver = TokenDistribution;
    type PalletId = FungibleTokenPalletId;
    type StorageByteCost = ConstU64<{ STORAGE_COST }>;
    type GasForResolveTransfer = GasForResolveTransfer;
    type MaxMemoLength = ConstU32<32>;
    type MaxMessageLength = ConstU32<64>;
    type MaxPendingTransferCalls = ConstU32<8>;
    type WeightInfo = ();
}

impl pallet_token_distribution::Config for Test {
    type Ledger = FungibleToken;
    type AdminOrigin = EnsureAdmin;
    type PalletId = TokenDistributionPalletId;
    type MaxWallets = ConstU32<4>;
    type WeightInfo = ();
}

/// Account of the distribution pallet.
pub fn distribution() -> u64 {
    TokenDistribution::account_id()
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![
            (ADMIN, NATIVE_ENDOWMENT),
            (OWNER, NATIVE_ENDOWMENT),
            (BOB, NATIVE_ENDOWMENT),
            (CHARLIE, NATIVE_ENDOWMENT),
        ],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_fungible_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        total_supply: INITIAL_SUPPLY,
        token_name: b"Example Token".to_vec(),
        token_symbol: b"EXT".to_vec(),
        decimals: 24,
        registered_accounts: vec![distribution(), BOB],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_token_distribution::GenesisConfig::<Test> { wallets: vec![BOB] }
        .assimilate_storage(&mut t)
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// End the current block: queued transfer calls are notified and resolved.
pub fn finalize_block() {
    FungibleToken::on_finalize(System::block_number());
}

/// Log lines of the ledger events deposited so far, in order.
pub fn log_lines() -> Vec<String> {
    System::events()
        .into_iter()
        .filter_map(|record| match record.event {
            RuntimeEvent::FungibleToken(event) => event.log_line(),
            _ => None,
        })
        .collect()
}
