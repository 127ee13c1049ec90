use crate as pallet_fungible_token;
use crate::{FungibleLedger, TransferReceiver};
use frame_support::{
    derive_impl, ensure, parameter_types,
    traits::{ConstU32, ConstU64, OnFinalize},
    weights::Weight,
    PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        FungibleToken: pallet_fungible_token,
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
    type ExistentialDeposit = ConstU64<{ EXISTENTIAL_DEPOSIT }>;
}

pub const ADMIN: u64 = 1;
pub const OWNER: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
/// Registered at genesis without a deposit.
pub const DAVE: u64 = 5;
/// Account driven by [`MockReceiver`].
pub const DEFI: u64 = 100;

pub const INITIAL_SUPPLY: u128 = 10_000;
pub const NATIVE_ENDOWMENT: u64 = 10_000;
pub const STORAGE_COST: u64 = 125;
/// Above the one-unit call guard, so guards only land in a live escrow account.
pub const EXISTENTIAL_DEPOSIT: u64 = 10;

/// Gas attached to transfer calls in tests.
pub const GAS: Weight = Weight::from_parts(150_000_000_000, 1024 * 1024);

parameter_types! {
    pub const AdminAccount: u64 = ADMIN;
    pub const FungibleTokenPalletId: PalletId = PalletId(*b"py/fungt");
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

/// Receiver whose behaviour is scripted by the message:
///
/// - `take-my-money`: keeps everything
/// - `return:<n>`: hands `n` back
/// - `spend:<n>`: gives `n` away to [`BOB`], then asks for everything back
/// - `overreport`: claims twice the amount
/// - `mint-then-fail`: mints to itself, then fails
/// - `expensive`: needs more weight than any test attaches
///
/// Anything else fails. Only [`DEFI`] accepts notifications.
pub struct MockReceiver;

impl TransferReceiver<u64> for MockReceiver {
    fn notification_weight(_receiver: &u64, msg: &[u8]) -> Weight {
        if msg == b"expensive" {
            Weight::from_parts(500_000_000_000, 0)
        } else {
            Weight::from_parts(1_000_000_000, 0)
        }
    }

    fn on_transfer(
        receiver: &u64,
        _sender: &u64,
        amount: u128,
        msg: &[u8],
    ) -> Result<u128, DispatchError> {
        ensure!(*receiver == DEFI, DispatchError::CannotLookup);
        let msg = core::str::from_utf8(msg).map_err(|_| DispatchError::Other("not utf-8"))?;
        let number = |digits: &str| {
            digits.parse::<u128>().map_err(|_| DispatchError::Other("not a number"))
        };

        if msg == "take-my-money" {
            Ok(amount)
        } else if let Some(digits) = msg.strip_prefix("return:") {
            Ok(amount.saturating_sub(number(digits)?))
        } else if let Some(digits) = msg.strip_prefix("spend:") {
            <FungibleToken as FungibleLedger<u64>>::transfer(&DEFI, &BOB, number(digits)?)?;
            Ok(0)
        } else if msg == "overreport" {
            Ok(amount.saturating_mul(2))
        } else if msg == "mint-then-fail" {
            <FungibleToken as FungibleLedger<u64>>::mint(&DEFI, 5)?;
            Err(DispatchError::Other("receiver failed"))
        } else {
            Err(DispatchError::Other("unknown message"))
        }
    }
}

impl pallet_fungible_token::Config for Test {
    type NativeBalance = Balances;
    type AdminOrigin = EnsureAdmin;
    type Receiver = MockReceiver;
    type PalletId = FungibleTokenPalletId;
    type StorageByteCost = ConstU64<{ STORAGE_COST }>;
    type GasForResolveTransfer = GasForResolveTransfer;
    type MaxMemoLength = ConstU32<32>;
    type MaxMessageLength = ConstU32<64>;
    type MaxPendingTransferCalls = ConstU32<4>;
    type WeightInfo = ();
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
        registered_accounts: vec![DAVE],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Register `who` on the ledger, paid by the admin.
pub fn register(who: u64) {
    FungibleToken::storage_deposit(RuntimeOrigin::signed(ADMIN), Some(who), STORAGE_COST)
        .expect("registration succeeds");
}

/// End the current block: queued transfer calls are notified and resolved.
pub fn finalize_block() {
    FungibleToken::on_finalize(System::block_number());
}

/// Log lines of all events deposited so far, in order.
pub fn log_lines() -> Vec<String> {
    System::events()
        .into_iter()
        .filter_map(|record| match record.event {
            RuntimeEvent::FungibleToken(event) => event.log_line(),
            _ => None,
        })
        .collect()
}

/// Native balance of the escrow account.
pub fn escrow_balance() -> u64 {
    Balances::free_balance(FungibleToken::account_id())
}

/// Sum of every ledger balance.
pub fn sum_of_balances() -> u128 {
    crate::Balances::<Test>::iter_values().sum()
}
