use frame_support::{dispatch::DispatchResult, weights::Weight};
use sp_runtime::DispatchError;

/// Ledger operations other pallets may use.
///
/// This is the only way code outside the pallet moves, creates or destroys tokens.
pub trait FungibleLedger<AccountId> {
    /// Balance of `who`, zero when unregistered.
    fn balance_of(who: &AccountId) -> u128;

    fn total_supply() -> u128;

    fn is_registered(who: &AccountId) -> bool;

    fn transfer(from: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;

    fn mint(to: &AccountId, amount: u128) -> DispatchResult;

    fn burn(from: &AccountId, amount: u128) -> DispatchResult;
}

/// Receiving side of `ft_transfer_call`.
pub trait TransferReceiver<AccountId> {
    /// Weight `on_transfer` needs for this notification.
    fn notification_weight(receiver: &AccountId, msg: &[u8]) -> Weight;

    /// Handle `amount` tokens already credited to `receiver` by `sender`.
    ///
    /// Returns how much of `amount` the receiver keeps; the rest goes back to the sender.
    /// An error reverses the whole transfer and discards every change made here.
    fn on_transfer(
        receiver: &AccountId,
        sender: &AccountId,
        amount: u128,
        msg: &[u8],
    ) -> Result<u128, DispatchError>;
}

/// No receivers: every notification fails and the transfer is reversed.
impl<AccountId> TransferReceiver<AccountId> for () {
    fn notification_weight(_receiver: &AccountId, _msg: &[u8]) -> Weight {
        Weight::zero()
    }

    fn on_transfer(
        _receiver: &AccountId,
        _sender: &AccountId,
        _amount: u128,
        _msg: &[u8],
    ) -> Result<u128, DispatchError> {
        Err(DispatchError::CannotLookup)
    }
}
