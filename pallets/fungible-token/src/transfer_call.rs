//! Transfer-and-call orchestration.
//!
//! A transfer call goes through three steps, each a separate entry point sharing only ledger
//! state and the queued request:
//!
//! 1. `initiate_transfer_call` (from the extrinsic) moves the tokens and queues a
//!    [`TransferCallRequest`].
//! 2. `process_transfer_calls` (from `on_finalize`) takes each request out of the queue and
//!    notifies the receiver inside its own storage layer.
//! 3. `resolve_transfer` gets the request's parameters and the receiver's outcome, refunds what
//!    was not used and reports the settlement.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
    ensure,
    pallet_prelude::*,
    storage::with_storage_layer,
    CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use scale_info::TypeInfo;
use sp_runtime::DispatchError;

use crate::{
    Config, Error, Event, NextTransferCallId, Pallet, PendingTransferCalls, TransferReceiver,
    LOG_TARGET,
};

/// A transfer call waiting for its receiver to be notified.
#[derive(
    Encode,
    Decode,
    MaxEncodedLen,
    TypeInfo,
    CloneNoBound,
    PartialEqNoBound,
    EqNoBound,
    RuntimeDebugNoBound,
)]
#[scale_info(skip_type_params(T))]
#[codec(mel_bound())]
pub struct TransferCallRequest<T: Config> {
    pub id: u64,
    pub sender: T::AccountId,
    pub receiver: T::AccountId,
    pub amount: u128,
    pub msg: BoundedVec<u8, T::MaxMessageLength>,
    /// Total gas given by the caller, resolution reservation included.
    pub gas: Weight,
}

/// How a transfer call ended.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum Settlement {
    /// The receiver kept `used`; `refunded` went back to the sender and `burned` was destroyed
    /// because the sender no longer had an account.
    Settled { used: u128, refunded: u128, burned: u128 },
    /// The receiver failed with `error`.
    Reverted { refunded: u128, burned: u128, error: DispatchError },
}

impl<T: Config> Pallet<T> {
    /// Transfer `amount` to `receiver` and queue its notification.
    pub(crate) fn initiate_transfer_call(
        sender: T::AccountId,
        receiver: T::AccountId,
        amount: u128,
        memo: Option<BoundedVec<u8, T::MaxMemoLength>>,
        msg: BoundedVec<u8, T::MaxMessageLength>,
        gas: Weight,
    ) -> Result<u64, DispatchError> {
        ensure!(gas.all_gte(T::GasForResolveTransfer::get()), Error::<T>::InsufficientGas);
        let mut queue = PendingTransferCalls::<T>::get();
        ensure!(
            queue.len() < T::MaxPendingTransferCalls::get() as usize,
            Error::<T>::TooManyPendingTransferCalls
        );

        Self::internal_transfer(&sender, &receiver, amount, memo)?;

        let id = NextTransferCallId::<T>::mutate(|next| {
            let id = *next;
            *next = next.wrapping_add(1);
            id
        });
        queue
            .try_push(TransferCallRequest {
                id,
                sender: sender.clone(),
                receiver: receiver.clone(),
                amount,
                msg,
                gas,
            })
            .map_err(|_| Error::<T>::TooManyPendingTransferCalls)?;
        PendingTransferCalls::<T>::put(queue);

        Self::emit(Event::TransferCallInitiated { id, sender, receiver, amount });
        Ok(id)
    }

    /// Notify and resolve every queued transfer call, oldest first. Each runs exactly once.
    pub(crate) fn process_transfer_calls() {
        for request in PendingTransferCalls::<T>::take() {
            let outcome = Self::notify_receiver(&request);
            let resolved = with_storage_layer(|| {
                Self::resolve_transfer(
                    request.id,
                    &request.sender,
                    &request.receiver,
                    request.amount,
                    outcome,
                )
            });
            if let Err(error) = resolved {
                log::error!(
                    target: LOG_TARGET,
                    "transfer call {} could not be resolved: {error:?}",
                    request.id
                );
            }
        }
    }

    /// Run the receiver within its share of the gas. A failure undoes everything it wrote.
    fn notify_receiver(request: &TransferCallRequest<T>) -> Result<u128, DispatchError> {
        let budget = request.gas.saturating_sub(T::GasForResolveTransfer::get());
        let required = T::Receiver::notification_weight(&request.receiver, &request.msg);
        if required.any_gt(budget) {
            log::debug!(
                target: LOG_TARGET,
                "transfer call {} needs {required:?}, only {budget:?} left",
                request.id
            );
            return Err(Error::<T>::ReceiverOutOfGas.into());
        }

        with_storage_layer(|| {
            T::Receiver::on_transfer(&request.receiver, &request.sender, request.amount, &request.msg)
        })
    }

    /// Settle transfer call `id` given the receiver's `outcome`.
    ///
    /// The receiver keeps what it reports as used (at most `amount`); a failure counts as
    /// nothing used. The unused part is refunded, limited to what the receiver still holds. If
    /// the sender closed its account in the meantime the refund is burned instead.
    pub fn resolve_transfer(
        id: u64,
        sender: &T::AccountId,
        receiver: &T::AccountId,
        amount: u128,
        outcome: Result<u128, DispatchError>,
    ) -> Result<Settlement, DispatchError> {
        let (used, error) = match outcome {
            Ok(reported) => (reported.min(amount), None),
            Err(error) => (0, Some(error)),
        };
        let unused = amount.saturating_sub(used);

        let sender_registered = Self::is_registered(sender);
        if !sender_registered {
            Self::emit(Event::SenderAccountDeleted { id, sender: sender.clone() });
        }

        let mut refunded = 0;
        let mut burned = 0;
        // Zero refunds are skipped, never sent as a zero transfer.
        if unused > 0 {
            let refund = unused.min(Self::ft_balance_of(receiver));
            if refund > 0 {
                if sender_registered {
                    Self::internal_transfer(receiver, sender, refund, None)?;
                    refunded = refund;
                } else {
                    Self::internal_burn(receiver, refund)?;
                    burned = refund;
                }
            }
        }

        let settlement = match error {
            None => Settlement::Settled { used: amount.saturating_sub(refunded), refunded, burned },
            Some(error) => Settlement::Reverted { refunded, burned, error },
        };

        Self::emit(match settlement.clone() {
            Settlement::Settled { used, refunded, burned } => Event::TransferCallSettled {
                id,
                sender: sender.clone(),
                receiver: receiver.clone(),
                amount,
                used,
                refunded,
                burned,
            },
            Settlement::Reverted { refunded, burned, error } => Event::TransferCallReverted {
                id,
                sender: sender.clone(),
                receiver: receiver.clone(),
                amount,
                refunded,
                burned,
                error,
            },
        });
        Ok(settlement)
    }
}
