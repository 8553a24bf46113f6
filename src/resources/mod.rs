//! Resources module
//!
//! One module per Increase resource: the response object, its nested
//! objects and enums, the request parameter types, and a service that
//! calls the endpoints.

mod account_numbers;
mod accounts;
mod ach_prenotifications;
mod ach_transfers;
mod real_time_decisions;
mod shared;
mod wire_transfers;

pub use account_numbers::{
    AccountNumber, AccountNumberCreateParams, AccountNumberListParams, AccountNumberStatus,
    AccountNumberUpdateParams, AccountNumbers, AchDebitStatus, InboundAch, InboundChecks,
    InboundChecksStatus,
};
pub use accounts::{
    Account, AccountBank, AccountCreateParams, AccountListParams, AccountStatus,
    AccountUpdateParams, Accounts,
};
pub use ach_prenotifications::{
    AchPrenotification, AchPrenotificationCreateParams, AchPrenotificationListParams,
    AchPrenotificationStatus, AchPrenotifications, CreditDebitIndicator, NotificationOfChange,
    PrenotificationReturn,
};
pub use ach_transfers::{
    AchFunding, AchReturn, AchSubmission, AchTransfer, AchTransferCreateParams,
    AchTransferListParams, AchTransferStatus, AchTransfers, StandardEntryClassCode,
};
pub use real_time_decisions::{
    CardAuthorization, CardAuthorizationAction, Decision, DigitalWallet,
    DigitalWalletAuthenticationAction, DigitalWalletAuthenticationResult, DigitalWalletToken,
    DigitalWalletTokenAction, DigitalWalletTokenApproval, DigitalWalletTokenDecline,
    RealTimeDecision, RealTimeDecisionActionParams, RealTimeDecisionCategory,
    RealTimeDecisionStatus, RealTimeDecisions,
};
pub use shared::{CreatedAtFilter, Currency, InFilter, TransferApproval, TransferCancellation};
pub use wire_transfers::{
    WireReversal, WireSubmission, WireTransfer, WireTransferCreateParams, WireTransferListParams,
    WireTransferStatus, WireTransfers,
};
