use rust_decimal::Decimal;

/// A rejected precondition. Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("email format is invalid")]
    InvalidEmail,

    #[error("budget must not be negative")]
    NegativeBudget,

    #[error("end date must not be before start date")]
    EndBeforeStart,

    #[error("amount must be greater than 0")]
    AmountNotPositive,

    #[error("at least one line item with description and amount is required")]
    NoValidLineItems,

    #[error("line item {index}: {reason}")]
    InvalidLineItem { index: usize, reason: &'static str },

    #[error("amount {amount} does not match the line item total {total}")]
    AmountMismatch { amount: Decimal, total: Decimal },

    #[error("only a paid invoice has a payment date")]
    PaymentDateWithoutPayment,

    #[error("timer already running")]
    TimerAlreadyRunning,

    #[error("no active timer")]
    NoActiveTimer,
}
