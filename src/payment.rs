use uuid::Uuid;

/// Opaque reference returned by an approved charge.
pub type PaymentRef = String;

/// The payment collaborator the booking flow charges through. A decline is
/// a normal business outcome, not a fault: `None` aborts the booking with
/// no side effects on either side.
pub trait PaymentGateway {
    fn charge(&self, amount: f64, card_number: &str) -> Option<PaymentRef>;
}

/// How `MockGateway` decides a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalPolicy {
    /// Approve every charge.
    Approve,
    /// Decline every charge.
    Decline,
    /// Approve when the card number ends in an even ASCII digit. Arbitrary
    /// but deterministic, so interactive sessions can exercise both paths.
    EvenFinalDigit,
}

/// In-process stand-in for a real processor: no wire calls, just the
/// configured policy plus a fresh reference per approval.
#[derive(Debug, Clone, Copy)]
pub struct MockGateway {
    policy: ApprovalPolicy,
}

impl MockGateway {
    pub fn new(policy: ApprovalPolicy) -> Self {
        Self { policy }
    }

    fn approves(&self, card_number: &str) -> bool {
        match self.policy {
            ApprovalPolicy::Approve => true,
            ApprovalPolicy::Decline => false,
            ApprovalPolicy::EvenFinalDigit => card_number
                .chars()
                .last()
                .and_then(|c| c.to_digit(10))
                .is_some_and(|digit| digit % 2 == 0),
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(ApprovalPolicy::EvenFinalDigit)
    }
}

impl PaymentGateway for MockGateway {
    fn charge(&self, _amount: f64, card_number: &str) -> Option<PaymentRef> {
        if !self.approves(card_number) {
            return None;
        }
        let hex = Uuid::new_v4().simple().to_string();
        Some(format!("PAY-{}", hex[..8].to_uppercase()))
    }
}
