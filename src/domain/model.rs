use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Basic,
    Standard,
    Pro,
}

impl Plan {
    pub fn price(self) -> u32 {
        match self {
            Plan::Pro => 149,
            Plan::Standard => 99,
            Plan::Basic => 49,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Basic => "basic",
            Plan::Standard => "standard",
            Plan::Pro => "pro",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "basic" => Ok(Plan::Basic),
            "standard" => Ok(Plan::Standard),
            "pro" => Ok(Plan::Pro),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan '{0}'")]
pub struct UnknownPlan(pub String);

/// The order record handed from the order page to the checkout page.
///
/// `price` is not stored separately; it is always looked up from `plan`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    business_name: String,
    plan: Plan,
}

impl OrderDraft {
    pub fn new(business_name: impl Into<String>, plan: Plan) -> Self {
        Self {
            business_name: business_name.into(),
            plan,
        }
    }

    /// Stand-in used by the checkout page when nothing usable was handed off.
    pub fn default_draft() -> Self {
        Self::new("N/A", Plan::Standard)
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    pub fn price(&self) -> u32 {
        self.plan.price()
    }
}

/// Session storage layout: `{"businessName": ..., "plan": ..., "price": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffRecord {
    pub business_name: String,
    pub plan: Plan,
    pub price: u32,
}

impl From<&OrderDraft> for HandoffRecord {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            business_name: draft.business_name.clone(),
            plan: draft.plan,
            price: draft.price(),
        }
    }
}

impl TryFrom<HandoffRecord> for OrderDraft {
    type Error = HandoffRecord;

    fn try_from(record: HandoffRecord) -> Result<Self, Self::Error> {
        if record.price != record.plan.price() {
            return Err(record);
        }
        Ok(OrderDraft::new(record.business_name, record.plan))
    }
}

/// Element identifiers of the input fields both pages read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    BusinessName,
    Plan,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::BusinessName => "businessName",
            FieldId::Plan => "plan",
            FieldId::CardNumber => "cardNumber",
            FieldId::CardExpiry => "cardExpiry",
            FieldId::CardCvc => "cardCvc",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readonly text slots in the order sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SummarySlot {
    Business,
    Plan,
    Subtotal,
    Total,
}

impl SummarySlot {
    pub fn as_str(self) -> &'static str {
        match self {
            SummarySlot::Business => "summaryBusiness",
            SummarySlot::Plan => "summaryPlan",
            SummarySlot::Subtotal => "summarySubtotal",
            SummarySlot::Total => "summaryTotal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Checkout,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Checkout => "checkout.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Processing { label: String },
}

/// Payment inputs as read from the checkout form. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct PaymentFields {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_follows_plan() {
        assert_eq!(OrderDraft::new("Acme", Plan::Pro).price(), 149);
        assert_eq!(OrderDraft::new("Acme", Plan::Standard).price(), 99);
        assert_eq!(OrderDraft::new("Acme", Plan::Basic).price(), 49);
    }

    #[test]
    fn test_plan_parsing() {
        assert_eq!("pro".parse::<Plan>().unwrap(), Plan::Pro);
        assert_eq!(" basic ".parse::<Plan>().unwrap(), Plan::Basic);
        assert!("enterprise".parse::<Plan>().is_err());
        assert!("PRO".parse::<Plan>().is_err());
    }

    #[test]
    fn test_handoff_record_wire_shape() {
        let record = HandoffRecord::from(&OrderDraft::new("Acme", Plan::Pro));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"businessName": "Acme", "plan": "pro", "price": 149})
        );
    }

    #[test]
    fn test_record_with_mismatched_price_is_rejected() {
        let record = HandoffRecord {
            business_name: "Acme".to_string(),
            plan: Plan::Basic,
            price: 149,
        };
        assert!(OrderDraft::try_from(record).is_err());
    }

    #[test]
    fn test_element_ids_match_page_markup() {
        assert_eq!(FieldId::CardExpiry.to_string(), "cardExpiry");
        assert_eq!(SummarySlot::Subtotal.as_str(), "summarySubtotal");
        assert_eq!(Page::Checkout.path(), "checkout.html");
    }
}
