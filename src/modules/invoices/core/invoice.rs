use crate::modules::invoices::core::line_items::{LineItem, line_items_total, normalize_line_items};
use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::{EntityId, lenient_date, lenient_instant};
use crate::shared::core::validation::contains_ignore_case;
use crate::shared::infrastructure::entity_store::Record;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `draft -> sent -> paid`. `overdue` is only ever set explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "Id")]
    pub id: EntityId,
    pub project_id: EntityId,
    /// Copied from the project when the invoice is created.
    #[serde(default)]
    pub client_id: Option<EntityId>,
    pub amount: Decimal,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub payment_date: Option<DateTime<Utc>>,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewInvoice {
    pub project_id: Option<EntityId>,
    pub client_id: Option<EntityId>,
    /// Defaults to the line item total.
    pub amount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    #[serde(deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_instant")]
    pub payment_date: Option<DateTime<Utc>>,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePatch {
    pub project_id: Option<EntityId>,
    pub client_id: Option<EntityId>,
    pub amount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    #[serde(deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_instant")]
    pub payment_date: Option<DateTime<Utc>>,
    pub line_items: Option<Vec<LineItem>>,
}

impl Invoice {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::AmountNotPositive);
        }
        let total = line_items_total(&self.line_items);
        if self.amount != total {
            return Err(ValidationError::AmountMismatch {
                amount: self.amount,
                total,
            });
        }
        match (self.status, self.payment_date) {
            (InvoiceStatus::Paid, None) => Err(ValidationError::Required("payment date")),
            (status, Some(_)) if status != InvoiceStatus::Paid => {
                Err(ValidationError::PaymentDateWithoutPayment)
            }
            _ => Ok(()),
        }
    }

    /// Only a paid invoice carries a payment date.
    fn settle_payment_date(&mut self) {
        if self.status != InvoiceStatus::Paid {
            self.payment_date = None;
        }
    }

    pub fn is_outstanding(&self) -> bool {
        self.status != InvoiceStatus::Paid
    }

    /// Paid with a payment date inside the given calendar month.
    pub fn paid_in(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;

        self.status == InvoiceStatus::Paid
            && self
                .payment_date
                .is_some_and(|paid| paid.year() == year && paid.month() == month)
    }
}

impl Record for Invoice {
    const ENTITY: &'static str = "invoice";
    type Draft = NewInvoice;
    type Patch = InvoicePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewInvoice) -> Result<Self, ValidationError> {
        let project_id = draft.project_id.ok_or(ValidationError::Required("project id"))?;
        if draft.amount.is_some_and(|amount| amount <= Decimal::ZERO) {
            return Err(ValidationError::AmountNotPositive);
        }
        let due_date = draft.due_date.ok_or(ValidationError::Required("due date"))?;
        let line_items = normalize_line_items(draft.line_items)?;
        let amount = draft.amount.unwrap_or_else(|| line_items_total(&line_items));

        let mut invoice = Invoice {
            id,
            project_id,
            client_id: draft.client_id,
            amount,
            status: draft.status.unwrap_or_default(),
            due_date,
            payment_date: draft.payment_date,
            line_items,
        };
        invoice.settle_payment_date();
        invoice.validate()?;
        Ok(invoice)
    }

    fn apply_patch(&mut self, patch: InvoicePatch) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(project_id) = patch.project_id {
            next.project_id = project_id;
        }
        if let Some(client_id) = patch.client_id {
            next.client_id = Some(client_id);
        }
        if let Some(status) = patch.status {
            next.status = status;
        }
        if let Some(due_date) = patch.due_date {
            next.due_date = due_date;
        }
        if let Some(payment_date) = patch.payment_date {
            next.payment_date = Some(payment_date);
        }
        if let Some(line_items) = patch.line_items {
            next.line_items = normalize_line_items(line_items)?;
            next.amount = line_items_total(&next.line_items);
        }
        if let Some(amount) = patch.amount {
            next.amount = amount;
        }
        next.settle_payment_date();
        next.validate()?;
        *self = next;
        Ok(())
    }
}

/// Query string for the invoice list. The search term matches the invoice number or amount.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InvoiceFilter {
    pub search: Option<String>,
    pub status: Option<InvoiceStatus>,
}

impl InvoiceFilter {
    pub fn matches(&self, invoice: &Invoice) -> bool {
        let term = self.search.as_deref().unwrap_or_default().trim();
        let term = term.trim_start_matches('#');
        let hit = contains_ignore_case(&invoice.id.to_string(), term)
            || contains_ignore_case(&invoice.amount.to_string(), term);
        hit && self.status.is_none_or(|status| invoice.status == status)
    }
}
