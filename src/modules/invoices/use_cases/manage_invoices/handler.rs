use crate::modules::invoices::core::invoice::{
    Invoice, InvoiceFilter, InvoicePatch, InvoiceStatus, NewInvoice,
};
use crate::modules::projects::core::project::Project;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::errors::ValidationError;
use crate::shared::core::primitives::EntityId;
use crate::shared::infrastructure::entity_store::{EntityStore, StoreError};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

pub struct InvoicesHandler<TInvoices, TProjects>
where
    TInvoices: EntityStore<Invoice> + 'static,
    TProjects: EntityStore<Project> + 'static,
{
    invoices: Arc<TInvoices>,
    projects: Arc<TProjects>,
}

impl<TInvoices, TProjects> InvoicesHandler<TInvoices, TProjects>
where
    TInvoices: EntityStore<Invoice> + 'static,
    TProjects: EntityStore<Project> + 'static,
{
    pub fn new(invoices: Arc<TInvoices>, projects: Arc<TProjects>) -> Self {
        Self { invoices, projects }
    }

    pub async fn get_all(&self) -> Result<Vec<Invoice>, ApplicationError> {
        Ok(self.invoices.get_all().await?)
    }

    pub async fn filter(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>, ApplicationError> {
        let invoices = self.invoices.get_all().await?;
        Ok(invoices.into_iter().filter(|i| filter.matches(i)).collect())
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Invoice, ApplicationError> {
        Ok(self.invoices.get_by_id(id).await?)
    }

    /// Sum of every invoice that is not paid yet.
    pub async fn outstanding_amount(&self) -> Result<Decimal, ApplicationError> {
        let invoices = self.invoices.get_all().await?;
        Ok(invoices
            .iter()
            .filter(|i| i.is_outstanding())
            .map(|i| i.amount)
            .sum())
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, mut draft: NewInvoice) -> Result<Invoice, ApplicationError> {
        if draft.client_id.is_none() {
            if let Some(project_id) = draft.project_id {
                draft.client_id = self.client_of(project_id).await?;
            }
        }
        let invoice = self.invoices.create(draft).await?;
        tracing::info!(invoice_id = %invoice.id, amount = %invoice.amount, "invoice created");
        Ok(invoice)
    }

    #[tracing::instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: EntityId,
        patch: InvoicePatch,
    ) -> Result<Invoice, ApplicationError> {
        let invoice = self.invoices.update(id, patch).await?;
        tracing::info!(invoice_id = %id, status = ?invoice.status, "invoice updated");
        Ok(invoice)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: EntityId) -> Result<bool, ApplicationError> {
        let deleted = self.invoices.delete(id).await?;
        tracing::info!(invoice_id = %id, "invoice deleted");
        Ok(deleted)
    }

    /// Unconditional move to `sent`. A payment date left over from an earlier `paid` is dropped.
    #[tracing::instrument(skip(self))]
    pub async fn mark_as_sent(&self, id: EntityId) -> Result<Invoice, ApplicationError> {
        let loaded = self.invoices.load(id).await?;
        let mut invoice = loaded.record;
        invoice.status = InvoiceStatus::Sent;
        invoice.payment_date = None;

        let invoice = self.invoices.replace(id, loaded.version, invoice).await?;
        tracing::info!(invoice_id = %id, "invoice sent");
        Ok(invoice)
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_as_paid(
        &self,
        id: EntityId,
        payment_date: Option<DateTime<Utc>>,
    ) -> Result<Invoice, ApplicationError> {
        let payment_date = payment_date.ok_or(ValidationError::Required("payment date"))?;
        let patch = InvoicePatch {
            status: Some(InvoiceStatus::Paid),
            payment_date: Some(payment_date),
            ..InvoicePatch::default()
        };
        let invoice = self.invoices.update(id, patch).await?;
        tracing::info!(invoice_id = %id, %payment_date, "invoice paid");
        Ok(invoice)
    }

    async fn client_of(&self, project_id: EntityId) -> Result<Option<EntityId>, ApplicationError> {
        match self.projects.get_by_id(project_id).await {
            Ok(project) => Ok(Some(project.client_id)),
            Err(StoreError::NotFound { .. }) => {
                tracing::warn!(%project_id, "invoice references an unknown project");
                Ok(None)
            }
            Err(error) => Err(error.into()),
        }
    }
}
