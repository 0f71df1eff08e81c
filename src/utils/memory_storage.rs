//! In-memory data source for testing

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

#[derive(Debug, Default)]
struct Records {
    invoices: Vec<Invoice>,
    deposits: Vec<InvoiceDeposit>,
    buyer_transactions: Vec<BuyerTransaction>,
    other_transactions: Vec<OtherTransaction>,
    company_transactions: Vec<CompanyTransaction>,
    salary_transactions: Vec<SalaryTransaction>,
}

/// In-memory storage implementation for testing and development
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Arc<RwLock<Records>>,
}

impl MemoryStorage {
    /// Create a new memory storage instance
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, Records>> {
        self.records
            .read()
            .map_err(|e| EngineError::Storage(e.to_string()))
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, Records>> {
        self.records
            .write()
            .map_err(|e| EngineError::Storage(e.to_string()))
    }

    pub fn add_invoice(&self, invoice: Invoice) -> EngineResult<()> {
        self.write()?.invoices.push(invoice);
        Ok(())
    }

    pub fn add_deposit(&self, deposit: InvoiceDeposit) -> EngineResult<()> {
        self.write()?.deposits.push(deposit);
        Ok(())
    }

    pub fn add_buyer_transaction(&self, transaction: BuyerTransaction) -> EngineResult<()> {
        self.write()?.buyer_transactions.push(transaction);
        Ok(())
    }

    pub fn add_other_transaction(&self, transaction: OtherTransaction) -> EngineResult<()> {
        self.write()?.other_transactions.push(transaction);
        Ok(())
    }

    pub fn add_company_transaction(&self, transaction: CompanyTransaction) -> EngineResult<()> {
        self.write()?.company_transactions.push(transaction);
        Ok(())
    }

    pub fn add_salary_transaction(&self, transaction: SalaryTransaction) -> EngineResult<()> {
        self.write()?.salary_transactions.push(transaction);
        Ok(())
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> EngineResult<()> {
        *self.write()? = Records::default();
        Ok(())
    }
}

#[async_trait]
impl LedgerSource for MemoryStorage {
    async fn list_invoices(&self) -> EngineResult<Vec<Invoice>> {
        Ok(self.read()?.invoices.clone())
    }

    async fn invoices_for_buyer(&self, buyer_gst: &str) -> EngineResult<Vec<Invoice>> {
        Ok(self
            .read()?
            .invoices
            .iter()
            .filter(|invoice| invoice.buyer_gst.as_deref() == Some(buyer_gst))
            .cloned()
            .collect())
    }

    async fn deposits_for_invoices(
        &self,
        invoice_numbers: &[String],
    ) -> EngineResult<Vec<InvoiceDeposit>> {
        Ok(self
            .read()?
            .deposits
            .iter()
            .filter(|deposit| {
                invoice_numbers
                    .iter()
                    .any(|number| deposit.references(number))
            })
            .cloned()
            .collect())
    }

    async fn buyer_transactions(&self) -> EngineResult<Vec<BuyerTransaction>> {
        Ok(self.read()?.buyer_transactions.clone())
    }

    async fn other_transactions(&self) -> EngineResult<Vec<OtherTransaction>> {
        Ok(self.read()?.other_transactions.clone())
    }

    async fn company_transactions(&self) -> EngineResult<Vec<CompanyTransaction>> {
        Ok(self.read()?.company_transactions.clone())
    }

    async fn salary_transactions(&self) -> EngineResult<Vec<SalaryTransaction>> {
        Ok(self.read()?.salary_transactions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_memory_storage_filters() {
        let storage = MemoryStorage::new();
        let day = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        storage
            .add_invoice(
                Invoice::new(
                    Some("01-2024/2025".to_string()),
                    day,
                    "Acme".to_string(),
                    BigDecimal::from(100),
                )
                .with_buyer_gst("GST-A"),
            )
            .unwrap();
        storage
            .add_invoice(
                Invoice::new(
                    Some("02-2024/2025".to_string()),
                    day,
                    "Globex".to_string(),
                    BigDecimal::from(200),
                )
                .with_buyer_gst("GST-B"),
            )
            .unwrap();
        storage
            .add_deposit(InvoiceDeposit::new("01-2024/2025", day, BigDecimal::from(40)))
            .unwrap();
        storage
            .add_deposit(InvoiceDeposit::new("02-2024/2025", day, BigDecimal::from(60)))
            .unwrap();

        let acme = storage.invoices_for_buyer("GST-A").await.unwrap();
        assert_eq!(acme.len(), 1);
        assert_eq!(acme[0].buyer_name, "Acme");

        let deposits = storage
            .deposits_for_invoices(&["01-2024/2025".to_string()])
            .await
            .unwrap();
        assert_eq!(deposits.len(), 1);
        assert_eq!(deposits[0].amount, BigDecimal::from(40));

        storage
            .add_salary_transaction(SalaryTransaction {
                salary_name: "Asha".to_string(),
                salary_amount: BigDecimal::from(30000),
                salary_date: day,
            })
            .unwrap();
        assert_eq!(storage.salary_transactions().await.unwrap().len(), 1);

        storage.clear().unwrap();
        assert!(storage.salary_transactions().await.unwrap().is_empty());
        assert!(storage.list_invoices().await.unwrap().is_empty());
    }
}
