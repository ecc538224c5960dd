//! A data service that keeps everything in memory.
//!
//! Used by `--demo` and by the handler tests. It mirrors the behaviour of the
//! remote service closely enough for the UI: 404s become [ApiError::NotFound],
//! and every mutation is recorded as the request line the HTTP client would send.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use time::{Date, Duration, macros::time};

use crate::{
    account::{Account, AccountRef, AccountType, PaymentMode},
    api::{ApiError, FinanceApi},
    category::{Category, CategoryRef, CategoryType},
    dashboard::{Summary, SummaryRange},
    debt::{DebtId, DebtRecord, DebtRecordMode, DebtRecordPayload, DebtRef, DebtTime},
    transaction::{
        Transaction, TransactionKind, TransactionPayload, TransactionTag, TransactionType,
    },
};

#[derive(Debug, Default)]
struct Data {
    transactions: Vec<Transaction>,
    accounts: Vec<Account>,
    categories: Vec<Category>,
    default_account_id: Option<String>,
    default_category_ids: HashMap<i32, String>,
    debts: Vec<DebtRef>,
    debt_records: HashMap<DebtId, Vec<DebtRecord>>,
    operations: Vec<String>,
    fail_mutations: bool,
    next_id: u64,
}

impl Data {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn account_ref(&self, id: &str) -> Option<AccountRef> {
        self.accounts
            .iter()
            .find(|account| account.id == id)
            .map(|account| AccountRef {
                id: account.id.clone(),
                name: account.name.clone(),
                account_type: account.account_type,
            })
    }

    fn payment_mode(&self, id: Option<&str>) -> Option<PaymentMode> {
        let id = id?;

        self.accounts
            .iter()
            .flat_map(|account| &account.linked_payment_modes)
            .find(|mode| mode.id == id)
            .cloned()
    }

    fn category_ref(&self, id: Option<&str>) -> Option<CategoryRef> {
        let id = id?;

        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| CategoryRef {
                id: category.id.clone(),
                name: category.name.clone(),
                icon: category.icon.clone(),
                color: category.color.clone(),
            })
    }

    /// Build the stored transaction for `payload`, resolving the referenced records.
    fn transaction_from_payload(&self, id: String, payload: &TransactionPayload) -> Transaction {
        let is_transfer = payload.transaction_type == TransactionType::Transfer;
        let account = self.account_ref(&payload.account_id);
        let to_account = payload
            .to_account_id
            .as_deref()
            .and_then(|id| self.account_ref(id));

        Transaction {
            id,
            transaction_type: payload.transaction_type,
            txn_date: payload.txn_date,
            txn_time: payload.txn_time,
            amount: payload.amount,
            description: payload.description.clone(),
            category: self.category_ref(payload.category_id.as_deref()),
            account: if is_transfer { None } else { account.clone() },
            from_account: if is_transfer { account } else { None },
            to_account,
            payment_mode: self.payment_mode(payload.payment_mode_id.as_deref()),
            to_payment_mode: self.payment_mode(payload.to_payment_mode_id.as_deref()),
            debt: None,
            tags: payload
                .tags
                .iter()
                .map(|name| TransactionTag { name: name.clone() })
                .collect(),
        }
    }

    fn check_mutation(&self) -> Result<(), ApiError> {
        if self.fail_mutations {
            Err(ApiError::Rejected {
                status: 500,
                body: "mutations are disabled".to_owned(),
            })
        } else {
            Ok(())
        }
    }
}

/// An in-memory [FinanceApi].
#[derive(Debug)]
pub struct InMemoryFinanceApi {
    data: Mutex<Data>,
    /// The date that the month and year summaries are relative to.
    today: Date,
}

impl InMemoryFinanceApi {
    /// An empty data service.
    pub fn new(today: Date) -> Self {
        Self {
            data: Mutex::new(Data::default()),
            today,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Data>, ApiError> {
        self.data.lock().map_err(|error| {
            tracing::error!("could not acquire the in-memory data lock: {error}");
            ApiError::Unavailable
        })
    }

    /// Replace the accounts.
    pub fn with_accounts(self, accounts: Vec<Account>) -> Self {
        if let Ok(mut data) = self.data.lock() {
            data.accounts = accounts;
        }
        self
    }

    /// Replace the expense and income categories.
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        if let Ok(mut data) = self.data.lock() {
            data.categories = categories;
        }
        self
    }

    /// Replace the transactions.
    pub fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
        if let Ok(mut data) = self.data.lock() {
            data.transactions = transactions;
        }
        self
    }

    /// Set the account returned as the default payment-mode account.
    pub fn with_default_account(self, account_id: &str) -> Self {
        if let Ok(mut data) = self.data.lock() {
            data.default_account_id = Some(account_id.to_owned());
        }
        self
    }

    /// Set the default category for `category_type`.
    pub fn with_default_category(self, category_type: CategoryType, category_id: &str) -> Self {
        if let Ok(mut data) = self.data.lock() {
            data.default_category_ids
                .insert(category_type.code(), category_id.to_owned());
        }
        self
    }

    /// Add a debt with `records`.
    pub fn with_debt(self, debt: DebtRef, records: Vec<DebtRecord>) -> Self {
        if let Ok(mut data) = self.data.lock() {
            data.debt_records.insert(debt.id.clone(), records);
            data.debts.push(debt);
        }
        self
    }

    /// Make every create, update and delete fail with a 500 rejection.
    pub fn fail_mutations(&self, fail: bool) {
        if let Ok(mut data) = self.data.lock() {
            data.fail_mutations = fail;
        }
    }

    /// The request lines of the mutations handled so far, e.g. "POST /transactions/expense".
    pub fn operations(&self) -> Vec<String> {
        self.data
            .lock()
            .map(|data| data.operations.clone())
            .unwrap_or_default()
    }

    /// A copy of the stored transactions.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.data
            .lock()
            .map(|data| data.transactions.clone())
            .unwrap_or_default()
    }

    fn in_range(&self, date: Date, range: SummaryRange) -> bool {
        match range {
            SummaryRange::AllTime => true,
            SummaryRange::Month => date.year() == self.today.year() && date.month() == self.today.month(),
            SummaryRange::Year => date.year() == self.today.year(),
        }
    }

    /// A small household's worth of accounts, categories, transactions and
    /// one debt, dated relative to `today`.
    pub fn with_sample_data(today: Date) -> Self {
        let accounts = vec![
            Account {
                id: "acc-1".to_owned(),
                name: "Everyday Bank".to_owned(),
                account_type: AccountType::Bank,
                linked_payment_modes: vec![PaymentMode {
                    id: "pm-1".to_owned(),
                    name: "Debit Card".to_owned(),
                }],
            },
            Account {
                id: "acc-2".to_owned(),
                name: "Wallet".to_owned(),
                account_type: AccountType::Wallet,
                linked_payment_modes: Vec::new(),
            },
            Account {
                id: "acc-3".to_owned(),
                name: "Credit Card".to_owned(),
                account_type: AccountType::Card,
                linked_payment_modes: vec![PaymentMode {
                    id: "pm-2".to_owned(),
                    name: "Visa".to_owned(),
                }],
            },
            Account {
                id: "acc-4".to_owned(),
                name: "Cash".to_owned(),
                account_type: AccountType::Cash,
                linked_payment_modes: Vec::new(),
            },
        ];

        let category = |id: &str, name: &str, icon: &str, color: &str, category_type| Category {
            id: id.to_owned(),
            name: name.to_owned(),
            icon: icon.to_owned(),
            color: color.to_owned(),
            category_type,
        };
        let categories = vec![
            category("cat-1", "Food", "utensils", "#8B5CF6", CategoryType::Expense),
            category("cat-2", "Transportation", "car", "#10B981", CategoryType::Expense),
            category("cat-3", "Shopping", "shopping-bag", "#F59E0B", CategoryType::Expense),
            category("cat-4", "Utilities", "zap", "#3B82F6", CategoryType::Expense),
            category("cat-5", "Salary", "briefcase", "#22C55E", CategoryType::Income),
            category("cat-6", "Freelance", "laptop", "#14B8A6", CategoryType::Income),
        ];

        let debt = DebtRef {
            id: "debt-1".to_owned(),
            person_name: "Alex".to_owned(),
        };
        let debt_records = vec![
            DebtRecord {
                id: "rec-1".to_owned(),
                mode: DebtRecordMode::Paid,
                date: today - Duration::days(6),
                time: Some(DebtTime {
                    hour: 19,
                    minute: 30,
                    second: 0,
                    nano: 0,
                }),
                amount: 40.0,
                description: "Concert tickets".to_owned(),
                account_id: "acc-1".to_owned(),
                payment_mode_id: Some("pm-1".to_owned()),
            },
            DebtRecord {
                id: "rec-2".to_owned(),
                mode: DebtRecordMode::Received,
                date: today - Duration::days(2),
                time: None,
                amount: 15.0,
                description: "Paid back half".to_owned(),
                account_id: "acc-2".to_owned(),
                payment_mode_id: None,
            },
        ];

        let api = Self::new(today)
            .with_accounts(accounts)
            .with_categories(categories)
            .with_default_account("acc-1")
            .with_default_category(CategoryType::Expense, "cat-1")
            .with_default_category(CategoryType::Income, "cat-5")
            .with_debt(debt.clone(), debt_records);

        let samples = [
            (TransactionType::Income, 0, 3200.0, "Monthly salary", Some("cat-5"), "acc-1", None, vec!["needs"]),
            (TransactionType::Expense, 0, 54.2, "Groceries", Some("cat-1"), "acc-1", Some("pm-1"), vec!["food", "needs"]),
            (TransactionType::Expense, 1, 18.5, "Bus pass top-up", Some("cat-2"), "acc-2", None, vec!["transportation"]),
            (TransactionType::Transfer, 1, 500.0, "Pay off credit card", None, "acc-1", None, vec![]),
            (TransactionType::Expense, 3, 129.99, "New running shoes for the half marathon training block", Some("cat-3"), "acc-3", Some("pm-2"), vec!["shopping", "health"]),
            (TransactionType::Income, 4, 450.0, "Logo design", Some("cat-6"), "acc-1", None, vec!["business"]),
            (TransactionType::Expense, 9, 96.4, "Electricity bill", Some("cat-4"), "acc-1", None, vec!["needs"]),
        ];

        if let Ok(mut data) = api.data.lock() {
            for (index, (transaction_type, days_ago, amount, description, category_id, account_id, payment_mode_id, tags)) in
                samples.into_iter().enumerate()
            {
                let payload = TransactionPayload {
                    transaction_type,
                    txn_date: today - Duration::days(days_ago),
                    txn_time: time!(12:00) - Duration::minutes(37 * index as i64),
                    amount,
                    category_id: category_id.map(str::to_owned),
                    account_id: account_id.to_owned(),
                    to_account_id: (transaction_type == TransactionType::Transfer)
                        .then(|| "acc-3".to_owned()),
                    payment_mode_id: payment_mode_id.map(str::to_owned),
                    to_payment_mode_id: None,
                    description: description.to_owned(),
                    tags: tags.into_iter().map(str::to_owned).collect(),
                };
                let id = data.next_id("txn");
                let transaction = data.transaction_from_payload(id, &payload);
                data.transactions.push(transaction);
            }

            let debt_transactions = [
                (TransactionType::DebtPaid, 6, 40.0, "Concert tickets", "acc-1"),
                (TransactionType::DebtReceived, 2, 15.0, "Paid back half", "acc-2"),
            ];

            for (transaction_type, days_ago, amount, description, account_id) in debt_transactions {
                let id = data.next_id("txn");
                let account = data.account_ref(account_id);
                data.transactions.push(Transaction {
                    id,
                    transaction_type,
                    txn_date: today - Duration::days(days_ago),
                    txn_time: time!(19:30),
                    amount,
                    description: description.to_owned(),
                    category: None,
                    account,
                    from_account: None,
                    to_account: None,
                    payment_mode: None,
                    to_payment_mode: None,
                    debt: Some(debt.clone()),
                    tags: Vec::new(),
                });
            }
        }

        api
    }
}

#[async_trait]
impl FinanceApi for InMemoryFinanceApi {
    async fn get_summary(&self, range: SummaryRange) -> Result<Summary, ApiError> {
        let data = self.lock()?;

        let summary = data
            .transactions
            .iter()
            .filter(|transaction| self.in_range(transaction.txn_date, range))
            .fold(Summary::default(), |mut summary, transaction| {
                match transaction.transaction_type {
                    TransactionType::Income => summary.total_income += transaction.amount,
                    TransactionType::Expense => summary.total_expense += transaction.amount,
                    _ => {}
                }
                summary
            });

        Ok(summary)
    }

    async fn get_recent_transactions(&self, limit: usize) -> Result<Vec<Transaction>, ApiError> {
        let data = self.lock()?;

        let mut transactions = data.transactions.clone();
        transactions.sort_by(|a, b| (b.txn_date, b.txn_time).cmp(&(a.txn_date, a.txn_time)));
        transactions.truncate(limit);

        Ok(transactions)
    }

    async fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        self.lock()?
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_transaction(
        &self,
        kind: TransactionKind,
        payload: &TransactionPayload,
    ) -> Result<(), ApiError> {
        let mut data = self.lock()?;
        data.check_mutation()?;

        let id = data.next_id("txn");
        let transaction = data.transaction_from_payload(id, payload);
        data.transactions.push(transaction);
        data.operations
            .push(format!("POST /transactions/{}", kind.path_segment()));

        Ok(())
    }

    async fn update_transaction(
        &self,
        kind: TransactionKind,
        id: &str,
        payload: &TransactionPayload,
    ) -> Result<(), ApiError> {
        let mut data = self.lock()?;
        data.check_mutation()?;

        let index = data
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(ApiError::NotFound)?;

        let transaction = data.transaction_from_payload(id.to_owned(), payload);
        data.transactions[index] = transaction;
        data.operations
            .push(format!("PUT /transactions/{}/{id}", kind.path_segment()));

        Ok(())
    }

    async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        let mut data = self.lock()?;
        data.check_mutation()?;

        let index = data
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(ApiError::NotFound)?;

        data.transactions.remove(index);
        data.operations.push(format!("DELETE /transactions/{id}"));

        Ok(())
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, ApiError> {
        Ok(self.lock()?.accounts.clone())
    }

    async fn get_default_account(&self) -> Result<Option<Account>, ApiError> {
        let data = self.lock()?;

        let account = data.default_account_id.as_ref().and_then(|default_id| {
            data.accounts
                .iter()
                .find(|account| &account.id == default_id)
                .cloned()
        });

        Ok(account)
    }

    async fn get_categories(&self, category_type: CategoryType) -> Result<Vec<Category>, ApiError> {
        let categories = self
            .lock()?
            .categories
            .iter()
            .filter(|category| category.category_type == category_type)
            .cloned()
            .collect();

        Ok(categories)
    }

    async fn get_default_category(
        &self,
        category_type: CategoryType,
    ) -> Result<Option<Category>, ApiError> {
        let data = self.lock()?;

        let category = data
            .default_category_ids
            .get(&category_type.code())
            .and_then(|default_id| {
                data.categories
                    .iter()
                    .find(|category| &category.id == default_id)
                    .cloned()
            });

        Ok(category)
    }

    async fn get_debt_records(&self, debt_id: &str) -> Result<Vec<DebtRecord>, ApiError> {
        self.lock()?
            .debt_records
            .get(debt_id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn get_debt_record(&self, record_id: &str) -> Result<DebtRecord, ApiError> {
        self.lock()?
            .debt_records
            .values()
            .flatten()
            .find(|record| record.id == record_id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_debt_record(
        &self,
        debt_id: &str,
        payload: &DebtRecordPayload,
    ) -> Result<(), ApiError> {
        let mut data = self.lock()?;
        data.check_mutation()?;

        if !data.debt_records.contains_key(debt_id) {
            return Err(ApiError::NotFound);
        }

        let id = data.next_id("rec");
        let record = record_from_payload(id, payload);

        if let Some(records) = data.debt_records.get_mut(debt_id) {
            records.push(record);
        }
        data.operations.push(format!(
            "POST /debts/{debt_id}/records/{}",
            payload.mode.path_segment()
        ));

        Ok(())
    }

    async fn update_debt_record(
        &self,
        record_id: &str,
        payload: &DebtRecordPayload,
    ) -> Result<(), ApiError> {
        let mut data = self.lock()?;
        data.check_mutation()?;

        let record = data
            .debt_records
            .values_mut()
            .flatten()
            .find(|record| record.id == record_id)
            .ok_or(ApiError::NotFound)?;

        *record = record_from_payload(record_id.to_owned(), payload);
        data.operations.push(format!(
            "PUT /debts/records/{}/{record_id}",
            payload.mode.path_segment()
        ));

        Ok(())
    }
}

fn record_from_payload(id: String, payload: &DebtRecordPayload) -> DebtRecord {
    DebtRecord {
        id,
        mode: payload.mode,
        date: payload.date,
        time: Some(payload.time),
        amount: payload.amount,
        description: payload.description.clone(),
        account_id: payload.account_id.clone(),
        payment_mode_id: payload.payment_mode_id.clone(),
    }
}
