use budget_tracker::{
    budget::{
        BudgetData, ExpenseLimitInput, LimitPeriod, SavingsGoalInput, TransactionInput,
        TransactionKind,
    },
    storage::{BudgetStore, JsonStorage, StorageBackend},
};
use chrono::NaiveDate;
use std::fs;
use tempfile::{tempdir, TempDir};
use uuid::Uuid;

fn store_with_temp_dir() -> (BudgetStore, TempDir) {
    let temp = tempdir().expect("temp dir");
    let backend = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    (BudgetStore::new(Box::new(backend)), temp)
}

fn sample_input(kind: TransactionKind, amount: f64, category: &str) -> TransactionInput {
    TransactionInput {
        kind,
        amount,
        category: category.into(),
        description: "test entry".into(),
        date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    }
}

#[test]
fn fresh_store_loads_the_all_defaults_document() {
    let (store, _guard) = store_with_temp_dir();
    let data = store.load();
    assert_eq!(data, BudgetData::default());
    assert_eq!(data.currency, "USD");
    assert_eq!(data.monthly_budget, 0.0);
}

#[test]
fn saved_document_round_trips() {
    let (store, _guard) = store_with_temp_dir();
    store.add_transaction(sample_input(TransactionKind::Income, 2500.0, "Salary"));
    store.update_currency("EUR");
    store.update_monthly_budget(1800.0);

    let data = store.load();
    assert_eq!(data.transactions.len(), 1);
    assert_eq!(data.transactions[0].amount, 2500.0);
    assert_eq!(data.currency, "EUR");
    assert_eq!(data.monthly_budget, 1800.0);
}

#[test]
fn transactions_load_newest_first() {
    let (store, _guard) = store_with_temp_dir();
    let first = store.add_transaction(sample_input(TransactionKind::Expense, 10.0, "Food"));
    let second = store.add_transaction(sample_input(TransactionKind::Expense, 20.0, "Bills"));

    let data = store.load();
    assert_eq!(data.transactions[0].id, second.id);
    assert_eq!(data.transactions[1].id, first.id);
}

#[test]
fn deleting_a_transaction_removes_only_that_record() {
    let (store, _guard) = store_with_temp_dir();
    let keep = store.add_transaction(sample_input(TransactionKind::Expense, 10.0, "Food"));
    let doomed = store.add_transaction(sample_input(TransactionKind::Expense, 20.0, "Bills"));

    store.delete_transaction(doomed.id);
    let data = store.load();
    assert_eq!(data.transactions.len(), 1);
    assert_eq!(data.transactions[0].id, keep.id);
}

#[test]
fn deleting_an_unknown_id_leaves_the_document_unchanged() {
    let (store, _guard) = store_with_temp_dir();
    store.add_transaction(sample_input(TransactionKind::Income, 100.0, "Gift"));
    let before = store.load();
    store.delete_transaction(Uuid::new_v4());
    assert_eq!(store.load(), before);
}

#[test]
fn corrupt_document_degrades_to_defaults() {
    let temp = tempdir().expect("temp dir");
    let backend = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    fs::write(backend.document_path(), "{ this is not json").expect("write garbage");

    let store = BudgetStore::new(Box::new(backend));
    assert_eq!(store.load(), BudgetData::default());
}

#[test]
fn partial_document_is_merged_over_defaults() {
    let temp = tempdir().expect("temp dir");
    let backend = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    fs::write(
        backend.document_path(),
        r#"{"currency": "GBP", "monthlyBudget": 750}"#,
    )
    .expect("write partial document");

    let store = BudgetStore::new(Box::new(backend));
    let data = store.load();
    assert_eq!(data.currency, "GBP");
    assert_eq!(data.monthly_budget, 750.0);
    assert!(data.transactions.is_empty());
    assert!(data.savings_goals.is_empty());
}

#[test]
fn expense_limits_append_update_and_remove() {
    let (store, _guard) = store_with_temp_dir();
    let limit = store.add_expense_limit(ExpenseLimitInput {
        category: "Food".into(),
        amount: 200.0,
        period: LimitPeriod::Monthly,
        currency: "USD".into(),
    });
    let second = store.add_expense_limit(ExpenseLimitInput {
        category: "Transport".into(),
        amount: 80.0,
        period: LimitPeriod::Weekly,
        currency: "USD".into(),
    });

    // Appended, not prepended.
    let data = store.load();
    assert_eq!(data.expense_limits[0].id, limit.id);
    assert_eq!(data.expense_limits[1].id, second.id);

    assert!(store.update_expense_limit(
        limit.id,
        ExpenseLimitInput {
            category: "Food".into(),
            amount: 250.0,
            period: LimitPeriod::Monthly,
            currency: "USD".into(),
        },
    ));
    let data = store.load();
    assert_eq!(data.expense_limits[0].amount, 250.0);
    assert_eq!(data.expense_limits[0].id, limit.id);

    store.remove_expense_limit(second.id);
    assert_eq!(store.load().expense_limits.len(), 1);

    // Unknown ids: update reports false, removal is a no-op.
    assert!(!store.update_expense_limit(
        Uuid::new_v4(),
        ExpenseLimitInput {
            category: "Bills".into(),
            amount: 1.0,
            period: LimitPeriod::Daily,
            currency: "USD".into(),
        },
    ));
    store.remove_expense_limit(Uuid::new_v4());
    assert_eq!(store.load().expense_limits.len(), 1);
}

#[test]
fn savings_goals_start_at_zero_and_track_progress() {
    let (store, _guard) = store_with_temp_dir();
    let goal = store.add_savings_goal(SavingsGoalInput {
        title: "Vacation".into(),
        target_amount: 1000.0,
        target_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        currency: "USD".into(),
    });
    assert_eq!(goal.current_amount, 0.0);

    assert!(store.set_goal_progress(goal.id, 400.0));
    assert_eq!(store.load().savings_goals[0].current_amount, 400.0);

    // Updating goal fields keeps the accumulated progress.
    assert!(store.update_savings_goal(
        goal.id,
        SavingsGoalInput {
            title: "Vacation fund".into(),
            target_amount: 1200.0,
            target_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            currency: "USD".into(),
        },
    ));
    let data = store.load();
    assert_eq!(data.savings_goals[0].title, "Vacation fund");
    assert_eq!(data.savings_goals[0].target_amount, 1200.0);
    assert_eq!(data.savings_goals[0].current_amount, 400.0);

    store.remove_savings_goal(goal.id);
    assert!(store.load().savings_goals.is_empty());
}

#[test]
fn stored_document_uses_the_published_shape() {
    let temp = tempdir().expect("temp dir");
    let backend = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    let document_path = backend.document_path().to_path_buf();
    let store = BudgetStore::new(Box::new(backend));

    store.add_transaction(sample_input(TransactionKind::Expense, 45.0, "Food"));
    store.add_savings_goal(SavingsGoalInput {
        title: "Bike".into(),
        target_amount: 800.0,
        target_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        currency: "USD".into(),
    });

    let raw = fs::read_to_string(&document_path).expect("read document");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

    assert!(json.get("transactions").is_some());
    assert!(json.get("monthlyBudget").is_some());
    assert!(json.get("currency").is_some());
    assert!(json.get("expenseLimits").is_some());
    assert!(json.get("savingsGoals").is_some());
    assert_eq!(json["transactions"][0]["type"], "expense");
    assert!(json["savingsGoals"][0].get("targetAmount").is_some());
}

#[test]
fn direct_backend_save_overwrites_prior_content() {
    let temp = tempdir().expect("temp dir");
    let backend = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");

    let mut data = BudgetData::default();
    data.monthly_budget = 100.0;
    backend.save(&data).expect("first save");
    data.monthly_budget = 200.0;
    backend.save(&data).expect("second save");

    let loaded = backend.load().expect("load");
    assert_eq!(loaded.monthly_budget, 200.0);
}
