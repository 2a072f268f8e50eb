use rust_decimal::Decimal;
use solid_principles::{
    ConsoleTransactionRepository, InMemoryTransactionRepository, PositiveAmountValidator, Result,
    SolidError, TransactionRepository, TransactionService, TransactionValidator, UserId,
};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingRepository {
    calls: Mutex<Vec<(UserId, Decimal)>>,
}

impl RecordingRepository {
    fn calls(&self) -> Vec<(UserId, Decimal)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TransactionRepository for RecordingRepository {
    fn save(&self, user_id: &UserId, value: Decimal) -> Result<()> {
        self.calls.lock().unwrap().push((user_id.clone(), value));
        Ok(())
    }
}

fn amount(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn test_positive_amount_is_saved_unchanged() {
    let service = TransactionService::new(PositiveAmountValidator, RecordingRepository::default());

    service
        .process_transaction(&UserId::from("u1"), amount("100.00"))
        .unwrap();

    let calls = service.repository().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.as_str(), "u1");
    assert_eq!(calls[0].1, amount("100.00"));
    assert_eq!(calls[0].1.to_string(), "100.00");
}

#[test]
fn test_zero_amount_is_not_saved() {
    let service = TransactionService::new(PositiveAmountValidator, RecordingRepository::default());

    service
        .process_transaction(&UserId::from("u1"), Decimal::ZERO)
        .unwrap();

    assert!(service.repository().calls().is_empty());
}

#[test]
fn test_negative_amount_is_not_saved() {
    let service = TransactionService::new(PositiveAmountValidator, RecordingRepository::default());

    service
        .process_transaction(&UserId::from("u1"), amount("-5.50"))
        .unwrap();

    assert!(service.repository().calls().is_empty());
}

#[test]
fn test_non_positive_amounts_never_reach_repository() {
    let service = TransactionService::new(PositiveAmountValidator, RecordingRepository::default());
    let id = UserId::generate();

    for raw in ["0", "-0.01", "-1", "-100000.5", "0.00"] {
        service.process_transaction(&id, amount(raw)).unwrap();
    }
    for raw in ["0.01", "1", "99999.99"] {
        service.process_transaction(&id, amount(raw)).unwrap();
    }

    let saved: Vec<Decimal> = service.repository().calls().into_iter().map(|c| c.1).collect();
    assert_eq!(saved, vec![amount("0.01"), amount("1"), amount("99999.99")]);
}

#[test]
fn test_service_works_with_borrowed_collaborators() {
    let validator = PositiveAmountValidator;
    let repository = RecordingRepository::default();

    {
        let service = TransactionService::new(&validator, &repository);
        service
            .process_transaction(&UserId::from("u1"), amount("100.00"))
            .unwrap();
    }

    assert_eq!(repository.calls().len(), 1);
}

#[test]
fn test_alternate_collaborators_substitute_without_changes() {
    struct EvenCentsOnly;

    impl TransactionValidator for EvenCentsOnly {
        fn validate(&self, value: Decimal) -> bool {
            (value * Decimal::ONE_HUNDRED) % Decimal::TWO == Decimal::ZERO
        }
    }

    let store = Arc::new(InMemoryTransactionRepository::new());
    let validator: Box<dyn TransactionValidator> = Box::new(EvenCentsOnly);
    let repository: Box<dyn TransactionRepository> = Box::new(Arc::clone(&store));
    let service = TransactionService::new(validator, repository);

    service.process_transaction(&UserId::from("u1"), amount("0.02")).unwrap();
    service.process_transaction(&UserId::from("u1"), amount("0.03")).unwrap();

    let saved: Vec<Decimal> = store.records().into_iter().map(|r| r.value).collect();
    assert_eq!(saved, vec![amount("0.02")]);
}

#[test]
fn test_console_repository_substitutes_for_recorder() {
    let service = TransactionService::new(
        PositiveAmountValidator,
        ConsoleTransactionRepository::new(Vec::new()),
    );

    service.process_transaction(&UserId::from("u1"), amount("100.00")).unwrap();
    service.process_transaction(&UserId::from("u1"), amount("-5.50")).unwrap();

    let (_, console) = service.into_parts();
    let output = String::from_utf8(console.into_inner().unwrap()).unwrap();
    assert_eq!(output, "Saving transaction from user u1 with value 100.00\n");
}

#[test]
fn test_repository_failure_reaches_caller() {
    struct Unavailable;

    impl TransactionRepository for Unavailable {
        fn save(&self, _user_id: &UserId, _value: Decimal) -> Result<()> {
            Err(SolidError::PersistenceError {
                message: "connection refused".to_string(),
            })
        }
    }

    let service = TransactionService::new(PositiveAmountValidator, Unavailable);

    let err = service
        .process_transaction(&UserId::from("u1"), amount("10"))
        .unwrap_err();
    assert!(err.to_string().contains("connection refused"));

    // Rejected amounts never reach the failing backend.
    assert!(service
        .process_transaction(&UserId::from("u1"), amount("-10"))
        .is_ok());
}

#[test]
fn test_concurrent_calls_share_one_service() {
    let repository = Arc::new(InMemoryTransactionRepository::new());
    let service = Arc::new(TransactionService::new(
        PositiveAmountValidator,
        Arc::clone(&repository),
    ));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                let id = UserId::from(format!("user-{}", i));
                for n in -2..3 {
                    service.process_transaction(&id, Decimal::from(n)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Only 1 and 2 pass per thread.
    assert_eq!(repository.len(), 16);
}

#[test]
fn test_batch_reports_accepted_count() {
    let service = TransactionService::new(PositiveAmountValidator, InMemoryTransactionRepository::new());
    let batch = vec![
        (UserId::from("a"), amount("10")),
        (UserId::from("b"), amount("0")),
        (UserId::from("c"), amount("-3")),
        (UserId::from("d"), amount("0.5")),
    ];

    assert_eq!(service.process_batch(&batch).unwrap(), 2);
    let ids: Vec<String> = service
        .repository()
        .records()
        .into_iter()
        .map(|r| r.user_id.to_string())
        .collect();
    assert_eq!(ids, vec!["a", "d"]);
}
