use pretty_assertions::assert_eq;

use crouton::{driver::Operation, Db, Model};
use crouton_sql::Serializer;
use tests::{init_logging, models::*, Behavior, MockConnection, MOCK_CAPABILITY};

#[tokio::test]
async fn drop_table() {
    init_logging();

    let connection = MockConnection::new(Behavior::ReturnEmpty);
    let log = connection.ops_log_handle();

    let db = Db::builder().register::<User>().connect(connection).unwrap();

    User::drop_table(&db).await.unwrap();

    // Drops travel in structured form; render the recorded operation back
    // to its description to check what the connection was asked to run.
    let op = log.last().expect("no operation recorded");
    assert!(matches!(op, Operation::DropTable(_)));

    let description =
        Serializer::new(db.schema().db.as_ref(), &MOCK_CAPABILITY).serialize_operation(&op);
    assert_eq!(description, "DROP TABLE \"Users\"");
}

#[tokio::test]
async fn drop_table_references_the_created_table_name() {
    init_logging();

    let connection = MockConnection::new(Behavior::ReturnEmpty);
    let log = connection.ops_log_handle();

    let db = Db::builder().register::<Meal>().connect(connection).unwrap();

    Meal::create_table(&db).await.unwrap();
    Meal::drop_table(&db).await.unwrap();

    let raw = log.raw().unwrap();
    let op = log.last().unwrap();
    let description =
        Serializer::new(db.schema().db.as_ref(), &MOCK_CAPABILITY).serialize_operation(&op);

    // Both statements reference the identical quoted table name.
    assert!(raw.starts_with("CREATE TABLE \"Meals\" "));
    assert_eq!(description, "DROP TABLE \"Meals\"");
}

#[tokio::test]
async fn drop_table_reports_connection_error() {
    init_logging();

    let connection = MockConnection::new(Behavior::ReturnError);
    let log = connection.ops_log_handle();

    let db = Db::builder().register::<User>().connect(connection).unwrap();

    let err = User::drop_table(&db).await.unwrap_err();
    assert!(err.is_driver_operation_failed());
    assert_eq!(log.len(), 1);
}
