use pretty_assertions::assert_eq;

use crouton::{Db, Model};
use tests::{init_logging, models::*, Behavior, MockConnection};

#[tokio::test]
async fn generation_is_idempotent() {
    init_logging();

    let connection = MockConnection::new(Behavior::ReturnEmpty);
    let log = connection.ops_log_handle();

    let db = Db::builder().register::<User>().connect(connection).unwrap();

    User::create_table(&db).await.unwrap();
    User::create_table(&db).await.unwrap();

    let raw = log.raw_all();
    assert_eq!(raw.len(), 2);
    assert_eq!(raw[0], raw[1]);
}

#[tokio::test]
async fn concurrent_generation_yields_identical_statements() {
    init_logging();

    let connection = MockConnection::new(Behavior::ReturnEmpty);
    let log = connection.ops_log_handle();

    let db = Db::builder()
        .register::<User>()
        .register::<Grade>()
        .connect(connection)
        .unwrap();

    // Generation consults only the immutable schema, so handle clones may
    // issue lifecycle calls from concurrent tasks.
    let mut handles = Vec::new();
    for _ in 0..4 {
        let db = db.clone();
        handles.push(tokio::spawn(async move { User::create_table(&db).await }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let raw = log.raw_all();
    assert_eq!(raw.len(), 4);
    assert!(raw.iter().all(|sql| sql == &raw[0]));
}

#[tokio::test]
async fn columns_follow_field_declaration_order() {
    init_logging();

    let connection = MockConnection::new(Behavior::ReturnEmpty);
    let log = connection.ops_log_handle();

    let db = Db::builder()
        .register::<Grade>()
        .connect(connection)
        .unwrap();

    Grade::create_table(&db).await.unwrap();

    let raw = log.raw().unwrap();
    let grade = raw.find("\"grade\"").unwrap();
    let course = raw.find("\"course\"").unwrap();
    let my_id = raw.find("\"MyId\"").unwrap();

    // Declared fields first, in order; the synthesized identifier last.
    assert!(grade < course && course < my_id);

    // The descriptor table agrees with the rendered order.
    let model = db.schema().app.model(Grade::id());
    let fields: Vec<_> = model.fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(fields, ["grade", "course"]);
}

#[tokio::test]
async fn table_name_prefix_applies_to_generated_statements() {
    init_logging();

    let connection = MockConnection::new(Behavior::ReturnEmpty);
    let log = connection.ops_log_handle();

    let db = Db::builder()
        .table_name_prefix("test_")
        .register::<User>()
        .connect(connection)
        .unwrap();

    User::create_table(&db).await.unwrap();

    assert!(log.raw().unwrap().starts_with("CREATE TABLE \"test_Users\" ("));
}
