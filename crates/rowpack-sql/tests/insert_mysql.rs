use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rowpack_core::{
    schema::{Column, ColumnId, Schema, Table, TableId},
    stmt::{Value, ValueEnum, ValueKind, ValueRecord},
};
use rowpack_sql::{Adapter, ExecutionFlags, InsertOptions, LiteralRowMapper, Serializer};
use uuid::Uuid;

fn make_column(table: usize, index: usize, name: &str, ty: ValueKind) -> Column {
    Column {
        id: ColumnId {
            table: TableId(table),
            index,
        },
        name: name.to_string(),
        ty,
        nullable: false,
        primary_key: false,
        generated: false,
    }
}

fn people_schema() -> Schema {
    let mut id = make_column(0, 0, "id", ValueKind::I32);
    id.primary_key = true;
    id.generated = true;

    Schema::from_tables(vec![Table {
        id: TableId(0),
        name: "people".to_string(),
        columns: vec![
            id,
            make_column(0, 1, "ref", ValueKind::Uuid),
            make_column(0, 2, "first_name", ValueKind::String),
            make_column(0, 3, "last_name", ValueKind::String),
            make_column(0, 4, "gender", ValueKind::Enum),
            make_column(0, 5, "age", ValueKind::I32),
            make_column(0, 6, "birth_day", ValueKind::DateTime),
        ],
    }])
}

fn marcos() -> ValueRecord {
    ValueRecord::from_vec(vec![
        Value::Uuid(Uuid::parse_str("971af92c-f70e-4916-99e0-03c916cf8b70").unwrap()),
        Value::from("Marcos"),
        Value::from("Hilll"),
        Value::Enum(ValueEnum::new(0)),
        Value::I32(46),
        Value::DateTime(
            NaiveDate::from_ymd_opt(1952, 4, 18)
                .unwrap()
                .and_hms_micro_opt(19, 32, 19, 440141)
                .unwrap(),
        ),
    ])
}

#[test]
fn single_row_literal() {
    let schema = people_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let command = serializer
        .build_insert(
            TableId(0),
            &[marcos()],
            &InsertOptions::default(),
            &LiteralRowMapper,
        )
        .unwrap();

    assert_eq!(
        command.text,
        "INSERT INTO people (ref, first_name, last_name, gender, age, birth_day) VALUES\n\
         ('971af92c-f70e-4916-99e0-03c916cf8b70', 'Marcos', 'Hilll', 0, 46, '1952-04-18 19:32:19.440141');"
    );
    assert!(command.params.is_empty());
}

#[test]
fn rows_are_separated_and_nulls_are_literal() {
    let schema = Schema::from_tables(vec![Table {
        id: TableId(0),
        name: "user_log".to_string(),
        columns: vec![
            make_column(0, 0, "increment", ValueKind::I64),
            make_column(0, 1, "note", ValueKind::String),
        ],
    }]);
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let rows = [
        ValueRecord::from_vec(vec![Value::I64(1), Value::from("first")]),
        ValueRecord::from_vec(vec![Value::I64(2), Value::Null]),
    ];
    let command = serializer
        .build_insert(TableId(0), &rows, &InsertOptions::default(), &LiteralRowMapper)
        .unwrap();

    assert_eq!(
        command.text,
        "INSERT INTO user_log (increment, note) VALUES\n(1, 'first'),\n(2, NULL);"
    );
}

#[test]
fn ignore_errors_adds_the_header_modifier() {
    let schema = people_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let options = InsertOptions {
        flags: ExecutionFlags::IGNORE_ERRORS,
        ..Default::default()
    };
    let command = serializer
        .build_insert(TableId(0), &[marcos()], &options, &LiteralRowMapper)
        .unwrap();

    assert!(command.text.starts_with("INSERT IGNORE INTO people ("));
    assert!(!command.text.contains("ON DUPLICATE KEY UPDATE"));
}

#[test]
fn update_if_exists_updates_every_non_key_column() {
    let schema = people_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let mut row = marcos();
    row.fields.insert(0, Value::I32(7));
    let mut second = marcos();
    second.fields.insert(0, Value::I32(7));

    let options = InsertOptions {
        flags: ExecutionFlags::INSERT_GENERATED_KEYS | ExecutionFlags::UPDATE_IF_EXISTS,
        ..Default::default()
    };
    let command = serializer
        .build_insert(TableId(0), &[row, second], &options, &LiteralRowMapper)
        .unwrap();

    assert!(command
        .text
        .contains("INSERT INTO people (id, ref, first_name, last_name, gender, age, birth_day)"));
    assert!(command.text.ends_with(
        "\nON DUPLICATE KEY UPDATE ref = VALUES(ref), first_name = VALUES(first_name), \
         last_name = VALUES(last_name), gender = VALUES(gender), age = VALUES(age), \
         birth_day = VALUES(birth_day);"
    ));
}

#[test]
fn explicit_update_set_overrides_the_default_rule() {
    let schema = people_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let options = InsertOptions {
        flags: ExecutionFlags::UPDATE_IF_EXISTS,
        columns_to_update: Some(&["age"]),
        ..Default::default()
    };
    let command = serializer
        .build_insert(TableId(0), &[marcos()], &options, &LiteralRowMapper)
        .unwrap();

    assert!(command
        .text
        .ends_with("\nON DUPLICATE KEY UPDATE age = VALUES(age);"));
}

#[test]
fn strings_are_escaped_for_mysql() {
    let schema = Schema::from_tables(vec![Table {
        id: TableId(0),
        name: "notes".to_string(),
        columns: vec![make_column(0, 0, "body", ValueKind::String)],
    }]);
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let rows = [ValueRecord::from_vec(vec![Value::from(
        "it's a \"test\"\nwith\tspecials\\\u{1a}\0",
    )])];
    let command = serializer
        .build_insert(TableId(0), &rows, &InsertOptions::default(), &LiteralRowMapper)
        .unwrap();

    assert_eq!(
        command.text,
        "INSERT INTO notes (body) VALUES\n\
         ('it\\'s a \\\"test\\\"\\nwith\\tspecials\\\\\\Z\\0');"
    );
}

#[test]
fn empty_row_sequence_is_rejected() {
    let schema = people_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let err = serializer
        .build_insert(
            TableId(0),
            &[],
            &InsertOptions::default(),
            &LiteralRowMapper,
        )
        .unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn row_arity_must_match_the_column_set() {
    let schema = people_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let short = ValueRecord::from_vec(vec![Value::from("Marcos")]);
    let err = serializer
        .build_insert(
            TableId(0),
            &[short],
            &InsertOptions::default(),
            &LiteralRowMapper,
        )
        .unwrap_err();

    assert!(err.is_invalid_statement());
}
