use pretty_assertions::assert_eq;
use rowpack_core::{
    schema::{Column, ColumnId, Schema, Table, TableId},
    stmt::{Value, ValueKind, ValueRecord},
};
use rowpack_sql::{
    Adapter, InsertOptions, LiteralRowMapper, ParamRowMapper, Serializer,
};

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

fn contacts_schema() -> Schema {
    Schema::from_tables(vec![Table {
        id: TableId(0),
        name: "contacts".to_string(),
        columns: vec![
            make_column(0, 0, "first_name", ValueKind::String),
            make_column(0, 1, "age", ValueKind::I32),
        ],
    }])
}

fn rows() -> Vec<ValueRecord> {
    vec![
        ValueRecord::from_vec(vec![Value::from("Ada"), Value::I32(36)]),
        ValueRecord::from_vec(vec![Value::from("Grace"), Value::I32(45)]),
    ]
}

#[test]
fn placeholders_are_derived_from_column_and_line() {
    let schema = contacts_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let command = serializer
        .build_insert(
            TableId(0),
            &rows(),
            &InsertOptions::default(),
            &ParamRowMapper,
        )
        .unwrap();

    assert_eq!(
        command.text,
        "INSERT INTO contacts (first_name, age) VALUES\n\
         (@first_name_1, @age_1),\n\
         (@first_name_2, @age_2);"
    );
}

#[test]
fn the_bag_is_ordered_and_typed() {
    let schema = contacts_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let command = serializer
        .build_insert(
            TableId(0),
            &rows(),
            &InsertOptions::default(),
            &ParamRowMapper,
        )
        .unwrap();

    let entries: Vec<_> = command.params.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("first_name_1", &Value::from("Ada")),
            ("age_1", &Value::I32(36)),
            ("first_name_2", &Value::from("Grace")),
            ("age_2", &Value::I32(45)),
        ]
    );
}

#[test]
fn null_values_travel_through_the_bag() {
    let schema = contacts_schema();
    let adapter = Adapter::postgresql();
    let serializer = Serializer::new(&schema, &adapter);

    let rows = [ValueRecord::from_vec(vec![Value::Null, Value::I32(1)])];
    let command = serializer
        .build_insert(
            TableId(0),
            &rows,
            &InsertOptions::default(),
            &ParamRowMapper,
        )
        .unwrap();

    // Parameterized mode defers null handling to binding time.
    assert_eq!(command.params.get("first_name_1"), Some(&Value::Null));
    assert!(command.text.contains("(@first_name_1, @age_1)"));
}

#[test]
fn both_strategies_agree_on_column_order() {
    let schema = contacts_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let literal = serializer
        .build_insert(
            TableId(0),
            &rows(),
            &InsertOptions::default(),
            &LiteralRowMapper,
        )
        .unwrap();
    let parameterized = serializer
        .build_insert(
            TableId(0),
            &rows(),
            &InsertOptions::default(),
            &ParamRowMapper,
        )
        .unwrap();

    let header = |text: &str| text.lines().next().unwrap_or_default().to_string();
    assert_eq!(header(&literal.text), header(&parameterized.text));
}
