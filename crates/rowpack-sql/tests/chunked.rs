use pretty_assertions::assert_eq;
use rowpack_core::{
    schema::{Column, ColumnId, Schema, Table, TableId},
    stmt::{Value, ValueKind, ValueRecord},
};
use rowpack_sql::{Adapter, InsertOptions, LiteralRowMapper, Serializer};

fn counters_schema() -> Schema {
    Schema::from_tables(vec![Table {
        id: TableId(0),
        name: "counters".to_string(),
        columns: vec![Column {
            id: ColumnId {
                table: TableId(0),
                index: 0,
            },
            name: "n".to_string(),
            ty: ValueKind::I64,
            nullable: false,
            primary_key: false,
            generated: false,
        }],
    }])
}

fn rows(count: i64) -> Vec<ValueRecord> {
    (0..count)
        .map(|n| ValueRecord::from_vec(vec![Value::I64(n)]))
        .collect()
}

#[test]
fn splits_into_fixed_size_slices() {
    let schema = counters_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let commands = serializer
        .build_insert_chunked(
            TableId(0),
            &rows(5),
            &InsertOptions::default(),
            &LiteralRowMapper,
            2,
        )
        .unwrap();

    assert_eq!(commands.len(), 3);
    assert_eq!(
        commands[0].text,
        "INSERT INTO counters (n) VALUES\n(0),\n(1);"
    );
    assert_eq!(
        commands[2].text,
        "INSERT INTO counters (n) VALUES\n(4);"
    );
}

#[test]
fn an_exact_multiple_produces_full_chunks_only() {
    let schema = counters_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let commands = serializer
        .build_insert_chunked(
            TableId(0),
            &rows(4),
            &InsertOptions::default(),
            &LiteralRowMapper,
            2,
        )
        .unwrap();

    assert_eq!(commands.len(), 2);
    for command in &commands {
        assert_eq!(command.text.matches("\n(").count(), 2);
    }
}

#[test]
fn zero_chunk_size_is_rejected() {
    let schema = counters_schema();
    let adapter = Adapter::mysql();
    let serializer = Serializer::new(&schema, &adapter);

    let err = serializer
        .build_insert_chunked(
            TableId(0),
            &rows(3),
            &InsertOptions::default(),
            &LiteralRowMapper,
            0,
        )
        .unwrap_err();

    assert!(err.is_invalid_statement());
}
