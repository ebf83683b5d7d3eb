use kennel_core::db::{open_db, open_db_in_memory};
use kennel_core::{DogRepository, SqliteDogRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_yields_usable_connection() {
    let conn = open_db_in_memory().unwrap();

    let one: i64 = conn.query_row("SELECT 1;", [], |row| row.get(0)).unwrap();
    assert_eq!(one, 1);
}

#[test]
fn opened_connections_enable_foreign_keys() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(pragma_foreign_keys(&conn), 1);
}

#[test]
fn open_db_does_not_create_application_tables() {
    let conn = open_db_in_memory().unwrap();

    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn opening_same_database_file_twice_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kennel.db");

    let conn_first = open_db(&path).unwrap();
    let repo_first = SqliteDogRepository::new(&conn_first);
    repo_first.create_table().unwrap();
    repo_first.create("Rex", "Lab").unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let repo_second = SqliteDogRepository::new(&conn_second);

    let all = repo_second.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Rex");
}

fn pragma_foreign_keys(conn: &Connection) -> i64 {
    conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap()
}
