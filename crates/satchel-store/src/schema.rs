/// SQL for the key-value table and its insert statement.
/// The table is untyped on purpose: both columns hold whatever text the
/// caller provides, with no primary key, so duplicate keys append rows.
pub(crate) const CREATE_TABLE: &str = "CREATE TABLE kv(key, value)";

pub(crate) const INSERT: &str = "INSERT INTO kv(key, value) VALUES(?1, ?2)";
