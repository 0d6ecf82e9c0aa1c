//! Inspector errors / 检查器错误

use thiserror::Error;

use crate::Ty;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("table function {name}() with {arity} argument(s) does not exist")]
  NoSuchFn { name: String, arity: usize },

  #[error("{func}(): argument {idx} must be a non-NULL {expect}")]
  BadArg {
    func: &'static str,
    idx: usize,
    expect: Ty,
  },

  #[error("invalid qualified name: {0}")]
  BadName(String),

  #[error("catalog '{0}' does not exist")]
  CatalogNotFound(String),

  #[error("schema '{schema}' not found in catalog '{catalog}'")]
  SchemaNotFound { catalog: String, schema: String },

  #[error("table '{table}' not found in '{catalog}.{schema}'")]
  TableNotFound {
    catalog: String,
    schema: String,
    table: String,
  },

  #[error("Column '{column}' not found in table '{table}'")]
  ColumnNotFound { column: String, table: String },

  #[error("{func}() requires a persistent database file.\n{}", usage(.func, .attached_call))]
  InMemory {
    func: &'static str,
    /// How to call the function on an attached database
    /// 在已附加数据库上的调用方式
    attached_call: &'static str,
  },

  #[error("block_stat: {0}")]
  Block(#[from] block_stat::Error),
}

fn usage(func: &str, attached_call: &str) -> String {
  format!(
    "This tool is designed to analyze the storage of existing database files.\n\n\
     Correct usage:\n  \
       1. Open a database file directly:\n     \
          $ duckdb mydata.duckdb\n     \
          D SELECT * FROM {func}();\n\n  \
       2. Or attach a database file:\n     \
          D ATTACH 'mydata.duckdb' AS mydb;\n     \
          D USE mydb;\n     \
          D SELECT * FROM {attached_call};\n"
  )
}
