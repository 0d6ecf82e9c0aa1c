//! inspect_storage()
//!
//! File and WAL size of every attached database backed by a file.
//! 每个由文件支撑的已附加数据库的文件与 WAL 大小。

use log::debug;
use size_fmt::format_size;

use crate::{Catalog, Col, Cursor, Host, Result, Row, Val};

pub const NAME: &str = "inspect_storage";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRow {
  pub database_name: String,
  pub file_bytes: u64,
  pub wal_bytes: u64,
}

impl Row for StorageRow {
  const COL_LI: &'static [Col] = &[
    Col::str("database_name"),
    Col::str("database_file_size"),
    Col::str("wal_file_size"),
  ];

  fn write(&self, out: &mut Vec<Val>) {
    out.push(self.database_name.as_str().into());
    out.push(format_size(self.file_bytes).into());
    out.push(format_size(self.wal_bytes).into());
  }
}

/// System, temporary and in-memory databases are skipped
/// 跳过系统、临时与内存数据库
pub fn init<H: Host>(host: &H) -> Result<Cursor<StorageRow>> {
  let li: Vec<_> = host
    .catalog_li()
    .into_iter()
    .filter(|c| c.kind().is_file())
    .map(|c| {
      let size = c.db_size();
      StorageRow {
        database_name: c.name().into(),
        file_bytes: size.bytes,
        wal_bytes: size.wal_size,
      }
    })
    .collect();

  debug!("{NAME}: {} databases", li.len());
  Ok(Cursor::new(li))
}
