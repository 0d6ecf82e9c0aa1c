//! inspect_storage_summary([database_name])
//!
//! Splits a database file into table_data, index, metadata and free_blocks.
//! 将数据库文件划分为表数据、索引、元数据与空闲块。

use block_stat::{BlockSet, Summary, SummaryEntry};
use log::debug;
use size_fmt::format_size;

use super::{file_catalog, user_table_li};
use crate::{Catalog, Col, Cursor, Host, Result, Row, Table, Val};

pub const NAME: &str = "inspect_storage_summary";

impl Row for SummaryEntry {
  const COL_LI: &'static [Col] = &[
    Col::str("component"),
    Col::str("size"),
    Col::str("percentage"),
    Col::big("block_count"),
  ];

  fn write(&self, out: &mut Vec<Val>) {
    out.push(self.component.as_str().into());
    out.push(format_size(self.size_bytes).into());
    out.push(self.percentage.as_str().into());
    out.push(self.block_count.into());
  }
}

/// Distinct blocks of every user table / 全部用户表的去重块
pub fn table_data_block_set<H: Host>(catalog: &H::Catalog) -> BlockSet {
  let mut set = BlockSet::new();
  for (_, table) in user_table_li::<H>(catalog) {
    set.extend(&table.seg_li());
  }
  set
}

/// Partition the blocks of `database`, `None` for the active catalog
/// 划分 `database` 的块，`None` 为当前活动目录
pub fn summary<H: Host>(host: &H, database: Option<&str>) -> Result<Summary> {
  let catalog = file_catalog(host, database, NAME, "inspect_storage_summary('mydb')")?;
  let db = catalog.db_size();
  let meta_li = catalog.meta_block_li();
  let table_data = table_data_block_set::<H>(catalog);

  debug!(
    "{NAME}: {} total {} free {} metadata {} table_data {}",
    catalog.name(),
    db.total_blocks,
    db.free_blocks,
    meta_li.len(),
    table_data.len()
  );
  Ok(Summary::from_db(&db, &meta_li, &table_data)?)
}

pub fn init<H: Host>(host: &H, database: Option<&str>) -> Result<Cursor<SummaryEntry>> {
  Ok(Cursor::new(summary(host, database)?.entry_li()))
}
