//! inspect_database()
//!
//! Every user table of the active catalog with its persisted size, largest
//! first. Size = distinct data blocks * block size + persisted index size.
//! 当前目录的全部用户表及持久化大小，从大到小。

use block_stat::{BlockSet, IndexSizeMode, table_index_size};
use log::debug;
use size_fmt::format_size;

use super::{file_catalog, user_table_li};
use crate::{Catalog, Col, Cursor, Host, Result, Row, Schema, Table, Val};

pub const NAME: &str = "inspect_database";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
  pub database_name: String,
  pub schema_name: String,
  pub table_name: String,
  pub row_count: u64,
  pub column_count: u64,
  pub data_bytes: u64,
  pub index_bytes: u64,
}

impl TableRow {
  #[inline]
  pub fn size_bytes(&self) -> u64 {
    self.data_bytes + self.index_bytes
  }
}

impl Row for TableRow {
  const COL_LI: &'static [Col] = &[
    Col::str("database_name"),
    Col::str("schema_name"),
    Col::str("table_name"),
    Col::big("row_count"),
    Col::big("column_count"),
    Col::big("size_bytes"),
    Col::str("size_format"),
  ];

  fn write(&self, out: &mut Vec<Val>) {
    out.push(self.database_name.as_str().into());
    out.push(self.schema_name.as_str().into());
    out.push(self.table_name.as_str().into());
    out.push(self.row_count.into());
    out.push(self.column_count.into());
    out.push(self.size_bytes().into());
    out.push(format_size(self.size_bytes()).into());
  }
}

pub fn init<H: Host>(host: &H, index_size: IndexSizeMode) -> Result<Cursor<TableRow>> {
  let catalog = file_catalog(host, None, NAME, "inspect_database()")?;
  let block_alloc_size = catalog.block_alloc_size();

  let mut li: Vec<TableRow> = user_table_li::<H>(catalog)
    .into_iter()
    .map(|(schema, table)| TableRow {
      database_name: catalog.name().into(),
      schema_name: schema.name().into(),
      table_name: table.name().into(),
      row_count: table.row_count(),
      column_count: table.column_li().len() as u64,
      data_bytes: BlockSet::from_seg_li(&table.seg_li()).bytes(block_alloc_size),
      index_bytes: table_index_size(&table.index_li(), block_alloc_size, index_size),
    })
    .collect();

  // Stable, ties keep catalog order / 稳定排序，相等时保持目录顺序
  li.sort_by(|a, b| b.size_bytes().cmp(&a.size_bytes()));

  debug!("{NAME}: {} tables in {}", li.len(), catalog.name());
  Ok(Cursor::new(li))
}
