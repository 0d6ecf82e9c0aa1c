//! In-memory host for driving table functions in tests
//! 测试用内存宿主

#![allow(dead_code)]

use block_stat::{DbSize, INVALID_BLOCK, Index, LogicalType, MetaBlockInfo, SegInfo};
use table_inspector::{Catalog, ColumnDef, DbKind, Host, Schema, Table};

pub const BLOCK: u64 = 262_144;

#[derive(Debug, Default)]
pub struct MemTable {
  pub name: String,
  pub column_li: Vec<ColumnDef>,
  pub seg_li: Vec<SegInfo>,
  pub row_count: u64,
  pub index_li: Vec<Index>,
}

impl Table for MemTable {
  fn name(&self) -> &str {
    &self.name
  }

  fn column_li(&self) -> &[ColumnDef] {
    &self.column_li
  }

  fn seg_li(&self) -> Vec<SegInfo> {
    self.seg_li.clone()
  }

  fn row_count(&self) -> u64 {
    self.row_count
  }

  fn index_li(&self) -> Vec<Index> {
    self.index_li.clone()
  }
}

#[derive(Debug, Default)]
pub struct MemSchema {
  pub name: String,
  pub internal: bool,
  pub table_li: Vec<MemTable>,
}

impl Schema for MemSchema {
  type Table = MemTable;

  fn name(&self) -> &str {
    &self.name
  }

  fn is_internal(&self) -> bool {
    self.internal
  }

  fn table_li(&self) -> Vec<&MemTable> {
    self.table_li.iter().collect()
  }
}

#[derive(Debug, Default)]
pub struct MemCatalog {
  pub name: String,
  pub kind: DbKind,
  pub schema_li: Vec<MemSchema>,
  pub db_size: DbSize,
  pub meta_li: Vec<MetaBlockInfo>,
}

impl Catalog for MemCatalog {
  type Schema = MemSchema;

  fn name(&self) -> &str {
    &self.name
  }

  fn kind(&self) -> DbKind {
    self.kind
  }

  fn schema_li(&self) -> Vec<&MemSchema> {
    self.schema_li.iter().collect()
  }

  fn block_alloc_size(&self) -> u64 {
    self.db_size.block_size
  }

  fn db_size(&self) -> DbSize {
    self.db_size
  }

  fn meta_block_li(&self) -> Vec<MetaBlockInfo> {
    self.meta_li.clone()
  }
}

#[derive(Debug, Default)]
pub struct MemHost {
  pub catalog_li: Vec<MemCatalog>,
  pub active: usize,
}

impl Host for MemHost {
  type Catalog = MemCatalog;

  fn catalog(&self, name: Option<&str>) -> Option<&MemCatalog> {
    match name {
      None => self.catalog_li.get(self.active),
      Some(name) => self
        .catalog_li
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name)),
    }
  }

  fn catalog_li(&self) -> Vec<&MemCatalog> {
    self.catalog_li.iter().collect()
  }
}

pub fn col(name: &str, ty: LogicalType, physical: u64) -> ColumnDef {
  ColumnDef {
    name: name.into(),
    ty,
    physical,
  }
}

pub fn seg(column_id: u64, row_group: u64, block_id: i64, block_offset: u64) -> SegInfo {
  SegInfo {
    row_group,
    column_id,
    column_path: format!("[{column_id}]"),
    count: 1000,
    compression: "BitPacking".into(),
    persistent: true,
    block_id,
    block_offset,
    ..Default::default()
  }
}

pub fn validity(column_id: u64, row_group: u64, block_id: i64, block_offset: u64) -> SegInfo {
  SegInfo {
    column_path: format!("[{column_id}, 0]"),
    compression: "Roaring".into(),
    ..seg(column_id, row_group, block_id, block_offset)
  }
}

pub fn constant(column_id: u64, row_group: u64) -> SegInfo {
  SegInfo {
    compression: "Constant".into(),
    persistent: false,
    ..seg(column_id, row_group, INVALID_BLOCK, 0)
  }
}

pub fn file_db_size(total_blocks: u64, free_blocks: u64) -> DbSize {
  DbSize {
    bytes: total_blocks * BLOCK,
    block_size: BLOCK,
    total_blocks,
    used_blocks: total_blocks - free_blocks,
    free_blocks,
    wal_size: 0,
  }
}

pub fn file_kind() -> DbKind {
  DbKind::default()
}

pub fn mem_kind() -> DbKind {
  DbKind {
    in_memory: true,
    ..Default::default()
  }
}
