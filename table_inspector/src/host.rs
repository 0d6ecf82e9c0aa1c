//! Host database interfaces / 宿主数据库接口
//!
//! The host owns catalog, storage and block manager. Inspection only reads
//! through these traits and never mutates host state.
//! 宿主拥有目录、存储与块管理器。检查只通过这些 trait 读取，从不修改宿主状态。

use block_stat::{DbSize, Index, LogicalType, MetaBlockInfo, SegInfo};

/// Attached database flags / 已附加数据库标志
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DbKind {
  pub system: bool,
  pub temporary: bool,
  pub in_memory: bool,
}

impl DbKind {
  /// User database backed by a file / 由文件支撑的用户数据库
  #[inline]
  pub fn is_file(&self) -> bool {
    !(self.system || self.temporary || self.in_memory)
  }
}

/// Column definition / 列定义
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
  pub name: String,
  pub ty: LogicalType,
  /// Physical storage index, the `column_id` of its segments
  /// 物理存储下标，即其段的 `column_id`
  pub physical: u64,
}

pub trait Host {
  type Catalog: Catalog;

  /// `None` selects the active catalog / `None` 表示当前活动目录
  fn catalog(&self, name: Option<&str>) -> Option<&Self::Catalog>;

  /// Every attached catalog / 全部已附加目录
  fn catalog_li(&self) -> Vec<&Self::Catalog>;
}

pub trait Catalog {
  type Schema: Schema;

  fn name(&self) -> &str;

  fn kind(&self) -> DbKind;

  fn schema_li(&self) -> Vec<&Self::Schema>;

  fn schema(&self, name: &str) -> Option<&Self::Schema> {
    self
      .schema_li()
      .into_iter()
      .find(|s| s.name().eq_ignore_ascii_case(name))
  }

  /// Bytes per physical block / 每个物理块的字节数
  fn block_alloc_size(&self) -> u64;

  fn db_size(&self) -> DbSize;

  /// One entry per physical metadata block / 每个物理元数据块一项
  fn meta_block_li(&self) -> Vec<MetaBlockInfo>;
}

pub trait Schema {
  type Table: Table;

  fn name(&self) -> &str;

  /// Built-in system schema / 内置系统 schema
  fn is_internal(&self) -> bool;

  fn table_li(&self) -> Vec<&Self::Table>;

  fn table(&self, name: &str) -> Option<&Self::Table> {
    self
      .table_li()
      .into_iter()
      .find(|t| t.name().eq_ignore_ascii_case(name))
  }
}

pub trait Table {
  fn name(&self) -> &str;

  fn column_li(&self) -> &[ColumnDef];

  fn column(&self, name: &str) -> Option<&ColumnDef> {
    self
      .column_li()
      .iter()
      .find(|c| c.name.eq_ignore_ascii_case(name))
  }

  /// Every segment of every column, row-group order
  /// 全部列的全部段，按行组顺序
  fn seg_li(&self) -> Vec<SegInfo>;

  fn row_count(&self) -> u64;

  /// Tables without native storage have no indexes
  /// 无原生存储的表没有索引
  fn index_li(&self) -> Vec<Index> {
    Vec::new()
  }
}
