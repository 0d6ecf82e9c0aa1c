//! inspect_column(database_name, table_name, column_name)
//!
//! Per-segment storage of one column: compression, compressed size and an
//! estimate of the decompressed size.
//! 单列的逐段存储：压缩方式、压缩大小与解压大小估算。

use block_stat::{ColSeg, LogicalType, col_seg_li, est_decompressed};
use log::debug;
use size_fmt::format_size;

use super::{TableOf, catalog};
use crate::{Catalog, Col, Cursor, Error, Host, QualifiedName, Result, Row, Schema, Table, Val};

pub const NAME: &str = "inspect_column";

/// Shown when the decompressed size cannot be estimated / 无法估算解压大小时显示
pub const NA: &str = "N/A";

/// Resolved target column / 已解析的目标列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBind {
  pub catalog: String,
  pub schema: String,
  pub table: String,
  pub column: String,
  pub column_id: u64,
  pub ty: LogicalType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
  pub column_name: String,
  pub column_type: LogicalType,
  pub seg: ColSeg,
}

impl Row for ColumnRow {
  const COL_LI: &'static [Col] = &[
    Col::big("row_group_id"),
    Col::str("column_name"),
    Col::str("column_type"),
    Col::str("compression"),
    Col::str("compressed_size"),
    Col::str("estimated_decompressed_size"),
    Col::big("row_count"),
  ];

  fn write(&self, out: &mut Vec<Val>) {
    let seg = &self.seg;
    out.push(seg.row_group.into());
    out.push(self.column_name.as_str().into());
    out.push(self.column_type.to_string().into());
    out.push(seg.compression.as_str().into());
    // Primary block part plus overflow blocks / 主块部分加溢出块
    out.push(format_size(seg.total()).into());
    out.push(match est_decompressed(&self.column_type, seg.count) {
      Some(n) => format_size(n).into(),
      None => NA.into(),
    });
    out.push(seg.count.into());
  }
}

fn find_table<'a, H: Host>(
  catalog: &'a H::Catalog,
  schema: &str,
  table: &str,
) -> Result<&'a TableOf<H>> {
  catalog
    .schema(schema)
    .ok_or_else(|| Error::SchemaNotFound {
      catalog: catalog.name().into(),
      schema: schema.into(),
    })?
    .table(table)
    .ok_or_else(|| Error::TableNotFound {
      catalog: catalog.name().into(),
      schema: schema.into(),
      table: table.into(),
    })
}

/// Resolve database, table (optionally `schema.table`) and column
/// 解析数据库、表（可为 `schema.table`）与列
pub fn bind<H: Host>(host: &H, database: &str, table: &str, column: &str) -> Result<ColumnBind> {
  let qname = QualifiedName::parse(table)?;
  let database = if database.is_empty() {
    qname.catalog.as_deref()
  } else {
    Some(database)
  };

  let catalog = catalog(host, database)?;
  let schema = qname.schema_or_default();
  let entry = find_table::<H>(catalog, schema, &qname.name)?;

  let col = entry.column(column).ok_or_else(|| Error::ColumnNotFound {
    column: column.into(),
    table: qname.name.clone(),
  })?;

  Ok(ColumnBind {
    catalog: catalog.name().into(),
    schema: schema.into(),
    table: entry.name().into(),
    column: col.name.clone(),
    column_id: col.physical,
    ty: col.ty.clone(),
  })
}

/// Snapshot segments of the bound column / 对绑定列的段做快照
pub fn init<H: Host>(host: &H, bind: &ColumnBind) -> Result<Cursor<ColumnRow>> {
  let catalog = catalog(host, Some(&bind.catalog))?;
  let table = find_table::<H>(catalog, &bind.schema, &bind.table)?;
  let block_alloc_size = catalog.block_alloc_size();

  let seg_li = table.seg_li();
  let li: Vec<_> = col_seg_li(&seg_li, bind.column_id, block_alloc_size)
    .into_iter()
    .map(|seg| ColumnRow {
      column_name: bind.column.clone(),
      column_type: bind.ty.clone(),
      seg,
    })
    .collect();

  debug!(
    "{NAME}: {}.{}.{}.{} {} of {} segments",
    bind.catalog,
    bind.schema,
    bind.table,
    bind.column,
    li.len(),
    seg_li.len()
  );
  Ok(Cursor::new(li))
}
