//! Table functions / 表函数

pub mod inspect_column;
pub mod inspect_database;
pub mod inspect_storage;
pub mod inspect_storage_summary;

use crate::{Catalog, Error, Host, Result, Schema};

pub(crate) type SchemaOf<H> = <<H as Host>::Catalog as Catalog>::Schema;
pub(crate) type TableOf<H> = <SchemaOf<H> as Schema>::Table;

/// Look up a catalog, `None` for the active one
/// 查找目录，`None` 为当前活动目录
pub(crate) fn catalog<'a, H: Host>(host: &'a H, name: Option<&str>) -> Result<&'a H::Catalog> {
  host
    .catalog(name)
    .ok_or_else(|| Error::CatalogNotFound(name.unwrap_or("<active>").into()))
}

/// Catalog that must be backed by a file / 必须由文件支撑的目录
pub(crate) fn file_catalog<'a, H: Host>(
  host: &'a H,
  name: Option<&str>,
  func: &'static str,
  attached_call: &'static str,
) -> Result<&'a H::Catalog> {
  let catalog = catalog(host, name)?;
  if catalog.kind().in_memory {
    return Err(Error::InMemory { func, attached_call });
  }
  Ok(catalog)
}

/// User tables with their schema, internal schemas skipped
/// 用户表及其 schema，跳过内部 schema
pub(crate) fn user_table_li<H: Host>(catalog: &H::Catalog) -> Vec<(&SchemaOf<H>, &TableOf<H>)> {
  let mut li = Vec::new();
  for schema in catalog.schema_li() {
    if schema.is_internal() {
      continue;
    }
    for table in schema.table_li() {
      li.push((schema, table));
    }
  }
  li
}
