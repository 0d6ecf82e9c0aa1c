//! table_inspector - storage inspection table functions
//! 存储检查表函数
//!
//! `inspect_column`, `inspect_database`, `inspect_storage`,
//! `inspect_storage_summary` read what the host exposes through [`Host`] and
//! stream rows via [`Scan`].
//! 通过 [`Host`] 读取宿主暴露的状态，经 [`Scan`] 分批输出行。

#![cfg_attr(docsrs, feature(doc_cfg))]

mod chunk;
mod conf;
mod cursor;
mod error;
mod ext;
pub mod func;
pub mod host;
mod name;
mod val;

pub use chunk::Chunk;
pub use conf::{Conf, DEFAULT_BATCH_ROWS, ParsedConf};
pub use cursor::{Cursor, Row, Scan, ScanT};
pub use error::{Error, Result};
pub use ext::{Bind, EXT_NAME, Extension, FN_LI, FnSig};
pub use host::{Catalog, ColumnDef, DbKind, Host, Schema, Table};
pub use name::{DEFAULT_SCHEMA, QualifiedName};
pub use val::{Col, Ty, Val};
