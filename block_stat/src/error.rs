//! Block accounting errors / 块统计错误

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  /// Measured categories exceed the file's block count
  /// 已测量类别超出文件总块数
  #[error(
    "block accounting inconsistent: table_data {table_data} + metadata {metadata} + free {free} blocks exceed total {total}"
  )]
  BlockOverflow {
    total: u64,
    table_data: u64,
    metadata: u64,
    free: u64,
  },
}
