//! Database file size info / 数据库文件大小信息

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::BlockId;

/// File-level sizes reported by the host for one attached database
/// 宿主报告的单个数据库文件级大小
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DbSize {
  /// Database file bytes / 数据库文件字节数
  pub bytes: u64,
  pub block_size: u64,
  pub total_blocks: u64,
  pub used_blocks: u64,
  pub free_blocks: u64,
  /// WAL file bytes / WAL 文件字节数
  pub wal_size: u64,
}

/// One physical metadata block / 一个物理元数据块
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetaBlockInfo {
  pub block_id: BlockId,
  pub total_blocks: u64,
  pub free_list: Vec<u64>,
}
