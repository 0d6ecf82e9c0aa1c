//! Column segment descriptor / 列段描述

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical block id / 物理块 ID
pub type BlockId = i64;

/// Sentinel for segments without a block / 无块段的哨兵值
pub const INVALID_BLOCK: BlockId = -1;

/// One stored run of a column inside a row group, as reported by the host
/// 宿主报告的列段（行组内一列的一段连续存储）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegInfo {
  pub row_group: u64,
  pub column_id: u64,
  /// `[id]` for main data, anything else is auxiliary (validity, ...)
  /// `[id]` 为主数据段，其它为辅助段（有效性位图等）
  pub column_path: String,
  pub segment_idx: u64,
  pub segment_type: String,
  pub start: u64,
  /// Row count / 行数
  pub count: u64,
  pub compression: String,
  pub persistent: bool,
  pub block_id: BlockId,
  pub block_offset: u64,
  pub additional_blocks: Vec<BlockId>,
}

impl SegInfo {
  /// Written to a real block / 已写入真实块
  #[inline]
  pub fn on_block(&self) -> bool {
    self.persistent && self.block_id != INVALID_BLOCK
  }

  /// Main data segment of its column / 所属列的主数据段
  #[inline]
  pub fn is_main(&self) -> bool {
    self.column_path == format!("[{}]", self.column_id)
  }
}
