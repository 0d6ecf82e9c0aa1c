//! Index storage size / 索引存储大小

use std::collections::HashSet;

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{BlockId, INVALID_BLOCK};

/// Pointer into a block / 块内指针
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockPointer {
  pub block_id: BlockId,
  pub offset: u32,
}

/// One fixed-size allocator of a persisted index
/// 持久化索引的一个定长分配器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocInfo {
  pub block_pointers: Vec<BlockPointer>,
  pub segment_counts: Vec<u64>,
  pub allocation_sizes: Vec<u64>,
  pub buffers_with_free_space: Vec<u64>,
}

/// Persisted layout of one index, read from checkpoint metadata
/// 从检查点元数据读取的单个索引持久化布局
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexStorageInfo {
  pub name: String,
  pub root: i64,
  pub allocator_infos: Vec<AllocInfo>,
}

/// Index as held by the host / 宿主持有的索引
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Index {
  /// Loaded from checkpoint, layout trustworthy
  /// 从检查点加载，布局可信
  Unbound(IndexStorageInfo),
  /// Rebuilt in memory, no persisted layout known
  /// 已在内存中重建，无持久化布局
  Bound { name: String },
}

impl Index {
  #[inline]
  pub fn name(&self) -> &str {
    match self {
      Index::Unbound(info) => &info.name,
      Index::Bound { name } => name,
    }
  }

  /// Persisted layout if trustworthy / 可信时返回持久化布局
  #[inline]
  pub fn storage_info(&self) -> Option<&IndexStorageInfo> {
    match self {
      Index::Unbound(info) => Some(info),
      Index::Bound { .. } => None,
    }
  }
}

/// Index size strategy / 索引大小统计策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexSizeMode {
  /// Distinct blocks behind allocator pointers times block size
  /// 分配器指针指向的去重块数乘以块大小
  #[default]
  Dedup,
  /// Sum of raw allocation sizes, may count shared blocks twice
  /// 原始分配大小之和，共享块可能重复计算
  AllocSum,
}

/// Bytes of one persisted index / 单个持久化索引的字节数
pub fn index_size(info: &IndexStorageInfo, block_alloc_size: u64, mode: IndexSizeMode) -> u64 {
  match mode {
    IndexSizeMode::Dedup => {
      let block_li: HashSet<BlockId> = info
        .allocator_infos
        .iter()
        .flat_map(|a| a.block_pointers.iter())
        .map(|p| p.block_id)
        .filter(|&id| id != INVALID_BLOCK)
        .collect();
      block_li.len() as u64 * block_alloc_size
    }
    IndexSizeMode::AllocSum => info
      .allocator_infos
      .iter()
      .flat_map(|a| a.allocation_sizes.iter())
      .sum(),
  }
}

/// Bytes of all indexes of a table; in-memory (bound) indexes count zero
/// 表的全部索引字节数；内存中（已绑定）的索引计为 0
pub fn table_index_size(index_li: &[Index], block_alloc_size: u64, mode: IndexSizeMode) -> u64 {
  let mut total = 0;
  for index in index_li {
    match index.storage_info() {
      Some(info) => total += index_size(info, block_alloc_size, mode),
      None => warn!("index {} rebuilt in memory, size unknown until checkpoint reload", index.name()),
    }
  }
  total
}
