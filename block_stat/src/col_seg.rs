//! Per-segment compressed size / 每段压缩大小
//!
//! A segment ends where the next segment (of any column) in the same block
//! begins. The last segment of a block is bounded by the block end.
//! 段的结束位置为同块内下一段（任意列）的起始位置；块内最后一段以块尾为上界。

use std::{
  collections::{BTreeSet, HashMap},
  ops::Bound::{Excluded, Unbounded},
};

use crate::{BlockId, SegInfo};

/// Block id -> sorted distinct segment offsets across all columns
/// 块 ID -> 所有列段的有序去重偏移
#[derive(Debug, Default)]
pub struct BlockOffsets {
  inner: HashMap<BlockId, BTreeSet<u64>>,
}

impl BlockOffsets {
  pub fn new(seg_li: &[SegInfo]) -> Self {
    let mut inner: HashMap<BlockId, BTreeSet<u64>> = HashMap::new();
    for seg in seg_li {
      if seg.on_block() {
        inner.entry(seg.block_id).or_default().insert(seg.block_offset);
      }
    }
    Self { inner }
  }

  /// Offset of the segment following `offset` in `block`
  /// 块内 `offset` 之后的下一段偏移
  ///
  /// # Panics
  ///
  /// If `offset` was never registered for `block`: the host returned
  /// descriptors that contradict each other.
  /// 若 `offset` 未在该块注册则 panic：宿主返回的描述自相矛盾。
  pub fn next(&self, block: BlockId, offset: u64) -> Option<u64> {
    let offset_li = self.inner.get(&block);
    assert!(
      offset_li.is_some_and(|li| li.contains(&offset)),
      "segment offset {offset} missing from block {block}"
    );
    offset_li?.range((Excluded(offset), Unbounded)).next().copied()
  }

  /// Bytes a segment at `offset` occupies in `block`
  /// `offset` 处的段在块内占用的字节数
  ///
  /// Exact when a successor exists, upper bound for the last segment.
  /// 有后继时精确，最后一段为上界。
  pub fn compressed_size(&self, block: BlockId, offset: u64, block_alloc_size: u64) -> u64 {
    match self.next(block, offset) {
      Some(next) => next - offset,
      None => block_alloc_size.saturating_sub(offset),
    }
  }

  #[inline]
  pub fn block_count(&self) -> usize {
    self.inner.len()
  }
}

/// Main data segment of one column with its measured size
/// 单列主数据段及其测量大小
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColSeg {
  pub row_group: u64,
  pub compression: String,
  /// Row count / 行数
  pub count: u64,
  /// Bytes in the primary block / 主块内字节数
  pub compressed_size: u64,
  /// `additional_blocks.len() * block_alloc_size`
  pub additional_size: u64,
}

impl ColSeg {
  /// Total bytes consumed / 总占用字节
  #[inline]
  pub fn total(&self) -> u64 {
    self.compressed_size + self.additional_size
  }
}

/// Main data segments of `column_id` in input order, with sizes
/// 按输入顺序返回 `column_id` 的主数据段及大小
///
/// `seg_li` must hold every segment of the table: offsets of other columns
/// bound the sizes of this one.
/// `seg_li` 须包含表的全部段：其它列的偏移决定本列段的大小。
pub fn col_seg_li(seg_li: &[SegInfo], column_id: u64, block_alloc_size: u64) -> Vec<ColSeg> {
  let offsets = BlockOffsets::new(seg_li);

  seg_li
    .iter()
    .filter(|seg| seg.column_id == column_id && seg.is_main() && seg.on_block())
    .map(|seg| ColSeg {
      row_group: seg.row_group,
      compression: seg.compression.clone(),
      count: seg.count,
      compressed_size: offsets.compressed_size(seg.block_id, seg.block_offset, block_alloc_size),
      additional_size: seg.additional_blocks.len() as u64 * block_alloc_size,
    })
    .collect()
}
