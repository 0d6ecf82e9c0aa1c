//! Distinct block counter / 去重块计数

use std::collections::HashSet;

use crate::{BlockId, INVALID_BLOCK, SegInfo};

/// Set of distinct physical blocks referenced by segments
/// 段引用的去重物理块集合
///
/// A block shared by several segments (columns of one block, or primary of
/// one segment and additional of another) counts once.
/// 被多个段共享的块只计一次。
#[derive(Debug, Clone, Default)]
pub struct BlockSet {
  inner: HashSet<BlockId>,
}

impl BlockSet {
  #[inline]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_seg_li<'a>(seg_li: impl IntoIterator<Item = &'a SegInfo>) -> Self {
    let mut set = Self::new();
    set.extend(seg_li);
    set
  }

  /// Add blocks of persistent segments only / 只加入持久化段的块
  pub fn extend<'a>(&mut self, seg_li: impl IntoIterator<Item = &'a SegInfo>) {
    for seg in seg_li {
      if !seg.on_block() {
        continue;
      }
      self.inner.insert(seg.block_id);
      // Additional blocks are whole blocks / 附加块为整块
      for &id in &seg.additional_blocks {
        debug_assert_ne!(id, INVALID_BLOCK);
        self.inner.insert(id);
      }
    }
  }

  #[inline]
  pub fn insert(&mut self, id: BlockId) -> bool {
    id != INVALID_BLOCK && self.inner.insert(id)
  }

  #[inline]
  pub fn contains(&self, id: BlockId) -> bool {
    self.inner.contains(&id)
  }

  #[inline]
  pub fn len(&self) -> u64 {
    self.inner.len() as u64
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// Bytes occupied / 占用字节数
  #[inline]
  pub fn bytes(&self, block_alloc_size: u64) -> u64 {
    self.len() * block_alloc_size
  }
}
