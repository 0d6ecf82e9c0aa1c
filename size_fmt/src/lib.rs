//! size_fmt - human readable sizes for storage reports
//! 存储报告的人类可读大小
//!
//! Bytes use 1024-based IEC units (B, KiB, MiB, GiB, TiB).
//! 字节使用 1024 进制 IEC 单位。

#![cfg_attr(docsrs, feature(doc_cfg))]

/// IEC units, capped at TiB / IEC 单位，最大 TiB
pub const UNIT_LI: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

const KIB: f64 = 1024.0;

/// Format byte count, e.g. `512 B`, `1.5 MiB`
/// 格式化字节数
///
/// Bytes print without decimals, larger units with exactly one.
/// 字节不带小数，更大单位保留一位小数。
pub fn format_size(bytes: u64) -> String {
  let mut size = bytes as f64;
  let mut unit = 0;

  while size >= KIB && unit < UNIT_LI.len() - 1 {
    size /= KIB;
    unit += 1;
  }

  if unit == 0 {
    format!("{size:.0} {}", UNIT_LI[unit])
  } else {
    format!("{size:.1} {}", UNIT_LI[unit])
  }
}

/// Format `count / total` as percentage with one decimal, e.g. `33.3%`
/// 格式化百分比，保留一位小数
///
/// Zero total yields `0.0%`.
/// 总数为 0 时返回 `0.0%`。
pub fn format_pct(count: u64, total: u64) -> String {
  if total == 0 {
    return "0.0%".into();
  }
  let pct = count as f64 * 100.0 / total as f64;
  format!("{pct:.1}%")
}
