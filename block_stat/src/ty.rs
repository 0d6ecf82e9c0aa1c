//! Column types and decompressed size estimate / 列类型与解压大小估算

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic column type as named by the host
/// 宿主定义的列语义类型
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LogicalType {
  Boolean,
  TinyInt,
  SmallInt,
  Integer,
  BigInt,
  HugeInt,
  UTinyInt,
  USmallInt,
  UInteger,
  UBigInt,
  UHugeInt,
  Float,
  Double,
  Decimal { width: u8, scale: u8 },
  Date,
  Time,
  TimeTz,
  Timestamp,
  TimestampS,
  TimestampMs,
  TimestampNs,
  TimestampTz,
  Interval,
  Uuid,
  Varchar,
  Blob,
  Bit,
  Enum(Vec<String>),
  List(Box<LogicalType>),
  Array(Box<LogicalType>, u32),
  Struct(Vec<(String, LogicalType)>),
  Map(Box<LogicalType>, Box<LogicalType>),
  Union(Vec<(String, LogicalType)>),
}

impl LogicalType {
  /// Bytes per value for constant-size types, `None` for variable-length ones
  /// 定长类型每值字节数，变长类型返回 `None`
  pub fn fixed_width(&self) -> Option<u64> {
    use LogicalType::*;
    Some(match self {
      Boolean | TinyInt | UTinyInt => 1,
      SmallInt | USmallInt => 2,
      Integer | UInteger | Float | Date => 4,
      BigInt | UBigInt | Double | Time | TimeTz | Timestamp | TimestampS | TimestampMs
      | TimestampNs | TimestampTz => 8,
      HugeInt | UHugeInt | Uuid | Interval => 16,
      Decimal { width, .. } => match width {
        0..=4 => 2,
        5..=9 => 4,
        10..=18 => 8,
        _ => 16,
      },
      // Dictionary index width / 字典下标宽度
      Enum(value_li) => match value_li.len() {
        0..=0xFF => 1,
        0x100..=0xFFFF => 2,
        _ => 4,
      },
      Varchar | Blob | Bit | List(_) | Array(..) | Struct(_) | Map(..) | Union(_) => return None,
    })
  }
}

/// Uncompressed size of `rows` values, `None` when unknown (variable-length)
/// `rows` 个值的未压缩大小，变长类型未知时返回 `None`
///
/// No null overhead is modelled. / 不计空值开销。
#[inline]
pub fn est_decompressed(ty: &LogicalType, rows: u64) -> Option<u64> {
  ty.fixed_width().map(|w| w * rows)
}

fn write_field_li(f: &mut fmt::Formatter<'_>, field_li: &[(String, LogicalType)]) -> fmt::Result {
  for (i, (name, ty)) in field_li.iter().enumerate() {
    if i > 0 {
      f.write_str(", ")?;
    }
    write!(f, "{name} {ty}")?;
  }
  Ok(())
}

impl fmt::Display for LogicalType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use LogicalType::*;
    let name = match self {
      Boolean => "BOOLEAN",
      TinyInt => "TINYINT",
      SmallInt => "SMALLINT",
      Integer => "INTEGER",
      BigInt => "BIGINT",
      HugeInt => "HUGEINT",
      UTinyInt => "UTINYINT",
      USmallInt => "USMALLINT",
      UInteger => "UINTEGER",
      UBigInt => "UBIGINT",
      UHugeInt => "UHUGEINT",
      Float => "FLOAT",
      Double => "DOUBLE",
      Date => "DATE",
      Time => "TIME",
      TimeTz => "TIME WITH TIME ZONE",
      Timestamp => "TIMESTAMP",
      TimestampS => "TIMESTAMP_S",
      TimestampMs => "TIMESTAMP_MS",
      TimestampNs => "TIMESTAMP_NS",
      TimestampTz => "TIMESTAMP WITH TIME ZONE",
      Interval => "INTERVAL",
      Uuid => "UUID",
      Varchar => "VARCHAR",
      Blob => "BLOB",
      Bit => "BIT",
      Decimal { width, scale } => return write!(f, "DECIMAL({width},{scale})"),
      Enum(value_li) => {
        f.write_str("ENUM(")?;
        for (i, v) in value_li.iter().enumerate() {
          if i > 0 {
            f.write_str(", ")?;
          }
          write!(f, "'{v}'")?;
        }
        return f.write_str(")");
      }
      List(child) => return write!(f, "{child}[]"),
      Array(child, size) => return write!(f, "{child}[{size}]"),
      Struct(field_li) => {
        f.write_str("STRUCT(")?;
        write_field_li(f, field_li)?;
        return f.write_str(")");
      }
      Map(k, v) => return write!(f, "MAP({k}, {v})"),
      Union(field_li) => {
        f.write_str("UNION(")?;
        write_field_li(f, field_li)?;
        return f.write_str(")");
      }
    };
    f.write_str(name)
  }
}
