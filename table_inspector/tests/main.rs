mod host;

use aok::{OK, Void};
use block_stat::{AllocInfo, BlockPointer, Index, IndexSizeMode, IndexStorageInfo, LogicalType, MetaBlockInfo};
use host::*;
use log::info;
use table_inspector::{
  Bind, Chunk, Conf, DbKind, Error, Extension, FN_LI, QualifiedName, Scan, Ty, Val,
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn s(v: &str) -> Val {
  Val::Varchar(v.into())
}

fn index(name: &str, ptr_li: &[i64], alloc_li: &[u64]) -> Index {
  Index::Unbound(IndexStorageInfo {
    name: name.into(),
    root: 0,
    allocator_infos: vec![AllocInfo {
      block_pointers: ptr_li
        .iter()
        .map(|&block_id| BlockPointer { block_id, offset: 0 })
        .collect(),
      allocation_sizes: alloc_li.to_vec(),
      ..Default::default()
    }],
  })
}

/// t(a INTEGER, b VARCHAR): blocks 1, 2, 3; index on block 10
fn table_t() -> MemTable {
  let mut big = seg(0, 1, 2, 0);
  big.additional_blocks = vec![3];
  MemTable {
    name: "t".into(),
    column_li: vec![
      col("a", LogicalType::Integer, 0),
      col("b", LogicalType::Varchar, 1),
    ],
    seg_li: vec![
      seg(0, 0, 1, 0),
      validity(0, 0, 1, 1000),
      seg(1, 0, 1, 2000),
      constant(1, 0),
      big,
      seg(1, 1, 2, 50000),
    ],
    row_count: 2000,
    index_li: vec![index("t_a", &[10, 10], &[100, 200])],
  }
}

/// u(x BIGINT): blocks 4..=8
fn table_u() -> MemTable {
  MemTable {
    name: "u".into(),
    column_li: vec![col("x", LogicalType::BigInt, 0)],
    seg_li: (4..=8).map(|b| seg(0, (b - 4) as u64, b, 0)).collect(),
    row_count: 5000,
    index_li: vec![Index::Bound { name: "u_x".into() }],
  }
}

fn file_catalog(name: &str) -> MemCatalog {
  MemCatalog {
    name: name.into(),
    kind: file_kind(),
    schema_li: vec![
      MemSchema {
        name: "main".into(),
        internal: false,
        table_li: vec![table_t(), table_u()],
      },
      MemSchema {
        name: "pg_catalog".into(),
        internal: true,
        table_li: vec![MemTable {
          name: "pg_x".into(),
          seg_li: vec![seg(0, 0, 50, 0)],
          ..Default::default()
        }],
      },
    ],
    db_size: file_db_size(30, 5),
    meta_li: vec![MetaBlockInfo::default(); 3],
  }
}

fn host() -> MemHost {
  MemHost {
    catalog_li: vec![
      file_catalog("db"),
      MemCatalog {
        name: "memory".into(),
        kind: mem_kind(),
        ..Default::default()
      },
      MemCatalog {
        name: "system".into(),
        kind: DbKind {
          system: true,
          ..Default::default()
        },
        ..Default::default()
      },
      MemCatalog {
        name: "temp".into(),
        kind: DbKind {
          temporary: true,
          ..Default::default()
        },
        ..Default::default()
      },
    ],
    active: 0,
  }
}

fn mem_host() -> MemHost {
  MemHost {
    active: 1,
    ..host()
  }
}

fn str_at(row: &[Val], idx: usize) -> &str {
  row[idx].as_str().unwrap()
}

fn i64_at(row: &[Val], idx: usize) -> i64 {
  row[idx].as_i64().unwrap()
}

#[test]
fn test_extension_identity() -> Void {
  let ext = Extension::default();
  assert_eq!(ext.name(), "table_inspector");
  assert!(!ext.version().is_empty());
  assert_eq!(ext.fn_li().len(), 5);
  assert_eq!(ext.conf().batch_rows, 2048);
  let name_li: Vec<_> = FN_LI.iter().map(|f| f.name).collect();
  for name in ["inspect_column", "inspect_database", "inspect_storage", "inspect_storage_summary"] {
    assert!(name_li.contains(&name));
  }
  OK
}

#[test]
fn test_inspect_column() -> Void {
  let host = host();
  let ext = Extension::default();
  let scan = ext.scan(&host, "inspect_column", &[s("db"), s("t"), s("a")])?;
  let col_li: Vec<_> = scan.col_li().iter().map(|c| c.name).collect();
  assert_eq!(
    col_li,
    [
      "row_group_id",
      "column_name",
      "column_type",
      "compression",
      "compressed_size",
      "estimated_decompressed_size",
      "row_count"
    ]
  );

  let row_li = scan.collect_row_li();
  assert_eq!(row_li.len(), 2);

  // Next offset in block 1 is the validity segment at 1000
  // 块 1 中下一偏移为位于 1000 的有效性段
  let r = &row_li[0];
  assert_eq!(i64_at(r, 0), 0);
  assert_eq!(str_at(r, 1), "a");
  assert_eq!(str_at(r, 2), "INTEGER");
  assert_eq!(str_at(r, 3), "BitPacking");
  assert_eq!(str_at(r, 4), "1000 B");
  assert_eq!(str_at(r, 5), "3.9 KiB");
  assert_eq!(i64_at(r, 6), 1000);

  // 50000 bytes in block 2 plus one additional block
  // 块 2 中 50000 字节加一个附加块
  let r = &row_li[1];
  assert_eq!(i64_at(r, 0), 1);
  assert_eq!(str_at(r, 4), "304.8 KiB");
  OK
}

#[test]
fn test_inspect_column_varchar_na() -> Void {
  let host = host();
  let row_li = Extension::default()
    .scan(&host, "inspect_column", &[s("db"), s("main.t"), s("B")])?
    .collect_row_li();
  // Constant segment skipped / 跳过常量段
  assert_eq!(row_li.len(), 2);
  for r in &row_li {
    assert_eq!(str_at(r, 1), "b");
    assert_eq!(str_at(r, 2), "VARCHAR");
    assert_eq!(str_at(r, 5), "N/A");
  }
  // Last segment of block 1: upper bound / 块 1 最后一段：上界
  assert_eq!(str_at(&row_li[0], 4), "254.0 KiB");
  OK
}

#[test]
fn test_inspect_column_errors() -> Void {
  let host = host();
  let ext = Extension::default();

  let err = ext
    .scan(&host, "inspect_column", &[s("db"), s("t"), s("zz")])
    .unwrap_err();
  assert!(matches!(err, Error::ColumnNotFound { .. }));
  assert_eq!(err.to_string(), "Column 'zz' not found in table 't'");

  let err = ext
    .scan(&host, "inspect_column", &[s("db"), s("nope"), s("a")])
    .unwrap_err();
  assert!(matches!(err, Error::TableNotFound { .. }));

  let err = ext
    .scan(&host, "inspect_column", &[s("db"), s("nope.t"), s("a")])
    .unwrap_err();
  assert!(matches!(err, Error::SchemaNotFound { .. }));

  let err = ext
    .scan(&host, "inspect_column", &[s("other"), s("t"), s("a")])
    .unwrap_err();
  assert!(matches!(err, Error::CatalogNotFound(_)));

  let err = ext
    .scan(&host, "inspect_column", &[s("db"), s("a.b.c.d"), s("a")])
    .unwrap_err();
  assert!(matches!(err, Error::BadName(_)));

  let err = ext
    .scan(&host, "inspect_column", &[s("db"), Val::Null, s("a")])
    .unwrap_err();
  assert!(matches!(err, Error::BadArg { idx: 1, expect: Ty::Varchar, .. }));
  info!("{err}");
  OK
}

#[test]
fn test_inspect_database() -> Void {
  let host = host();
  let scan = Extension::default().scan(&host, "inspect_database", &[])?;
  assert_eq!(scan.col_li().len(), 7);
  let row_li = scan.collect_row_li();

  // pg_catalog is internal / pg_catalog 为内部 schema
  assert_eq!(row_li.len(), 2);

  // u: 5 blocks, bound index counts zero / u：5 块，已绑定索引计 0
  assert_eq!(str_at(&row_li[0], 2), "u");
  assert_eq!(i64_at(&row_li[0], 5), (5 * BLOCK) as i64);

  // t: 3 data blocks + 1 index block / t：3 个数据块 + 1 个索引块
  let t = &row_li[1];
  assert_eq!(str_at(t, 0), "db");
  assert_eq!(str_at(t, 1), "main");
  assert_eq!(str_at(t, 2), "t");
  assert_eq!(i64_at(t, 3), 2000);
  assert_eq!(i64_at(t, 4), 2);
  assert_eq!(i64_at(t, 5), (4 * BLOCK) as i64);
  assert_eq!(str_at(t, 6), "1.0 MiB");
  OK
}

#[test]
fn test_inspect_database_alloc_sum() -> Void {
  let host = host();
  let ext = Extension::new(&[Conf::IndexSize(IndexSizeMode::AllocSum)]);
  let row_li = ext.scan(&host, "inspect_database", &[])?.collect_row_li();
  let t = row_li.iter().find(|r| str_at(r, 2) == "t").unwrap();
  assert_eq!(i64_at(t, 5), (3 * BLOCK + 300) as i64);
  OK
}

#[test]
fn test_in_memory_fails() -> Void {
  let host = mem_host();
  let ext = Extension::default();

  for (name, arg_li) in [
    ("inspect_database", vec![]),
    ("inspect_storage_summary", vec![]),
    ("inspect_storage_summary", vec![s("memory")]),
  ] {
    let err = ext.scan(&host, name, &arg_li).unwrap_err();
    assert!(matches!(err, Error::InMemory { .. }), "{name}");
    let msg = err.to_string();
    assert!(msg.starts_with(&format!("{name}() requires a persistent database file.")));
    assert!(msg.contains("ATTACH"));
    info!("{msg}");
  }

  // Explicit file database still works / 显式指定文件数据库仍可用
  let row_li = ext
    .scan(&host, "inspect_storage_summary", &[s("db")])?
    .collect_row_li();
  assert_eq!(row_li.len(), 5);
  OK
}

#[test]
fn test_inspect_storage() -> Void {
  let host = host();
  let row_li = Extension::default()
    .scan(&host, "inspect_storage", &[])?
    .collect_row_li();
  assert_eq!(row_li.len(), 1);
  assert_eq!(str_at(&row_li[0], 0), "db");
  assert_eq!(str_at(&row_li[0], 1), "7.5 MiB");
  assert_eq!(str_at(&row_li[0], 2), "0 B");
  OK
}

#[test]
fn test_inspect_storage_summary() -> Void {
  let host = host();
  let scan = Extension::default().scan(&host, "inspect_storage_summary", &[])?;
  let col_li: Vec<_> = scan.col_li().iter().map(|c| c.name).collect();
  assert_eq!(col_li, ["component", "size", "percentage", "block_count"]);

  let row_li = scan.collect_row_li();
  let component_li: Vec<_> = row_li.iter().map(|r| str_at(r, 0)).collect();
  assert_eq!(component_li, ["table_data", "index", "metadata", "free_blocks", "total"]);

  // t {1,2,3} + u {4..8}, pg_catalog block 50 excluded
  let count_li: Vec<_> = row_li.iter().map(|r| i64_at(r, 3)).collect();
  assert_eq!(count_li, [8, 14, 3, 5, 30]);
  assert_eq!(count_li[..4].iter().sum::<i64>(), count_li[4]);

  let pct_li: Vec<_> = row_li.iter().map(|r| str_at(r, 2)).collect();
  assert_eq!(pct_li, ["26.7%", "46.7%", "10.0%", "16.7%", "100.0%"]);

  assert_eq!(str_at(&row_li[0], 1), "2.0 MiB");
  assert_eq!(str_at(&row_li[1], 1), "3.5 MiB");
  assert_eq!(str_at(&row_li[2], 1), "768.0 KiB");
  assert_eq!(str_at(&row_li[4], 1), "7.5 MiB");
  OK
}

#[test]
fn test_summary_overflow() -> Void {
  let mut host = host();
  host.catalog_li[0].db_size = file_db_size(4, 1);
  let err = Extension::default()
    .scan(&host, "inspect_storage_summary", &[s("db")])
    .unwrap_err();
  assert!(matches!(err, Error::Block(_)));
  info!("{err}");
  OK
}

#[test]
fn test_batching() -> Void {
  let host = host();
  let ext = Extension::new(&[Conf::BatchRows(2)]);
  let bind = ext.bind(&host, "INSPECT_STORAGE_SUMMARY", &[])?;
  assert_eq!(bind, Bind::StorageSummary(None));
  assert_eq!(bind.col_li().len(), 4);

  let mut scan: Scan = ext.init(&host, &bind)?;
  let mut chunk = Chunk::new(scan.col_li(), ext.conf().batch_rows);
  let mut size_li = vec![];
  loop {
    let n = scan.execute(&mut chunk);
    if n == 0 {
      break;
    }
    size_li.push(n);
  }
  assert_eq!(size_li, [2, 2, 1]);
  assert!(scan.is_done());
  assert_eq!(chunk.len(), 0);

  let len_li: Vec<_> = ext
    .scan(&host, "inspect_storage_summary", &[])?
    .map(|c| c.len())
    .collect();
  assert_eq!(len_li, [2, 2, 1]);
  OK
}

#[test]
fn test_batch_rows_min_one() -> Void {
  let ext = Extension::new(&[Conf::BatchRows(0)]);
  assert_eq!(ext.conf().batch_rows, 1);
  OK
}

#[test]
fn test_chunk_by_name() -> Void {
  let host = host();
  let chunk = Extension::default()
    .scan(&host, "inspect_storage", &[])?
    .next()
    .unwrap();
  assert_eq!(chunk.by_name(0, "database_name"), Some(&s("db")));
  assert_eq!(chunk.by_name(0, "nope"), None);
  assert_eq!(chunk.get(1, 0), None);
  OK
}

#[test]
fn test_no_such_fn() -> Void {
  let host = host();
  let ext = Extension::default();
  let err = ext.scan(&host, "inspect_nothing", &[]).unwrap_err();
  assert!(matches!(err, Error::NoSuchFn { arity: 0, .. }));
  let err = ext.scan(&host, "inspect_database", &[s("db")]).unwrap_err();
  assert!(matches!(err, Error::NoSuchFn { arity: 1, .. }));
  OK
}

#[test]
fn test_qualified_name() -> Void {
  let q = QualifiedName::parse("t")?;
  assert_eq!(q.name, "t");
  assert_eq!(q.schema, None);
  assert_eq!(q.schema_or_default(), "main");

  let q = QualifiedName::parse("s.t")?;
  assert_eq!(q.schema.as_deref(), Some("s"));

  let q = QualifiedName::parse("c.s.t")?;
  assert_eq!(q.catalog.as_deref(), Some("c"));
  assert_eq!(q.schema.as_deref(), Some("s"));
  assert_eq!(q.name, "t");

  let q = QualifiedName::parse(r#""my.schema"."a""b""#)?;
  assert_eq!(q.schema.as_deref(), Some("my.schema"));
  assert_eq!(q.name, "a\"b");

  for bad in ["", ".t", "s.", "a.b.c.d", "\"open", "\"x\"y"] {
    assert!(QualifiedName::parse(bad).is_err(), "{bad}");
  }
  OK
}
