//! Locates the header row in a raw sheet and maps logical fields to columns.

pub mod columns;
pub mod resolver;

pub use columns::ColumnMap;
pub use resolver::{
    HEADER_MATCH_THRESHOLD, HEADER_SCAN_LIMIT, HeaderMatch, compact_label, resolve_headers,
};
