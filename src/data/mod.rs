/// Data layer: record types, loading, filtering and export.
///
/// Architecture:
/// ```text
///  consumption_issues.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<IssueRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  store    │  full set + filtered indices, in-place edits
///   └──────────┘
///        │                    │
///        ▼                    ▼
///   ┌──────────┐        ┌──────────┐
///   │  filter   │        │  export   │  full set → pretty JSON
///   └──────────┘        └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod store;
