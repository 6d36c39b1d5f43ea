//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  reviews .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  clean rows → ReviewDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ ReviewDataset │  Vec<ProductRecord>, category lookup
//!   └───────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  category + vote threshold → indices
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
