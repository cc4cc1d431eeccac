//! Core types for exporting FUKA binary initial data.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! request/result data model ([`Grid`], [`Fields`], [`BinaryInfo`]), the
//! quantity index spaces ([`Quantity`], [`QuantitySet`]), the traits behind
//! which the spectral solver and its configuration reader live
//! ([`KadathExporter`], [`SolutionReader`]), and the dispatch logic that
//! turns a solver result into a fixed-layout [`Fields`] record.
//!
//! # Data flow
//!
//! ```text
//! Grid + InterpolateRequest
//!   └── dispatch::interpolate
//!       ├── KadathExporter::export_{bns,bbh,bhns}  → Exported (transient)
//!       ├── Fields::allocate(n_points)             → 22 zeroed buffers
//!       └── fields::copy_into per quantity slot     → Fields (owned)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod binary;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod fields;
pub mod grid;
pub mod info;
pub mod quantity;

pub use binary::{BinaryInfo, BinaryLayout, BinaryType, Component, DomainLabel, MassKind};
pub use config::{ChunkConfig, InterpolationParams};
pub use dispatch::{interpolate, interpolate_chunked, InterpolateRequest};
pub use error::{
    ConfigError, ExportError, FieldsError, GridError, InfoError, InterpolateError, ReadError,
};
pub use export::{Exported, KadathExporter};
pub use fields::{copy_into, Fields};
pub use grid::Grid;
pub use info::{read_binary_info, Axis, BinaryConfig, DomainSpace, SolutionReader};
pub use quantity::{Quantity, QuantitySet};
