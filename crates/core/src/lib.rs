// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pvx-core: shaping and rendering the results of a command run across a
//! network of machines.

pub mod macros;

pub mod error;
pub mod filter;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod split;
pub mod template;
pub mod unify;

pub use error::{ConfigError, RenderError};
pub use filter::FieldFilter;
pub use format::{LinesConfig, OutputFormat, Streams};
pub use model::{
    ExecutionRecord, FieldKind, FieldSet, MachineId, Record, ResultSet, Value, UNIFIED_KEY,
};
pub use pipeline::{Pipeline, PipelineConfig};
pub use split::{Separator, SplitConfig};
pub use template::{Template, DEFAULT_HEADING, DEFAULT_PREFIX};
pub use unify::unify;
