// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod event;
pub mod reporter;
pub mod subject;

pub use self::error::{PlaytreeError, Result};
pub use self::event::{EventStatus, ServiceEvent};
pub use self::reporter::EventReporter;
pub use self::subject::{Subject, SubjectStream};
