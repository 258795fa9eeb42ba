// Copyright 2026 Playtree Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
pub mod fixtures;
pub mod helpers;
pub mod stub_service;

pub use self::fixtures::{default_tree, default_tree_with_selection, empty_tree};
pub use self::helpers::{assert_no_element_emitted, expect_next_status, wait_until};
pub use self::stub_service::{three_duplicate_reminders, StubRemindersService};
