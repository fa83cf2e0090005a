// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering items by their sort priority weight.
//!
//! This is the consumer side of the weight field: what a query does with it.
//! Items that carry no weight always sort after items that do, whichever way
//! the weights run, so a half-processed batch never leaks unweighted items
//! to the top.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::build::Document;
use crate::types::IndexItem;

/// Direction of the weight sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// Compare two items for ranking.
///
/// Sort order:
/// 1. **Has weight** - weighted items before unweighted ones
/// 2. **Weight** - in `direction`
/// 3. **Doc ID** - ascending, for determinism
pub fn compare_items(a: &Document, b: &Document, direction: SortDirection) -> Ordering {
    match (a.weight(), b.weight()) {
        (Some(wa), Some(wb)) => {
            let ord = match direction {
                SortDirection::Ascending => wa.cmp(&wb),
                SortDirection::Descending => wb.cmp(&wa),
            };
            ord.then_with(|| a.id.cmp(&b.id))
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

pub fn sort_items(items: &mut [Document], direction: SortDirection) {
    items.sort_by(|a, b| compare_items(a, b, direction));
}
