// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDate};
use regex::Regex;

use crate::error::Result;
use crate::models::{Status, Transaction};
use crate::utils::text_matcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    LastDays(i64),
}

impl DateRange {
    pub fn parse(s: &str) -> Option<DateRange> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Some(DateRange::All),
            "last-7" => Some(DateRange::LastDays(7)),
            "last-30" => Some(DateRange::LastDays(30)),
            "last-90" => Some(DateRange::LastDays(90)),
            _ => None,
        }
    }

    fn admits(&self, date: NaiveDate, as_of: NaiveDate) -> bool {
        match self {
            DateRange::All => true,
            DateRange::LastDays(n) => date >= as_of - Duration::days(*n),
        }
    }
}

/// Toolbar state: search box, status dropdown, date range dropdown.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub range: DateRange,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(|s| s.trim().is_empty())
            && self.status.is_none()
            && self.range == DateRange::All
    }

    /// Rows passing every active criterion, in their original order.
    pub fn apply<'a>(
        &self,
        rows: &'a [Transaction],
        as_of: NaiveDate,
    ) -> Result<Vec<&'a Transaction>> {
        let matcher: Option<Regex> = match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => Some(text_matcher(q)?),
            _ => None,
        };
        Ok(rows
            .iter()
            .filter(|t| self.status.is_none_or(|s| t.status == s))
            .filter(|t| self.range.admits(t.date, as_of))
            .filter(|t| match &matcher {
                Some(re) => {
                    re.is_match(&t.description)
                        || t.ref_id.as_deref().is_some_and(|r| re.is_match(r))
                }
                None => true,
            })
            .collect())
    }
}
