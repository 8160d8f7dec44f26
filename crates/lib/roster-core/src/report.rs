//! Human-readable reports returned by the member queries.
//!
//! Each report keeps the data it was built from and renders its text through
//! `Display`, so callers can either inspect the result or print it.

use std::fmt;

use crate::models::MemberRecord;

/// Cap on individually rendered results in search and gender reports.
pub const RESULT_LIMIT: usize = 20;

/// Bucket used for members whose row has no gender field.
pub const UNKNOWN_GENDER: &str = "Unknown";

const NOT_AVAILABLE: &str = "N/A";

/// Outcome of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListReport {
    /// The file held no members or could not be read.
    NoMembers,
    /// Members exist but none start at `offset`.
    NoneAtOffset { offset: usize },
    Page {
        offset: usize,
        total: usize,
        members: Vec<MemberRecord>,
    },
}

impl ListReport {
    /// Returns the 1-based inclusive range of the page, if any.
    #[must_use]
    pub fn display_range(&self) -> Option<(usize, usize)> {
        match self {
            Self::Page {
                offset, members, ..
            } => Some((offset + 1, offset + members.len())),
            _ => None,
        }
    }
}

impl fmt::Display for ListReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMembers => write!(f, "No members found or file not accessible."),
            Self::NoneAtOffset { offset } => write!(f, "No members found at offset {offset}."),
            Self::Page {
                offset,
                total,
                members,
            } => {
                writeln!(
                    f,
                    "Showing members {} to {} of {total}:\n",
                    offset + 1,
                    offset + members.len()
                )?;
                for member in members {
                    write!(f, "- {}", member.full_name())?;
                    if let Some(email) = member.email().filter(|email| !email.is_empty()) {
                        write!(f, " ({email})")?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Members whose name or email contains a query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub query: String,
    pub matches: Vec<MemberRecord>,
}

impl SearchReport {
    /// Matches beyond the rendered limit.
    #[must_use]
    pub fn omitted(&self) -> usize {
        self.matches.len().saturating_sub(RESULT_LIMIT)
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches.is_empty() {
            return write!(f, "No members found matching '{}'.", self.query);
        }

        writeln!(
            f,
            "Found {} member(s) matching '{}':\n",
            self.matches.len(),
            self.query
        )?;
        for member in self.matches.iter().take(RESULT_LIMIT) {
            writeln!(f, "- ID: {}", member.id().unwrap_or(NOT_AVAILABLE))?;
            writeln!(f, "  Name: {}", member.full_name())?;
            writeln!(f, "  Email: {}", member.email().unwrap_or(NOT_AVAILABLE))?;
            writeln!(f, "  Gender: {}\n", member.gender().unwrap_or(NOT_AVAILABLE))?;
        }
        if self.omitted() > 0 {
            write!(f, "... and {} more results.", self.omitted())?;
        }
        Ok(())
    }
}

/// Outcome of an id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberLookup {
    Found(MemberRecord),
    NotFound(i64),
}

impl fmt::Display for MemberLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(member) => {
                writeln!(f, "Member Details:")?;
                writeln!(f, "- ID: {}", member.id().unwrap_or_default())?;
                writeln!(f, "- Name: {}", member.full_name())?;
                writeln!(f, "- Email: {}", member.email().unwrap_or(NOT_AVAILABLE))?;
                writeln!(f, "- Gender: {}", member.gender().unwrap_or(NOT_AVAILABLE))?;
                write!(
                    f,
                    "- IP Address: {}",
                    member.ip_address().unwrap_or(NOT_AVAILABLE)
                )
            }
            Self::NotFound(member_id) => write!(f, "No member found with ID {member_id}."),
        }
    }
}

/// Total number of loaded members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberCount {
    pub total: usize,
}

impl fmt::Display for MemberCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total members: {}", self.total)
    }
}

/// Members whose gender matches a requested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderReport {
    pub gender: String,
    pub matches: Vec<MemberRecord>,
}

impl GenderReport {
    #[must_use]
    pub fn omitted(&self) -> usize {
        self.matches.len().saturating_sub(RESULT_LIMIT)
    }
}

impl fmt::Display for GenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches.is_empty() {
            return write!(f, "No members found with gender '{}'.", self.gender);
        }

        writeln!(f, "Found {} {} member(s):\n", self.matches.len(), self.gender)?;
        for member in self.matches.iter().take(RESULT_LIMIT) {
            writeln!(
                f,
                "- {} ({})",
                member.full_name(),
                member.email().unwrap_or(NOT_AVAILABLE)
            )?;
        }
        if self.omitted() > 0 {
            write!(f, "\n... and {} more.", self.omitted())?;
        }
        Ok(())
    }
}

/// Count of members sharing one gender value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderBucket {
    pub gender: String,
    pub count: usize,
}

/// Gender distribution, largest bucket first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenderStatistics {
    pub total: usize,
    pub buckets: Vec<GenderBucket>,
}

impl GenderStatistics {
    /// Builds buckets in first-encountered order, then sorts by descending
    /// count. The sort is stable, so ties keep encounter order. Only an absent
    /// gender lands in [`UNKNOWN_GENDER`]; an empty value keeps its own bucket.
    #[must_use]
    pub fn from_genders<'a>(genders: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let mut stats = Self::default();
        for gender in genders {
            let gender = gender.unwrap_or(UNKNOWN_GENDER);
            stats.total += 1;
            if let Some(bucket) = stats.buckets.iter_mut().find(|b| b.gender == gender) {
                bucket.count += 1;
            } else {
                stats.buckets.push(GenderBucket {
                    gender: gender.to_string(),
                    count: 1,
                });
            }
        }
        stats.buckets.sort_by(|a, b| b.count.cmp(&a.count));
        stats
    }

    /// Share of `bucket` in the total, as a percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, bucket: &GenderBucket) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (bucket.count as f64 / self.total as f64) * 100.0
    }
}

impl fmt::Display for GenderStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return write!(f, "No members found.");
        }

        writeln!(f, "Gender Statistics (Total: {} members):\n", self.total)?;
        for bucket in &self.buckets {
            writeln!(
                f,
                "- {}: {} ({:.1}%)",
                bucket.gender,
                bucket.count,
                self.percentage(bucket)
            )?;
        }
        Ok(())
    }
}
