//! Read-only member queries.
//!
//! The query surface reads the file without the name-column check the
//! printer applies, and treats any load failure as an empty member set.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::loader::read_members;
use crate::models::MemberRecord;
use crate::report::{
    GenderReport,
    GenderStatistics,
    ListReport,
    MemberCount,
    MemberLookup,
    SearchReport,
};

/// Page size used when a listing does not specify one.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Read-only queries over a member CSV file.
///
/// Every query reloads the file, so results always reflect its current
/// contents. A file that cannot be loaded is treated as holding no members.
#[derive(Debug, Clone)]
pub struct MemberDirectory {
    path: PathBuf,
}

impl MemberDirectory {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Vec<MemberRecord> {
        match read_members(&self.path) {
            Ok(members) => members,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "member file not loaded");
                Vec::new()
            }
        }
    }

    /// Returns members `[offset, offset + limit)` in file order.
    #[must_use]
    pub fn list(&self, limit: usize, offset: usize) -> ListReport {
        let members = self.load();
        if members.is_empty() {
            return ListReport::NoMembers;
        }

        let total = members.len();
        let page: Vec<MemberRecord> = members.into_iter().skip(offset).take(limit).collect();
        if page.is_empty() {
            return ListReport::NoneAtOffset { offset };
        }

        ListReport::Page {
            offset,
            total,
            members: page,
        }
    }

    /// Finds members whose first name, last name or email contains `query`,
    /// ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchReport {
        let needle = query.to_lowercase();
        let contains = |value: Option<&str>| {
            value
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle.as_str())
        };

        let matches = self
            .load()
            .into_iter()
            .filter(|member| {
                contains(member.first_name())
                    || contains(member.last_name())
                    || contains(member.email())
            })
            .collect();

        SearchReport {
            query: query.to_string(),
            matches,
        }
    }

    /// Looks up the first member whose `id` column equals `member_id`.
    ///
    /// Ids are compared as text, so `"007"` does not match `7`.
    #[must_use]
    pub fn get_by_id(&self, member_id: i64) -> MemberLookup {
        let wanted = member_id.to_string();
        self.load()
            .into_iter()
            .find(|member| member.id() == Some(wanted.as_str()))
            .map_or(MemberLookup::NotFound(member_id), MemberLookup::Found)
    }

    #[must_use]
    pub fn count(&self) -> MemberCount {
        MemberCount {
            total: self.load().len(),
        }
    }

    /// Returns members whose gender equals `gender`, ignoring case.
    #[must_use]
    pub fn by_gender(&self, gender: &str) -> GenderReport {
        let wanted = gender.to_lowercase();
        let matches = self
            .load()
            .into_iter()
            .filter(|member| member.gender().unwrap_or_default().to_lowercase() == wanted)
            .collect();

        GenderReport {
            gender: gender.to_string(),
            matches,
        }
    }

    #[must_use]
    pub fn gender_statistics(&self) -> GenderStatistics {
        let members = self.load();
        GenderStatistics::from_genders(members.iter().map(MemberRecord::gender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_reports() {
        let directory = MemberDirectory::new("does/not/exist.csv");

        assert_eq!(directory.list(DEFAULT_LIST_LIMIT, 0), ListReport::NoMembers);
        assert_eq!(directory.count().total, 0);
        assert!(directory.search("a").matches.is_empty());
        assert_eq!(directory.get_by_id(1), MemberLookup::NotFound(1));
        assert_eq!(directory.gender_statistics().to_string(), "No members found.");
    }
}
