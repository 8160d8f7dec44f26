//! Member record model.

pub const FIELD_ID: &str = "id";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_GENDER: &str = "gender";
pub const FIELD_IP_ADDRESS: &str = "ip_address";

/// One data row of a member CSV file.
///
/// Fields keep the column order of the header. Recognized columns have typed
/// accessors; any other column is still reachable through [`MemberRecord::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRecord {
    fields: Vec<(String, String)>,
}

impl MemberRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Sets a field, replacing the value in place if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get(FIELD_ID)
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.get(FIELD_FIRST_NAME)
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.get(FIELD_LAST_NAME)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.get(FIELD_EMAIL)
    }

    #[must_use]
    pub fn gender(&self) -> Option<&str> {
        self.get(FIELD_GENDER)
    }

    #[must_use]
    pub fn ip_address(&self) -> Option<&str> {
        self.get(FIELD_IP_ADDRESS)
    }

    /// Returns `"<first_name> <last_name>"` with absent names rendered empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name().unwrap_or_default(),
            self.last_name().unwrap_or_default()
        )
    }
}

impl<K, V> FromIterator<(K, V)> for MemberRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_field_keeps_position_and_takes_later_value() {
        let record: MemberRecord = [("id", "1"), ("gender", "Male"), ("id", "2")]
            .into_iter()
            .collect();

        assert_eq!(record.len(), 2);
        assert_eq!(record.id(), Some("2"));
        let names: Vec<_> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "gender"]);
    }

    #[test]
    fn absent_names_render_empty_in_full_name() {
        let record: MemberRecord = [("first_name", "Ada")].into_iter().collect();
        assert_eq!(record.full_name(), "Ada ");
        assert_eq!(record.last_name(), None);
        assert_eq!(record.get("nickname"), None);
    }
}
