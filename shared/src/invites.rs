use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of guest emails.
///
/// Emails are compared as exact strings; no normalisation or format check is
/// applied here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InviteList(Vec<String>);

impl InviteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `add` would append `email`: not empty and not already present.
    pub fn accepts(&self, email: &str) -> bool {
        !email.is_empty() && !self.contains(email)
    }

    /// Append `email` unless it is already present or empty.
    ///
    /// Returns `true` if the list changed. Duplicates are not an error.
    pub fn add(&mut self, email: &str) -> bool {
        if !self.accepts(email) {
            return false;
        }
        self.0.push(email.to_string());
        true
    }

    /// Drop every entry equal to `email`. Returns how many were removed.
    pub fn remove(&mut self, email: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|existing| existing != email);
        before - self.0.len()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.iter().any(|existing| existing == email)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }

    /// Short summary shown on the guest step.
    pub fn summary(&self) -> String {
        match self.0.len() {
            0 => "Who will be on this trip?".to_string(),
            1 => "1 guest invited".to_string(),
            n => format!("{} guests invited", n),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for InviteList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = InviteList::new();
        for email in iter {
            let email = email.into();
            list.add(&email);
        }
        list
    }
}
