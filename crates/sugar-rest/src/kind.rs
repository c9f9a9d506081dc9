//! Record kinds: the fixed registry of SugarCRM modules this crate knows by
//! name, plus a generic fallback for everything else.

use std::fmt;

/// Which SugarCRM module a [`Record`](crate::Record) belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Call,
    Campaign,
    Contact,
    Document,
    Email,
    Lead,
    Module,
    Note,
    Opportunity,
    Product,
    Prospect,
    ProspectList,
    Quote,
    Report,
    User,
    /// A module outside the registry (custom modules, `Accounts`, ...).
    /// Holds the module label exactly as given.
    Generic(String),
}

impl RecordKind {
    /// Every registered kind, in registry order.
    pub const REGISTERED: [RecordKind; 15] = [
        RecordKind::Call,
        RecordKind::Campaign,
        RecordKind::Contact,
        RecordKind::Document,
        RecordKind::Email,
        RecordKind::Lead,
        RecordKind::Module,
        RecordKind::Note,
        RecordKind::Opportunity,
        RecordKind::Product,
        RecordKind::Prospect,
        RecordKind::ProspectList,
        RecordKind::Quote,
        RecordKind::Report,
        RecordKind::User,
    ];

    /// Resolve a module label reported by the server (e.g. `"Leads"`,
    /// `"opportunities"`) to a registered kind.
    ///
    /// The label is singularized by dropping its last character and turning
    /// a trailing `ie` into `y`, then matched against the registered names
    /// ignoring case. Returns `None` when nothing matches; that is not an
    /// error.
    ///
    /// ```rust
    /// use sugarcrm_rest::RecordKind;
    ///
    /// assert_eq!(RecordKind::resolve("Leads"), Some(RecordKind::Lead));
    /// assert_eq!(RecordKind::resolve("Opportunities"), Some(RecordKind::Opportunity));
    /// assert_eq!(RecordKind::resolve("Accounts"), None);
    /// ```
    pub fn resolve(label: &str) -> Option<RecordKind> {
        let singular = singularize(label)?;
        Self::REGISTERED
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&singular))
    }

    /// Resolve a label, falling back to [`RecordKind::Generic`].
    pub fn from_label(label: &str) -> RecordKind {
        Self::resolve(label).unwrap_or_else(|| RecordKind::Generic(label.to_string()))
    }

    /// Singular variant name (`"Lead"`); the raw label for generic kinds.
    pub fn name(&self) -> &str {
        match self {
            RecordKind::Call => "Call",
            RecordKind::Campaign => "Campaign",
            RecordKind::Contact => "Contact",
            RecordKind::Document => "Document",
            RecordKind::Email => "Email",
            RecordKind::Lead => "Lead",
            RecordKind::Module => "Module",
            RecordKind::Note => "Note",
            RecordKind::Opportunity => "Opportunity",
            RecordKind::Product => "Product",
            RecordKind::Prospect => "Prospect",
            RecordKind::ProspectList => "ProspectList",
            RecordKind::Quote => "Quote",
            RecordKind::Report => "Report",
            RecordKind::User => "User",
            RecordKind::Generic(label) => label,
        }
    }

    /// Plural module label used on the wire (`"Leads"`).
    pub fn label(&self) -> &str {
        match self {
            RecordKind::Call => "Calls",
            RecordKind::Campaign => "Campaigns",
            RecordKind::Contact => "Contacts",
            RecordKind::Document => "Documents",
            RecordKind::Email => "Emails",
            RecordKind::Lead => "Leads",
            RecordKind::Module => "Modules",
            RecordKind::Note => "Notes",
            RecordKind::Opportunity => "Opportunities",
            RecordKind::Product => "Products",
            RecordKind::Prospect => "Prospects",
            RecordKind::ProspectList => "ProspectLists",
            RecordKind::Quote => "Quotes",
            RecordKind::Report => "Reports",
            RecordKind::User => "Users",
            RecordKind::Generic(label) => label,
        }
    }

    /// Returns true for kinds outside the registry.
    pub fn is_generic(&self) -> bool {
        matches!(self, RecordKind::Generic(_))
    }
}

impl Default for RecordKind {
    fn default() -> Self {
        RecordKind::Generic(String::new())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `"Opportunities"` → `"Opportunity"`, `"Leads"` → `"Lead"`.
fn singularize(label: &str) -> Option<String> {
    let mut chars = label.chars();
    chars.next_back()?;
    let stem = chars.as_str();
    Some(match stem.strip_suffix("ie") {
        Some(base) => format!("{base}y"),
        None => stem.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_label_resolves_to_itself() {
        for kind in RecordKind::REGISTERED {
            assert_eq!(
                RecordKind::resolve(kind.label()),
                Some(kind.clone()),
                "label {} should resolve",
                kind.label()
            );
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(RecordKind::resolve("contacts"), Some(RecordKind::Contact));
        assert_eq!(RecordKind::resolve("LEADS"), Some(RecordKind::Lead));
        assert_eq!(
            RecordKind::resolve("prospectlists"),
            Some(RecordKind::ProspectList)
        );
    }

    #[test]
    fn test_unknown_labels_do_not_match() {
        assert_eq!(RecordKind::resolve("Accounts"), None);
        assert_eq!(RecordKind::resolve("Companies"), None);
        assert_eq!(RecordKind::resolve("Lead"), None);
        assert_eq!(RecordKind::resolve(""), None);
        assert_eq!(RecordKind::resolve("s"), None);
    }

    #[test]
    fn test_from_label_falls_back_to_generic() {
        let kind = RecordKind::from_label("Accounts");
        assert!(kind.is_generic());
        assert_eq!(kind.label(), "Accounts");
        assert_eq!(kind.name(), "Accounts");

        assert_eq!(RecordKind::from_label("Notes"), RecordKind::Note);
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("Companies").as_deref(), Some("Company"));
        assert_eq!(singularize("Leads").as_deref(), Some("Lead"));
        assert_eq!(singularize(""), None);
    }
}
