//! Acronym-aware identifier normalization.

use crate::utils::{capitalize, to_pascal_case, words};

/// Acronyms fully capitalized when they end an exported identifier.
pub const DEFAULT_ACRONYMS: &[&str] = &[
    "Api", "Id", "Http", "Https", "Pdf", "Ip", "Json", "Sql", "Vat", "Tcp", "Tls", "Udp", "Ui",
    "Uid", "Uuid", "Uri", "Url", "Utf8",
];

/// Derives target-language identifiers from schema names.
///
/// Every method is pure: the same input always yields the same output, so a
/// single `Naming` can be shared by concurrently running backends.
///
/// ```
/// use rpcgen_core::Naming;
///
/// let naming = Naming::default();
/// assert_eq!(naming.exported_name("user_id"), "UserID");
/// assert_eq!(naming.member_name("user_id"), "userID");
/// assert_eq!(naming.anchor_name("UserID"), "user_id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Naming {
    acronyms: &'static [&'static str],
}

impl Naming {
    /// Normalizer using [`DEFAULT_ACRONYMS`].
    pub const DEFAULT: Self = Self::with_acronyms(DEFAULT_ACRONYMS);

    /// Normalizer with no acronym handling (`user_id` -> `UserId`).
    pub const PLAIN: Self = Self::with_acronyms(&[]);

    /// Create a normalizer using the given acronym table.
    ///
    /// Entries are written in title case, e.g. `Http`.
    pub const fn with_acronyms(acronyms: &'static [&'static str]) -> Self {
        Self { acronyms }
    }

    pub fn plain() -> Self {
        Self::PLAIN
    }

    pub fn acronyms(&self) -> &'static [&'static str] {
        self.acronyms
    }

    /// Upper-camel identifier for exported symbols (types, public functions).
    ///
    /// When the identifier ends with a known acronym, that suffix is fully
    /// capitalized. The longest matching acronym wins.
    pub fn exported_name(&self, s: &str) -> String {
        self.upcase_suffix(to_pascal_case(s))
    }

    /// Lower-camel identifier for members (fields, local functions).
    ///
    /// The first word is lowercased entirely; the remaining words follow
    /// [`Naming::exported_name`], so acronym casing agrees between the two.
    pub fn member_name(&self, s: &str) -> String {
        let words = words(s);
        match words.split_first() {
            None => String::new(),
            Some((first, [])) => first.clone(),
            Some((first, rest)) => {
                let tail: String = rest.iter().map(|w| capitalize(w)).collect();
                format!("{}{}", first, self.upcase_suffix(tail))
            }
        }
    }

    /// Snake-case identifier for documentation anchors.
    pub fn anchor_name(&self, s: &str) -> String {
        words(s).join("_")
    }

    fn upcase_suffix(&self, mut name: String) -> String {
        let acronym = self
            .acronyms
            .iter()
            .filter(|a| name.ends_with(**a))
            .max_by_key(|a| a.len());

        if let Some(acronym) = acronym {
            let start = name.len() - acronym.len();
            name.replace_range(start.., &acronym.to_uppercase());
        }
        name
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_name_acronyms() {
        let naming = Naming::default();
        assert_eq!(naming.exported_name("user_id"), "UserID");
        assert_eq!(naming.exported_name("ip"), "IP");
        assert_eq!(naming.exported_name("api_url"), "ApiURL");
        assert_eq!(naming.exported_name("device_uuid"), "DeviceUUID");
        assert_eq!(naming.exported_name("callback_https"), "CallbackHTTPS");
        assert_eq!(naming.exported_name("encoding_utf8"), "EncodingUTF8");
    }

    #[test]
    fn test_exported_name_only_suffix() {
        let naming = Naming::default();
        assert_eq!(naming.exported_name("identity_id"), "IdentityID");
        assert_eq!(naming.exported_name("id_token"), "IdToken");
        assert_eq!(naming.exported_name("add_item"), "AddItem");
        assert_eq!(naming.exported_name("valid"), "Valid");
    }

    #[test]
    fn test_member_name() {
        let naming = Naming::default();
        assert_eq!(naming.member_name("user_id"), "userID");
        assert_eq!(naming.member_name("id"), "id");
        assert_eq!(naming.member_name("add_item"), "addItem");
        assert_eq!(naming.member_name("ip_address"), "ipAddress");
        assert_eq!(naming.member_name(""), "");
    }

    #[test]
    fn test_member_and_exported_agree() {
        let naming = Naming::default();
        for name in ["user_id", "remote_ip", "home_url", "get_items"] {
            let exported = naming.exported_name(name);
            let member = naming.member_name(name);
            assert_eq!(exported[1..], member[1..], "{}", name);
        }
    }

    #[test]
    fn test_anchor_name() {
        let naming = Naming::default();
        assert_eq!(naming.anchor_name("UserID"), "user_id");
        assert_eq!(naming.anchor_name("items.add_item"), "items_add_item");
    }

    #[test]
    fn test_plain_naming() {
        let naming = Naming::plain();
        assert_eq!(naming.exported_name("user_id"), "UserId");
        assert_eq!(naming.member_name("user_id"), "userId");
    }

    #[test]
    fn test_custom_acronyms() {
        let naming = Naming::with_acronyms(&["Db"]);
        assert_eq!(naming.exported_name("main_db"), "MainDB");
        assert_eq!(naming.exported_name("user_id"), "UserId");
    }
}
