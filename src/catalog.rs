//! Static pattern catalog.
//!
//! The catalog is the read-only data surface of the engine: canonical
//! keyword → pattern mappings used for direct (non-compound) matches, and the
//! source of truth that single-feature recognizers delegate to so a bare
//! keyword always resolves to the same canonical description.
//!
//! The table is process-wide, initialized at compile time and never mutated,
//! so unrestricted concurrent reads are safe. Entry order matters: the direct
//! hit is the FIRST entry (declaration order) whose keyword set intersects
//! the normalized input.

/// Broad type of value a pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternType {
    Email,
    Phone,
    Url,
    Date,
    Time,
    Number,
    Text,
    Custom,
}

/// Typed key for every catalog entry. Using an enum (rather than string keys)
/// means a missing or mistyped lookup is a compile error, not a runtime miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Email,
    Phone,
    Url,
    Ipv4,
    Ipv6,
    Date,
    Time,
    Number,
    Decimal,
    Uuid,
    ZipCode,
    CreditCard,
    HexColor,
    Username,
    Password,
    Slug,
    SemVer,
    MacAddress,
}

/// One canonical catalog entry. Immutable, defined at process start.
#[derive(Debug, Clone, Copy)]
pub struct PatternDescriptor {
    /// Canonical key, used in suggestions.
    pub key: &'static str,
    pub category: Category,
    /// Keywords that select this entry via substring containment.
    pub keywords: &'static [&'static str],
    /// The regular expression, verbatim. Must compile.
    pub expression: &'static str,
    pub description: &'static str,
    pub kind: PatternType,
    /// Sample values; every one must match `expression`.
    pub examples: &'static [&'static str],
}

/// All catalog entries, in direct-hit priority order.
static CATALOG: &[PatternDescriptor] = &[
    PatternDescriptor {
        key: "email",
        category: Category::Email,
        keywords: &["email", "e-mail", "mail address"],
        expression: r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$",
        description: "email address",
        kind: PatternType::Email,
        examples: &["user@example.com", "jane.doe+tag@mail.co"],
    },
    PatternDescriptor {
        key: "phone",
        category: Category::Phone,
        keywords: &["phone", "telephone", "mobile number"],
        expression: r"^\+?[0-9][0-9 ().-]{6,18}[0-9]$",
        description: "phone number",
        kind: PatternType::Phone,
        examples: &["+1 (555) 123-4567", "0701234567"],
    },
    PatternDescriptor {
        key: "url",
        category: Category::Url,
        keywords: &["url", "link", "web address", "website"],
        expression: r"^https?://[^\s/$.?#][^\s]*$",
        description: "web URL",
        kind: PatternType::Url,
        examples: &["https://example.com", "http://docs.rs/regex"],
    },
    PatternDescriptor {
        key: "ipv4",
        category: Category::Ipv4,
        keywords: &["ipv4", "ip address"],
        expression: r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
        description: "IPv4 address",
        kind: PatternType::Custom,
        examples: &["192.168.0.1", "10.0.0.255"],
    },
    PatternDescriptor {
        key: "ipv6",
        category: Category::Ipv6,
        keywords: &["ipv6"],
        expression: r"^[0-9A-Fa-f:]{2,45}$",
        description: "IPv6 address",
        kind: PatternType::Custom,
        examples: &["::1", "2001:db8::ff00:42:8329"],
    },
    PatternDescriptor {
        key: "date",
        category: Category::Date,
        keywords: &["date", "calendar date"],
        expression: r"^\d{4}-\d{2}-\d{2}$",
        description: "calendar date (YYYY-MM-DD)",
        kind: PatternType::Date,
        examples: &["2024-01-31", "1999-12-01"],
    },
    PatternDescriptor {
        key: "time",
        category: Category::Time,
        keywords: &["time", "clock time"],
        expression: r"^(?:[01][0-9]|2[0-3]):[0-5][0-9](?::[0-5][0-9])?$",
        description: "time of day (HH:MM)",
        kind: PatternType::Time,
        examples: &["23:59", "09:30:00"],
    },
    PatternDescriptor {
        key: "number",
        category: Category::Number,
        keywords: &["number", "integer", "numeric"],
        expression: r"^-?\d+$",
        description: "whole number",
        kind: PatternType::Number,
        examples: &["42", "-17"],
    },
    PatternDescriptor {
        key: "decimal",
        category: Category::Decimal,
        keywords: &["decimal", "float", "floating point"],
        expression: r"^-?\d+\.\d+$",
        description: "decimal number",
        kind: PatternType::Number,
        examples: &["3.14", "-0.5"],
    },
    PatternDescriptor {
        key: "uuid",
        category: Category::Uuid,
        keywords: &["uuid", "guid"],
        expression: r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
        description: "UUID",
        kind: PatternType::Custom,
        examples: &["550e8400-e29b-41d4-a716-446655440000"],
    },
    PatternDescriptor {
        key: "zip-code",
        category: Category::ZipCode,
        keywords: &["zip code", "zipcode", "postal code"],
        expression: r"^\d{5}(?:-\d{4})?$",
        description: "US ZIP code",
        kind: PatternType::Custom,
        examples: &["90210", "12345-6789"],
    },
    PatternDescriptor {
        key: "credit-card",
        category: Category::CreditCard,
        keywords: &["credit card", "card number"],
        expression: r"^\d{4}[ -]?\d{4}[ -]?\d{4}[ -]?\d{4}$",
        description: "credit card number",
        kind: PatternType::Custom,
        examples: &["4111111111111111", "4111 1111 1111 1111"],
    },
    PatternDescriptor {
        key: "hex-color",
        category: Category::HexColor,
        keywords: &["hex color", "color code", "colour code"],
        expression: r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$",
        description: "hex color code",
        kind: PatternType::Custom,
        examples: &["#fff", "#1A2B3C"],
    },
    PatternDescriptor {
        key: "username",
        category: Category::Username,
        keywords: &["username", "user name", "handle"],
        expression: r"^[A-Za-z0-9_]{3,16}$",
        description: "username (3-16 word characters)",
        kind: PatternType::Text,
        examples: &["jane_doe", "user42"],
    },
    PatternDescriptor {
        key: "password",
        category: Category::Password,
        keywords: &["password"],
        expression: r"^.{8,}$",
        description: "password of at least 8 characters",
        kind: PatternType::Text,
        examples: &["correct horse battery"],
    },
    PatternDescriptor {
        key: "slug",
        category: Category::Slug,
        keywords: &["slug", "kebab case"],
        expression: r"^[a-z0-9]+(?:-[a-z0-9]+)*$",
        description: "URL slug",
        kind: PatternType::Text,
        examples: &["hello-world", "a-1-b"],
    },
    PatternDescriptor {
        key: "semver",
        category: Category::SemVer,
        keywords: &["semver", "semantic version", "version number"],
        expression: r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?$",
        description: "semantic version",
        kind: PatternType::Custom,
        examples: &["1.0.0", "2.1.3-beta.1"],
    },
    PatternDescriptor {
        key: "mac-address",
        category: Category::MacAddress,
        keywords: &["mac address"],
        expression: r"^(?:[0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}$",
        description: "MAC address",
        kind: PatternType::Custom,
        examples: &["00:1B:44:11:3A:B7"],
    },
];

/// The full catalog, in direct-hit priority order. Read-only.
pub fn entries() -> &'static [PatternDescriptor] {
    CATALOG
}

/// Typed lookup. Every `Category` variant has exactly one catalog entry
/// (checked by test).
pub(crate) fn descriptor(category: Category) -> &'static PatternDescriptor {
    CATALOG.iter().find(|d| d.category == category).expect("every category has a catalog entry")
}

/// Direct keyword hit: the first entry (declaration order) with a keyword
/// occurring as a substring of the normalized text. Consulted only after the
/// recognizer registry found nothing, since compound recognizers encode more
/// specific intent than a generic keyword.
pub(crate) fn direct_hit(norm: &str) -> Option<&'static PatternDescriptor> {
    CATALOG.iter().find(|d| d.keywords.iter().any(|kw| norm.contains(kw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn every_expression_compiles() {
        for entry in entries() {
            assert!(Regex::new(entry.expression).is_ok(), "catalog entry {} does not compile", entry.key);
        }
    }

    #[test]
    fn every_example_matches_its_own_expression() {
        for entry in entries() {
            let re = Regex::new(entry.expression).unwrap();
            for example in entry.examples {
                assert!(re.is_match(example), "example {:?} does not match catalog entry {}", example, entry.key);
            }
        }
    }

    #[test]
    fn every_category_has_exactly_one_entry() {
        use Category::*;
        let all = [
            Email, Phone, Url, Ipv4, Ipv6, Date, Time, Number, Decimal, Uuid, ZipCode, CreditCard, HexColor,
            Username, Password, Slug, SemVer, MacAddress,
        ];
        assert_eq!(all.len(), entries().len());
        for cat in all {
            assert_eq!(entries().iter().filter(|d| d.category == cat).count(), 1, "{cat:?}");
        }
    }

    #[test]
    fn direct_hit_uses_declaration_order() {
        // "email" precedes everything else, so a text mentioning several
        // keywords resolves to the first declared entry.
        let hit = direct_hit("email or phone").unwrap();
        assert_eq!(hit.category, Category::Email);

        assert!(direct_hit("nothing relevant here at all").is_none());
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in entries().iter().enumerate() {
            for b in entries().iter().skip(i + 1) {
                assert_ne!(a.key, b.key);
            }
        }
    }
}
