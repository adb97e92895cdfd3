//! Built-in schemas.
//!
//! Each entry describes a payload consumed by one of the scripts shapeguard
//! was written for: user profiles, product-search filters and catalogs, and
//! audio transcription jobs.

use lazy_static::lazy_static;
use regex::Regex;
use shapeguard_core::{Schema, Validator};

lazy_static! {
    /// Loose email shape: something@something.tld
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Five-digit postal code
    static ref POSTAL_CODE_PATTERN: Regex = Regex::new(r"^\d{5}$").unwrap();

    /// Sort direction accepted by the product search
    static ref SORT_ORDER_PATTERN: Regex = Regex::new(r"^(asc|desc)$").unwrap();

    /// ISO 639-1 language code
    static ref LANGUAGE_CODE_PATTERN: Regex = Regex::new(r"^[a-z]{2}$").unwrap();
}

/// A named, built-in schema.
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> Validator,
}

impl CatalogEntry {
    /// Build a fresh validator for this entry.
    pub fn schema(&self) -> Validator {
        (self.build)()
    }
}

static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "user-profile",
        description: "User profile with personal info, address, contacts and preferences",
        build: user_profile,
    },
    CatalogEntry {
        name: "product-query",
        description: "Product search filters (category, price, rating, stock, sorting)",
        build: product_query,
    },
    CatalogEntry {
        name: "product-catalog",
        description: "List of products offered by the product search",
        build: product_catalog,
    },
    CatalogEntry {
        name: "transcription-job",
        description: "Audio transcription job settings",
        build: transcription_job,
    },
];

pub fn entries() -> &'static [CatalogEntry] {
    ENTRIES
}

pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    ENTRIES.iter().find(|entry| entry.name == name)
}

fn user_profile() -> Validator {
    let address = Schema::object([
        ("street", Schema::string().min_length(5)),
        ("city", Schema::string().min_length(2)),
        ("postal_code", Schema::string().pattern(POSTAL_CODE_PATTERN.clone())),
        ("country", Schema::string().min_length(2)),
    ]);

    let contact = Schema::object([
        ("type", Schema::string()),
        ("value", Schema::string().min_length(3)),
    ]);

    Schema::object([
        ("id", Validator::from(Schema::string().min_length(1))),
        (
            "personal_info",
            Schema::object([
                ("first_name", Validator::from(Schema::string().min_length(2))),
                ("last_name", Schema::string().min_length(2).into()),
                ("age", Schema::number().min_value(0).max_value(150).into()),
                (
                    "email",
                    Schema::string()
                        .pattern(EMAIL_PATTERN.clone())
                        .with_message("Please provide a valid email address")
                        .optional()
                        .into(),
                ),
            ])
            .into(),
        ),
        ("address", address.optional().into()),
        ("contacts", Schema::array(contact).into()),
        (
            "preferences",
            Schema::object([
                ("newsletter", Validator::from(Schema::boolean())),
                ("theme", Schema::string().optional().into()),
            ])
            .optional()
            .into(),
        ),
    ])
    .into()
}

fn product_query() -> Validator {
    Schema::object([
        ("category", Validator::from(Schema::string().min_length(1).optional())),
        ("max_price", Schema::number().non_negative().optional().into()),
        (
            "min_rating",
            Schema::number().min_value(0).max_value(5).optional().into(),
        ),
        ("in_stock", Schema::boolean().optional().into()),
        ("keywords", Schema::string().optional().into()),
        ("sort_by", Schema::string().min_length(1).optional().into()),
        (
            "sort_order",
            Schema::string()
                .pattern(SORT_ORDER_PATTERN.clone())
                .with_message("Sort order must be 'asc' or 'desc'")
                .optional()
                .into(),
        ),
        (
            "limit",
            Schema::number().integer().positive().optional().into(),
        ),
    ])
    .into()
}

fn product_catalog() -> Validator {
    let product = Schema::object([
        ("name", Validator::from(Schema::string().min_length(1))),
        ("category", Schema::string().min_length(1).into()),
        ("price", Schema::number().non_negative().into()),
        ("rating", Schema::number().min_value(0).max_value(5).into()),
        ("in_stock", Schema::boolean().into()),
    ])
    .allow_unknown();

    Schema::array(product).into()
}

fn transcription_job() -> Validator {
    Schema::object([
        (
            "audio_path",
            Validator::from(
                Schema::string()
                    .min_length(1)
                    .with_message("Audio path must not be empty"),
            ),
        ),
        ("model", Schema::string().min_length(1).optional().into()),
        (
            "language",
            Schema::string()
                .pattern(LANGUAGE_CODE_PATTERN.clone())
                .with_message("Language must be a two-letter code")
                .optional()
                .into(),
        ),
        ("output_dir", Schema::string().min_length(1).optional().into()),
        ("summarize", Schema::boolean().optional().into()),
    ])
    .into()
}
