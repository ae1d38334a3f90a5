//! Identifier normalization
//!
//! Converts snake_case catalog identifiers into the casing the generated
//! schema requires, and singularizes table-derived names so a `users` table
//! becomes a `User` message. Singularization is suffix-heuristic based;
//! irregular plurals (`people`, `children`) are a known limitation.

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Message name for a table: UpperCamelCase, singularized.
///
/// `"user_accounts"` -> `"UserAccount"`, `"categories"` -> `"Category"`.
pub fn message_name(table: &str) -> String {
    singularize(&upper_camel(table))
}

/// Enum name for a column with a fixed value set: the singular camel-case
/// table name concatenated with the camel-case column name, so tables that
/// share a column name get distinct enums.
///
/// `("users", "status")` -> `"UserStatus"`.
pub fn enum_name(table: &str, column: &str) -> String {
    format!("{}{}", message_name(table), upper_camel(column))
}

/// Enum value name for a literal: uppercased, with runs of non-word
/// characters collapsed to a single underscore.
///
/// `"co-op"` -> `"CO_OP"`.
pub fn enum_value_name(literal: &str) -> String {
    NON_WORD.replace_all(&literal.to_uppercase(), "_").into_owned()
}

/// snake_case (or otherwise underscore-delimited) to UpperCamelCase
fn upper_camel(ident: &str) -> String {
    ident
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Heuristic plural-to-singular conversion on an already camel-cased name
fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        return format!("{stem}y");
    }
    // statuses -> status, boxes -> box, quizzes keep a trailing z, churches -> church
    for sibilant in ["ses", "xes", "zes", "ches", "shes"] {
        if name.ends_with(sibilant) {
            return name[..name.len() - 2].to_string();
        }
    }
    if name.ends_with('s') && !name.ends_with("ss") {
        return name[..name.len() - 1].to_string();
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_are_camel_and_singular() {
        assert_eq!(message_name("users"), "User");
        assert_eq!(message_name("categories"), "Category");
        assert_eq!(message_name("user_accounts"), "UserAccount");
        assert_eq!(message_name("order_items"), "OrderItem");
        assert_eq!(message_name("statuses"), "Status");
        assert_eq!(message_name("boxes"), "Box");
    }

    #[test]
    fn already_singular_names_pass_through() {
        assert_eq!(message_name("person"), "Person");
        assert_eq!(message_name("address"), "Address");
    }

    #[test]
    fn enum_names_combine_table_and_column() {
        assert_eq!(enum_name("users", "status"), "UserStatus");
        assert_eq!(enum_name("orders", "status"), "OrderStatus");
        assert_eq!(enum_name("support_tickets", "priority_level"), "SupportTicketPriorityLevel");
    }

    #[test]
    fn enum_value_names_are_sanitized() {
        assert_eq!(enum_value_name("active"), "ACTIVE");
        assert_eq!(enum_value_name("co-op"), "CO_OP");
        assert_eq!(enum_value_name("not set"), "NOT_SET");
        assert_eq!(enum_value_name("a--b"), "A_B");
    }
}
