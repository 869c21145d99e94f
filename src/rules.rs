//! Safety rule catalog.
//!
//! Each safety toggle maps to exactly one rule. Rules are appended in catalog
//! order regardless of how the toggles were set.
use crate::document::Rule;
use crate::input::SafetyToggles;

struct CatalogEntry {
    name: &'static str,
    rule: &'static str,
    message: &'static str,
    enabled: fn(&SafetyToggles) -> bool,
}

const CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        name: "no-select-star",
        rule: r#"!query.sql.contains("SELECT *")"#,
        message: "list columns explicitly instead of SELECT *",
        enabled: |t| t.no_select_star,
    },
    CatalogEntry {
        name: "require-where-delete",
        rule: r#"!query.sql.contains("DELETE") || query.sql.contains("WHERE")"#,
        message: "DELETE statements must have a WHERE clause",
        enabled: |t| t.require_where,
    },
    CatalogEntry {
        name: "no-drop-table",
        rule: r#"!query.sql.contains("DROP TABLE")"#,
        message: "DROP TABLE is not allowed in queries",
        enabled: |t| t.no_drop_table,
    },
    CatalogEntry {
        name: "no-truncate",
        rule: r#"!query.sql.contains("TRUNCATE")"#,
        message: "TRUNCATE is not allowed in queries",
        enabled: |t| t.no_truncate,
    },
    CatalogEntry {
        name: "require-limit-select",
        rule: r#"query.cmd == "many" implies query.sql.contains("LIMIT")"#,
        message: ":many queries must have a LIMIT clause",
        enabled: |t| t.require_limit,
    },
];

/// Names of every rule the catalog can emit, in emission order.
pub fn catalog_names() -> Vec<&'static str> {
    CATALOG.iter().map(|entry| entry.name).collect()
}

pub fn safety_rules(toggles: &SafetyToggles) -> Vec<Rule> {
    CATALOG
        .iter()
        .filter(|entry| (entry.enabled)(toggles))
        .map(|entry| Rule {
            name: entry.name.to_string(),
            rule: entry.rule.to_string(),
            message: entry.message.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rules: &[Rule]) -> Vec<&str> {
        rules.iter().map(|rule| rule.name.as_str()).collect()
    }

    #[test]
    fn all_toggles_emit_the_full_catalog_in_order() {
        let rules = safety_rules(&SafetyToggles::ALL_ON);
        assert_eq!(names(&rules), catalog_names());
    }

    #[test]
    fn no_toggles_emit_nothing() {
        assert!(safety_rules(&SafetyToggles::OFF).is_empty());
    }

    #[test]
    fn toggle_assignment_order_does_not_change_rule_order() {
        let mut forward = SafetyToggles::OFF;
        forward.no_select_star = true;
        forward.no_truncate = true;
        forward.require_limit = true;

        let mut backward = SafetyToggles::OFF;
        backward.require_limit = true;
        backward.no_truncate = true;
        backward.no_select_star = true;

        let a = safety_rules(&forward);
        let b = safety_rules(&backward);
        assert_eq!(a, b);
        assert_eq!(
            names(&a),
            ["no-select-star", "no-truncate", "require-limit-select"]
        );
    }

    #[test]
    fn require_limit_rule_uses_implication() {
        let toggles = SafetyToggles {
            require_limit: true,
            ..SafetyToggles::OFF
        };
        let rules = safety_rules(&toggles);
        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].rule,
            r#"query.cmd == "many" implies query.sql.contains("LIMIT")"#
        );
        assert!(!rules[0].message.is_empty());
    }
}
