//! Mermaid flowchart rendering

use std::collections::HashSet;
use std::fmt::Write;

use super::DepartmentNode;

const CLASS_DEFS: [&str; 7] = [
    "ulb-root fill:#1e40af,stroke:#1e3a8a,stroke-width:3px,color:#fff",
    "mcg-head fill:#059669,stroke:#047857,stroke-width:2px,color:#fff",
    "gmda-head fill:#dc2626,stroke:#b91c1c,stroke-width:2px,color:#fff",
    "ward-node fill:#7c3aed,stroke:#6d28d9,stroke-width:2px,color:#fff",
    "dept-head fill:#2563eb,stroke:#1d4ed8,stroke-width:2px,color:#fff",
    "sub-dept fill:#0891b2,stroke:#0e7490,stroke-width:1px,color:#fff",
    "default fill:#6b7280,stroke:#4b5563,stroke-width:1px,color:#fff",
];

/// Render a forest as a top-down Mermaid graph.
///
/// Only nodes listed in `expanded` show their children; a collapsed node with
/// children gets a `[+N]` suffix.
pub fn render_mermaid(forest: &[DepartmentNode], expanded: &HashSet<i64>) -> String {
    let mut out = String::from("graph TD\n");
    for root in forest {
        render_node(&mut out, root, 0, expanded);
    }
    for class_def in CLASS_DEFS {
        let _ = writeln!(out, "    classDef {}", class_def);
    }
    out
}

fn render_node(out: &mut String, node: &DepartmentNode, depth: usize, expanded: &HashSet<i64>) {
    let is_expanded = expanded.contains(&node.id);
    let name = escape_label(&node.name);
    let label = if !node.children.is_empty() && !is_expanded {
        format!("{} [+{}]", name, node.children.len())
    } else {
        name
    };

    // Writing into a String cannot fail
    let _ = writeln!(out, "    node{}[\"{}\"]", node.id, label);
    let _ = writeln!(out, "    class node{} {}", node.id, node_class(node, depth));

    if is_expanded {
        for child in &node.children {
            let _ = writeln!(out, "    node{} --> node{}", node.id, child.id);
            render_node(out, child, depth + 1, expanded);
        }
    }
}

fn node_class(node: &DepartmentNode, depth: usize) -> &'static str {
    match (node.organization.as_str(), depth) {
        ("ULB", 0) => "ulb-root",
        ("MCG", 0..=1) => "mcg-head",
        ("GMDA", 0..=1) => "gmda-head",
        ("WARD", _) => "ward-node",
        (_, 1) => "dept-head",
        (_, 2) => "sub-dept",
        _ => "default",
    }
}

fn escape_label(name: &str) -> String {
    name.replace('"', "#quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fixtures::{mayor_office, record};
    use crate::hierarchy::{build, HierarchyPolicy};

    #[test]
    fn collapsed_root_shows_child_count() {
        let forest = build(&mayor_office(), &HierarchyPolicy::default());
        let chart = render_mermaid(&forest, &HashSet::new());

        assert!(chart.starts_with("graph TD\n"));
        assert!(chart.contains("node1[\"Mayor Office [+2]\"]"));
        assert!(!chart.contains("node2"));
        assert!(chart.contains("classDef ward-node"));
    }

    #[test]
    fn expanded_root_emits_edges_in_sibling_order() {
        let forest = build(&mayor_office(), &HierarchyPolicy::default());
        let chart = render_mermaid(&forest, &HashSet::from([1]));

        let first = chart.find("node1 --> node3").unwrap();
        let second = chart.find("node1 --> node2").unwrap();
        assert!(first < second);
        assert!(chart.contains("node1[\"Mayor Office\"]"));
        assert!(chart.contains("class node1 mcg-head"));
        assert!(chart.contains("class node2 mcg-head"));
    }

    #[test]
    fn classes_follow_organization_and_depth() {
        let mut records = vec![
            record(1, None, 0, "ULB Department"),
            record(2, Some(1), 1, "Directorate"),
            record(3, Some(2), 2, "Town Planning"),
            record(4, Some(3), 3, "Field Office"),
        ];
        for r in &mut records {
            r.organization = "ULB".to_string();
        }
        let forest = build(&records, &HierarchyPolicy::default());
        let chart = render_mermaid(&forest, &HashSet::from([1, 2, 3]));

        assert!(chart.contains("class node1 ulb-root"));
        assert!(chart.contains("class node2 dept-head"));
        assert!(chart.contains("class node3 sub-dept"));
        assert!(chart.contains("class node4 default"));
    }

    #[test]
    fn quotes_are_escaped() {
        let forest = build(&[record(9, None, 0, "The \"Cell\"")], &HierarchyPolicy::default());
        let chart = render_mermaid(&forest, &HashSet::new());
        assert!(chart.contains("node9[\"The #quot;Cell#quot;\"]"));
    }
}
