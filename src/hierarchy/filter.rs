//! Search-term pruning of a department forest

use super::DepartmentNode;

/// Keep nodes that match `term` or have a matching descendant.
///
/// Matching is a lowercase substring test against the name and description.
/// Retained nodes carry only their retained children. A blank term returns
/// the forest unchanged.
pub fn filter(forest: &[DepartmentNode], term: &str) -> Vec<DepartmentNode> {
    let term = term.trim();
    if term.is_empty() {
        return forest.to_vec();
    }

    let needle = term.to_lowercase();
    prune(forest, &needle)
}

fn prune(nodes: &[DepartmentNode], needle: &str) -> Vec<DepartmentNode> {
    nodes
        .iter()
        .filter_map(|node| {
            let children = prune(&node.children, needle);
            if children.is_empty() && !matches(node, needle) {
                return None;
            }
            Some(DepartmentNode {
                id: node.id,
                parent_id: node.parent_id,
                level: node.level,
                organization: node.organization.clone(),
                name: node.name.clone(),
                description: node.description.clone(),
                child_count: node.child_count,
                children,
            })
        })
        .collect()
}

fn matches(node: &DepartmentNode, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle)
        || node
            .description
            .as_deref()
            .map_or(false, |d| d.to_lowercase().contains(needle))
}
