//! Forest construction from flat department rows

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::{DepartmentNode, DepartmentRecord, HierarchyPolicy, RootPolicy};

/// Build a forest from flat records.
///
/// Every record with a unique id ends up in the output exactly once. Records
/// whose parent is missing, unresolvable, or part of a cycle become roots.
/// Under [`RootPolicy::NullParent`] they are sorted together with the
/// parentless roots; under [`RootPolicy::Container`] they follow the
/// container's children.
pub fn build(records: &[DepartmentRecord], policy: &HierarchyPolicy) -> Vec<DepartmentNode> {
    if records.is_empty() {
        return Vec::new();
    }

    // id -> index of the record owning that id; later duplicates replace earlier ones
    let mut lookup: HashMap<i64, usize> = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        if lookup.insert(record.id, idx).is_some() {
            debug!(id = record.id, "duplicate department id, keeping the last row");
        }
    }

    let live: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(idx, record)| lookup.get(&record.id) == Some(idx))
        .map(|(idx, _)| idx)
        .collect();

    let mut parents: HashMap<i64, i64> = HashMap::with_capacity(live.len());
    let mut policy_roots: HashSet<i64> = HashSet::new();

    for &idx in &live {
        let record = &records[idx];
        match (policy.root, record.parent_id) {
            (RootPolicy::NullParent, None) => {
                policy_roots.insert(record.id);
            }
            (RootPolicy::Container(container), Some(parent)) if parent == container => {
                policy_roots.insert(record.id);
            }
            (_, Some(parent)) if parent != record.id && lookup.contains_key(&parent) => {
                parents.insert(record.id, parent);
            }
            (_, parent) => {
                debug!(id = record.id, ?parent, "department parent not in scope, promoting to root");
            }
        }
    }

    let ids: Vec<i64> = live.iter().map(|&idx| records[idx].id).collect();
    break_cycles(&ids, &mut parents);

    let mut children: HashMap<i64, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    let mut orphans = Vec::new();

    for &idx in &live {
        let id = records[idx].id;
        match parents.get(&id) {
            Some(parent) => children.entry(*parent).or_default().push(idx),
            None if policy_roots.contains(&id) => roots.push(idx),
            None => orphans.push(idx),
        }
    }

    let order = SiblingOrder::new(&policy.priority);
    let assemble_all = |indices: Vec<usize>| {
        let mut nodes: Vec<DepartmentNode> = indices
            .into_iter()
            .map(|idx| assemble(idx, records, &children, &order))
            .collect();
        order.sort(&mut nodes);
        nodes
    };

    match policy.root {
        // Promoted records are ordinary roots when parentless records are the roots
        RootPolicy::NullParent => {
            roots.extend(orphans);
            assemble_all(roots)
        }
        RootPolicy::Container(_) => {
            let mut forest = assemble_all(roots);
            forest.extend(assemble_all(orphans));
            forest
        }
    }
}

/// Drop the parent link of any record that would become its own ancestor.
///
/// Records are visited in input order, so the first member of a cycle seen
/// in the input is the one promoted to root.
fn break_cycles(ids: &[i64], parents: &mut HashMap<i64, i64>) {
    for &id in ids {
        let mut seen = HashSet::new();
        let mut cursor = parents.get(&id).copied();

        while let Some(current) = cursor {
            if current == id {
                warn!(id, "department parent chain forms a cycle, promoting to root");
                parents.remove(&id);
                break;
            }
            // Leads into a cycle this record is not part of
            if !seen.insert(current) {
                break;
            }
            cursor = parents.get(&current).copied();
        }
    }
}

fn assemble(
    idx: usize,
    records: &[DepartmentRecord],
    children: &HashMap<i64, Vec<usize>>,
    order: &SiblingOrder,
) -> DepartmentNode {
    let record = &records[idx];
    let mut node = DepartmentNode::from(record.clone());

    if let Some(kids) = children.get(&record.id) {
        node.children = kids
            .iter()
            .map(|&kid| assemble(kid, records, children, order))
            .collect();
        order.sort(&mut node.children);
        node.child_count = node.children.len();
    }

    node
}

/// Sibling ordering: priority marker, then level, then name
struct SiblingOrder {
    markers: Vec<String>,
}

impl SiblingOrder {
    fn new(priority: &[String]) -> Self {
        let markers = priority
            .iter()
            .map(|marker| marker.trim().to_lowercase())
            .filter(|marker| !marker.is_empty())
            .collect();
        Self { markers }
    }

    fn rank(&self, name: &str) -> usize {
        if self.markers.is_empty() {
            return 0;
        }
        let name = name.to_lowercase();
        self.markers
            .iter()
            .position(|marker| name.contains(marker.as_str()))
            .unwrap_or(self.markers.len())
    }

    fn compare(&self, a: &DepartmentNode, b: &DepartmentNode) -> Ordering {
        self.rank(&a.name)
            .cmp(&self.rank(&b.name))
            .then(a.level.cmp(&b.level))
            .then_with(|| a.name.cmp(&b.name))
            .then(a.id.cmp(&b.id))
    }

    fn sort(&self, nodes: &mut [DepartmentNode]) {
        nodes.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::fixtures::{mayor_office, record};
    use crate::hierarchy::forest_len;

    fn names(nodes: &[DepartmentNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    fn find(forest: &[DepartmentNode], id: i64) -> Option<&DepartmentNode> {
        forest.iter().find_map(|node| {
            if node.id == id {
                Some(node)
            } else {
                find(&node.children, id)
            }
        })
    }

    #[test]
    fn empty_input_builds_empty_forest() {
        assert!(build(&[], &HierarchyPolicy::default()).is_empty());
    }

    #[test]
    fn children_sorted_by_level_then_name() {
        let forest = build(&mayor_office(), &HierarchyPolicy::default());

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, 1);
        assert_eq!(names(&forest[0].children), vec!["Commissioner", "Deputy Mayor"]);
        assert_eq!(forest[0].child_count, 2);
        assert!(forest[0].children.iter().all(|c| c.child_count == 0));
    }

    #[test]
    fn level_wins_over_name() {
        let records = vec![
            record(1, None, 0, "Root"),
            record(2, Some(1), 3, "Accounts"),
            record(3, Some(1), 1, "Zonal Office"),
        ];
        let forest = build(&records, &HierarchyPolicy::default());
        assert_eq!(names(&forest[0].children), vec!["Zonal Office", "Accounts"]);
    }

    #[test]
    fn priority_markers_promote_siblings() {
        let policy = HierarchyPolicy::default().with_priority(["Commissioner", "deputy"]);
        let mut records = mayor_office();
        records.push(record(4, Some(1), 0, "Accounts Branch"));

        let forest = build(&records, &policy);
        assert_eq!(
            names(&forest[0].children),
            vec!["Commissioner", "Deputy Mayor", "Accounts Branch"]
        );
    }

    #[test]
    fn blank_priority_markers_are_ignored() {
        let policy = HierarchyPolicy::default().with_priority(["", "  "]);
        let forest = build(&mayor_office(), &policy);
        assert_eq!(names(&forest[0].children), vec!["Commissioner", "Deputy Mayor"]);
    }

    #[test]
    fn container_policy_uses_container_children_as_roots() {
        let records = vec![
            record(1, None, 0, "ULB Department"),
            record(2, Some(1), 0, "Municipal Corporation Gurugram"),
            record(15, Some(2), 1, "Mayor Office"),
            record(16, Some(2), 1, "Municipal Commissioner"),
            record(17, Some(16), 2, "Additional Commissioner"),
            record(18, Some(15), 2, "Senior Deputy Mayor"),
        ];
        let policy = HierarchyPolicy::container(2).with_priority(["Mayor", "Municipal Commissioner"]);

        let forest = build(&records, &policy);

        assert_eq!(
            names(&forest[..2]),
            vec!["Mayor Office", "Municipal Commissioner"]
        );
        assert_eq!(names(&forest[0].children), vec!["Senior Deputy Mayor"]);
        assert_eq!(names(&forest[1].children), vec!["Additional Commissioner"]);
        // The container chain is kept as a trailing fallback root
        assert_eq!(forest.last().map(|n| n.id), Some(1));
        assert_eq!(forest_len(&forest), records.len());
    }

    #[test]
    fn container_policy_keeps_null_parent_records() {
        let records = vec![
            record(10, Some(2), 1, "Mayor Office"),
            record(11, None, 1, "Stray Cell"),
        ];
        let forest = build(&records, &HierarchyPolicy::container(2));
        assert_eq!(names(&forest), vec!["Mayor Office", "Stray Cell"]);
    }

    #[test]
    fn dangling_parent_becomes_root() {
        let records = vec![
            record(1, None, 0, "Mayor Office"),
            record(2, Some(99), 1, "Orphaned Wing"),
        ];
        let forest = build(&records, &HierarchyPolicy::default());

        assert_eq!(names(&forest), vec!["Mayor Office", "Orphaned Wing"]);
        assert!(forest.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn promoted_roots_sort_with_parentless_roots() {
        let records = vec![
            record(1, None, 1, "Zonal Office"),
            record(2, Some(99), 0, "Accounts"),
            record(3, None, 1, "Audit Cell"),
        ];
        let forest = build(&records, &HierarchyPolicy::default());
        assert_eq!(names(&forest), vec!["Accounts", "Audit Cell", "Zonal Office"]);
    }

    #[test]
    fn two_record_cycle_terminates() {
        let records = vec![
            record(1, Some(2), 0, "Alpha"),
            record(2, Some(1), 0, "Beta"),
        ];
        let forest = build(&records, &HierarchyPolicy::default());

        assert!(!forest.is_empty());
        assert_eq!(forest_len(&forest), 2);
        assert_eq!(forest[0].id, 1);
        assert_eq!(forest[0].children[0].id, 2);
    }

    #[test]
    fn long_cycle_with_tail_terminates() {
        let records = vec![
            record(5, Some(1), 3, "Tail"),
            record(1, Some(3), 0, "A"),
            record(2, Some(1), 0, "B"),
            record(3, Some(2), 0, "C"),
        ];
        let forest = build(&records, &HierarchyPolicy::default());
        assert_eq!(forest_len(&forest), 4);
        assert_eq!(forest.len(), 1);
        // Tail sits under the promoted cycle member
        assert!(find(&forest, 5).is_some());
    }

    #[test]
    fn self_parent_becomes_root() {
        let records = vec![record(7, Some(7), 0, "Loop")];
        let forest = build(&records, &HierarchyPolicy::default());
        assert_eq!(forest.len(), 1);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn duplicate_ids_keep_last_row() {
        let records = vec![
            record(1, None, 0, "Old Name"),
            record(1, None, 0, "New Name"),
            record(2, Some(1), 1, "Child"),
        ];
        let forest = build(&records, &HierarchyPolicy::default());
        assert_eq!(names(&forest), vec!["New Name"]);
        assert_eq!(forest[0].children.len(), 1);
    }

    #[test]
    fn every_record_appears_exactly_once() {
        let mut records = Vec::new();
        for id in 1..=60_i64 {
            let parent = match id {
                1 => None,
                n if n % 7 == 0 => Some(n + 1000),
                n => Some(n / 2),
            };
            records.push(record(id, parent, (id % 4) as i32, &format!("Dept {:02}", id)));
        }
        let forest = build(&records, &HierarchyPolicy::default());
        assert_eq!(forest_len(&forest), records.len());

        for rec in records.iter().filter(|r| r.parent_id.map_or(false, |p| p < 1000) && r.id != 1) {
            let parent = find(&forest, rec.parent_id.unwrap()).unwrap();
            assert_eq!(parent.children.iter().filter(|c| c.id == rec.id).count(), 1);
            assert!(forest.iter().all(|root| root.id != rec.id));
        }
    }

    #[test]
    fn build_is_deterministic() {
        let records = vec![
            record(3, Some(1), 1, "Zonal Office"),
            record(1, None, 0, "Mayor Office"),
            record(4, Some(1), 1, "Accounts"),
            record(2, Some(4), 2, "Audit"),
        ];
        let policy = HierarchyPolicy::default();
        assert_eq!(build(&records, &policy), build(&records, &policy));
    }
}
