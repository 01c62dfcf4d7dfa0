//! Longest-path leveling of the prerequisite graph.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{LevelMap, LocalId, MetadataMap};

/// One node on the explicit depth-first stack.
struct Frame<'a> {
    id: &'a str,
    prerequisites: &'a [LocalId],
    next: usize,
    /// Highest level seen among resolvable prerequisites so far.
    deepest: Option<usize>,
}

impl<'a> Frame<'a> {
    fn new(id: &'a str, metadata: &'a MetadataMap) -> Self {
        Self {
            id,
            prerequisites: metadata
                .get(id)
                .map(|node| node.prerequisites.as_slice())
                .unwrap_or(&[]),
            next: 0,
            deepest: None,
        }
    }

    fn observe(&mut self, level: usize) {
        self.deepest = Some(self.deepest.map_or(level, |d| d.max(level)));
    }
}

/// Compute the level of every node.
///
/// A node without resolvable prerequisites sits at level 0; otherwise its
/// level is one past its deepest resolvable prerequisite. Prerequisites
/// missing from `metadata` contribute nothing. Re-entering a node that is on
/// the current path counts as level 0 for that occurrence and is not cached.
/// Goals are then moved to one past the deepest non-goal level.
///
/// The traversal uses an explicit stack, so depth is bounded by the heap,
/// not the call stack. The result follows the order of `metadata`.
pub fn assign_levels(metadata: &MetadataMap) -> LevelMap {
    let mut computed: HashMap<&str, usize> = HashMap::with_capacity(metadata.len());
    let mut on_path: HashSet<&str> = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in metadata.keys() {
        if computed.contains_key(root.as_str()) {
            continue;
        }
        on_path.insert(root);
        stack.push(Frame::new(root, metadata));

        while let Some(frame) = stack.last_mut() {
            let prerequisites = frame.prerequisites;
            if let Some(prerequisite) = prerequisites.get(frame.next) {
                frame.next += 1;
                let Some((key, _)) = metadata.get_key_value(prerequisite.as_str()) else {
                    log::debug!("{}: prerequisite {:?} not in graph, ignored", frame.id, prerequisite);
                    continue;
                };
                let key = key.as_str();
                if let Some(&level) = computed.get(key) {
                    frame.observe(level);
                } else if on_path.contains(key) {
                    log::debug!("Cycle through {:?} broken at {:?}", key, frame.id);
                    frame.observe(0);
                } else {
                    on_path.insert(key);
                    stack.push(Frame::new(key, metadata));
                }
                continue;
            }

            let level = frame.deepest.map_or(0, |d| d + 1);
            let id = frame.id;
            stack.pop();
            on_path.remove(id);
            computed.insert(id, level);
            if let Some(parent) = stack.last_mut() {
                parent.observe(level);
            }
        }
    }

    let goal_level = metadata
        .values()
        .filter(|node| !node.is_goal())
        .filter_map(|node| computed.get(node.id.as_str()))
        .max()
        .map_or(0, |deepest| deepest + 1);

    metadata
        .values()
        .map(|node| {
            let level = if node.is_goal() {
                goal_level
            } else {
                computed.get(node.id.as_str()).copied().unwrap_or(0)
            };
            (node.id.clone(), level)
        })
        .collect()
}

/// Node ids per level, levels ascending, ids in `levels` order.
pub fn group_by_level(levels: &LevelMap) -> BTreeMap<usize, Vec<&str>> {
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (id, &level) in levels {
        groups.entry(level).or_default().push(id.as_str());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{concept, goal, graph};
    use crate::graph::NodeMetadata;

    #[test]
    fn test_linear_chain() {
        let levels = assign_levels(&graph(vec![
            concept("a", &[]),
            concept("b", &["a"]),
            concept("c", &["b"]),
        ]));
        assert_eq!(levels["a"], 0);
        assert_eq!(levels["b"], 1);
        assert_eq!(levels["c"], 2);
    }

    #[test]
    fn test_longest_path_wins() {
        // d requires both a (level 0) and c (level 2)
        let levels = assign_levels(&graph(vec![
            concept("d", &["a", "c"]),
            concept("c", &["b"]),
            concept("b", &["a"]),
            concept("a", &[]),
        ]));
        assert_eq!(levels["d"], 3);
        assert_eq!(levels.keys().collect::<Vec<_>>(), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_iteration_order_does_not_change_levels() {
        let forward = assign_levels(&graph(vec![
            concept("a", &[]),
            concept("b", &["a"]),
            concept("c", &["a", "b"]),
            concept("d", &["c"]),
        ]));
        let backward = assign_levels(&graph(vec![
            concept("d", &["c"]),
            concept("c", &["a", "b"]),
            concept("b", &["a"]),
            concept("a", &[]),
        ]));
        for id in ["a", "b", "c", "d"] {
            assert_eq!(forward[id], backward[id], "node {}", id);
        }
    }

    #[test]
    fn test_dangling_prerequisites_contribute_nothing() {
        let levels = assign_levels(&graph(vec![
            concept("a", &["ghost"]),
            concept("b", &["a", "phantom"]),
        ]));
        assert_eq!(levels["a"], 0);
        assert_eq!(levels["b"], 1);
        assert!(!levels.contains_key("ghost"));
    }

    #[test]
    fn test_goal_override_uses_global_max() {
        // goal chain depth is 3, unrelated chain reaches level 4
        let levels = assign_levels(&graph(vec![
            concept("a", &[]),
            concept("b", &["a"]),
            concept("c", &["b"]),
            goal("g", &["c"]),
            concept("v", &[]),
            concept("w", &["v"]),
            concept("x", &["w"]),
            concept("y", &["x"]),
            concept("z", &["y"]),
        ]));
        assert_eq!(levels["z"], 4);
        assert_eq!(levels["g"], 5);
    }

    #[test]
    fn test_goal_without_prerequisites() {
        let levels = assign_levels(&graph(vec![
            goal("g", &[]),
            concept("a", &[]),
            concept("b", &["a"]),
        ]));
        assert_eq!(levels["g"], 2);
    }

    #[test]
    fn test_goal_depending_on_goal() {
        let levels = assign_levels(&graph(vec![
            concept("a", &[]),
            goal("g1", &["a"]),
            goal("g2", &["g1"]),
        ]));
        assert_eq!(levels["a"], 0);
        assert_eq!(levels["g1"], 1);
        assert_eq!(levels["g2"], 1);
    }

    #[test]
    fn test_only_goals() {
        let levels = assign_levels(&graph(vec![goal("g", &[])]));
        assert_eq!(levels["g"], 0);
    }

    #[test]
    fn test_two_cycle_terminates() {
        let levels = assign_levels(&graph(vec![concept("a", &["b"]), concept("b", &["a"])]));
        // entering at a: b sees a on the path (0), so b = 1 and a = 2
        assert_eq!(levels["b"], 1);
        assert_eq!(levels["a"], 2);
    }

    #[test]
    fn test_self_loop() {
        let levels = assign_levels(&graph(vec![concept("a", &["a"])]));
        assert_eq!(levels["a"], 1);
    }

    #[test]
    fn test_cycle_does_not_disturb_acyclic_part() {
        let levels = assign_levels(&graph(vec![
            concept("r", &[]),
            concept("s", &["r"]),
            concept("p", &["q", "s"]),
            concept("q", &["p"]),
        ]));
        assert_eq!(levels["r"], 0);
        assert_eq!(levels["s"], 1);
        assert!(levels["p"] >= 2);
        assert!(levels.len() == 4);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let count = 50_000;
        let nodes: Vec<NodeMetadata> = (0..count)
            .map(|i| {
                let id = format!("n{}", i);
                let prerequisite = format!("n{}", i + 1);
                let mut n = concept(&id, &[]);
                if i + 1 < count {
                    n.prerequisites.push(prerequisite);
                }
                n
            })
            .collect();
        let levels = assign_levels(&graph(nodes));
        assert_eq!(levels["n0"], count - 1);
        assert_eq!(levels[&format!("n{}", count - 1)], 0);
    }

    #[test]
    fn test_empty_graph() {
        assert!(assign_levels(&MetadataMap::new()).is_empty());
    }

    #[test]
    fn test_group_by_level() {
        let levels = assign_levels(&graph(vec![
            concept("a", &[]),
            concept("b", &["a"]),
            concept("c", &[]),
            concept("d", &["c"]),
        ]));
        let groups = group_by_level(&levels);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&0], vec!["a", "c"]);
        assert_eq!(groups[&1], vec!["b", "d"]);
    }
}
