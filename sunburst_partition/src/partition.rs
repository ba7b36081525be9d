// Copyright 2026 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::f64::consts::TAU;

use crate::{ArcDescriptor, ArcId, TreeNode};

/// Partitions a whole tree over the full circle, starting at level `0`.
///
/// Equivalent to `partition_range(root, 0, 0.0, TAU)`. The root is always emitted,
/// so the returned sequence is never empty and its first element is the root arc.
#[must_use]
pub fn partition(root: &TreeNode) -> Vec<ArcDescriptor> {
    partition_range(root, 0, 0.0, TAU)
}

/// Partitions `node` over `[start_angle, stop_angle]` at depth `level`.
///
/// The output is in pre-order: each arc precedes its descendants, and siblings
/// appear in child order. Ids and subtree ends are indices into the returned
/// sequence. Each child receives
/// `(stop_angle - start_angle) / node.value * child.value` of the span, laid out
/// contiguously from a running angle, so the last sibling may end slightly off
/// the parent's stop angle due to accumulated rounding.
///
/// A node whose span is exactly zero produces nothing, and its children are not
/// visited. Children of a node whose value is not strictly positive are skipped
/// as well, since their spans are undefined.
#[must_use]
pub fn partition_range(
    node: &TreeNode,
    level: usize,
    start_angle: f64,
    stop_angle: f64,
) -> Vec<ArcDescriptor> {
    let mut out = Vec::with_capacity(node.node_count());
    partition_into(node, level, start_angle, stop_angle, &mut out);
    out
}

fn partition_into(
    node: &TreeNode,
    level: usize,
    start_angle: f64,
    stop_angle: f64,
    out: &mut Vec<ArcDescriptor>,
) {
    if start_angle == stop_angle {
        return;
    }
    let index = out.len();
    out.push(ArcDescriptor {
        id: ArcId(index),
        subtree_end: index + 1,
        start_angle,
        stop_angle,
        level,
        name: node.name.clone(),
        description: node.description.clone(),
        value: node.value,
    });

    let total = node.value;
    if total > 0.0 && !total.is_nan() {
        let span = stop_angle - start_angle;
        let mut angle = start_angle;
        for child in &node.children {
            let increment = span / total * child.value;
            partition_into(child, level + 1, angle, angle + increment, out);
            angle += increment;
        }
    }
    out[index].subtree_end = out.len();
}

/// Returns the depth of the deepest node below `node`.
///
/// A leaf has depth `0`; a node whose children are all leaves has depth `1`.
#[must_use]
pub fn max_depth(node: &TreeNode) -> usize {
    node.children
        .iter()
        .map(|child| max_depth(child) + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use super::*;

    fn flask() -> TreeNode {
        TreeNode::new("", 10.0)
            .with_child(
                TreeNode::new("docs", 4.0)
                    .with_child(TreeNode::new("conf-py", 1.0))
                    .with_child(TreeNode::new("flaskdocext-py", 3.0)),
            )
            .with_child(TreeNode::new("examples", 6.0))
    }

    #[test]
    fn root_covers_full_circle() {
        let arcs = partition(&flask());
        assert_eq!(arcs[0].start_angle, 0.0);
        assert_eq!(arcs[0].stop_angle, TAU);
        assert_eq!(arcs[0].level, 0);
        assert_eq!(arcs[0].name, "");
    }

    #[test]
    fn children_split_in_proportion() {
        let arcs = partition(&flask());
        let names: Vec<&str> = arcs.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["", "docs", "conf-py", "flaskdocext-py", "examples"]);

        let docs = &arcs[1];
        let examples = &arcs[4];
        assert!((docs.stop_angle - 0.8 * PI).abs() < 1e-12);
        assert_eq!(examples.start_angle, docs.stop_angle);
        assert!((examples.stop_angle - 2.0 * PI).abs() < 1e-12);

        // docs' own span is split 1:3 between its children.
        assert!((arcs[2].span() - docs.span() * 0.25).abs() < 1e-12);
        assert_eq!(arcs[3].start_angle, arcs[2].stop_angle);
        assert_eq!(arcs[2].level, 2);
    }

    #[test]
    fn zero_value_subtree_is_dropped() {
        let tree = TreeNode::new("root", 2.0)
            .with_child(TreeNode::new("a", 2.0))
            .with_child(
                TreeNode::new("empty", 0.0).with_child(TreeNode::new("ghost", 1.0)),
            );
        let arcs = partition(&tree);
        assert_eq!(arcs.len(), 2);
        assert!(arcs.iter().all(|a| a.name != "empty" && a.name != "ghost"));
    }

    #[test]
    fn zero_span_range_is_empty() {
        assert!(partition_range(&flask(), 3, 1.0, 1.0).is_empty());
    }

    #[test]
    fn zero_value_root_keeps_only_itself() {
        let tree = TreeNode::new("root", 0.0).with_child(TreeNode::new("a", 1.0));
        let arcs = partition(&tree);
        assert_eq!(arcs.len(), 1);
        assert!(arcs[0].start_angle.is_finite() && arcs[0].stop_angle.is_finite());
    }

    #[test]
    fn sub_range_starts_at_requested_level() {
        let arcs = partition_range(&flask(), 2, 1.0, 2.0);
        assert_eq!(arcs[0].level, 2);
        assert_eq!(arcs[1].level, 3);
        assert_eq!(arcs[1].start_angle, 1.0);
        assert!(arcs.iter().all(|a| a.start_angle >= 1.0 && a.stop_angle <= 2.0 + 1e-12));
    }

    #[test]
    fn subtree_ends_follow_pre_order() {
        let arcs = partition(&flask());
        let ends: Vec<usize> = arcs.iter().map(|a| a.subtree_end).collect();
        assert_eq!(ends, [5, 4, 3, 4, 5]);
        assert!(arcs.iter().enumerate().all(|(i, a)| a.id == ArcId(i)));
        assert_eq!(arcs[1].subtree_len(), 3);
    }

    #[test]
    fn max_depth_counts_edges() {
        assert_eq!(max_depth(&TreeNode::new("leaf", 1.0)), 0);
        assert_eq!(
            max_depth(&TreeNode::new("r", 1.0).with_child(TreeNode::new("c", 1.0))),
            1
        );
        assert_eq!(max_depth(&flask()), 2);
    }
}
