//! Structural deletion of variables.
//!
//! Removing variables deletes every leaf referencing them, drops groups left
//! empty (cascading upwards), and renumbers the survivors so the indices stay
//! contiguous: a variable `n` becomes `n - |{r in removed : r < n}|`.
//!
//! Renumbering changes the meaning of any outside state keyed by variable
//! index, so the old-to-new mapping is returned alongside the surviving set.

use std::collections::BTreeMap;

use log::debug;

use crate::ast::{Group, Node};
use crate::types::VarLimit;

/// Outcome of a removal pass.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct Removal {
    /// Variables actually removed, ascending.
    pub removed: Vec<u32>,
    /// Surviving variables after renumbering, ascending and distinct.
    pub vars: Vec<u32>,
    /// Old index to new index, for every surviving variable.
    pub renumbered: BTreeMap<u32, u32>,
}

/// Keeps the valid removal requests: positive, within `limit`, distinct, sorted.
pub fn normalize(vars: &[u32], limit: VarLimit) -> Vec<u32> {
    let mut vars: Vec<u32> = vars.iter().copied().filter(|&v| limit.contains(v as u64)).collect();
    vars.sort_unstable();
    vars.dedup();
    vars
}

/// Removes the variables in `removed` (ascending, distinct) from `root`.
///
/// The root itself is never dropped, but may be left empty. The caller is
/// expected to re-simplify the tree afterwards.
pub fn remove(root: &mut Group, removed: &[u32]) -> Removal {
    debug!("remove(vars = {:?})", removed);

    let mut renumbered = BTreeMap::new();
    remove_rec(root, removed, &mut renumbered);

    let vars: Vec<u32> = {
        let mut vars: Vec<u32> = renumbered.values().copied().collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    };
    debug!("remove: survivors = {:?}", vars);

    Removal {
        removed: removed.to_vec(),
        vars,
        renumbered,
    }
}

fn remove_rec(group: &mut Group, removed: &[u32], renumbered: &mut BTreeMap<u32, u32>) {
    group.members.retain_mut(|member| match member {
        Node::Group(child) => {
            remove_rec(child, removed, renumbered);
            !child.is_empty()
        }
        Node::Variable(var) => {
            // `removed` is sorted, so the insertion point is the number of
            // removed indices below this one.
            match removed.binary_search(&var.index) {
                Ok(_) => false,
                Err(below) => {
                    let index = var.index - below as u32;
                    renumbered.insert(var.index, index);
                    var.index = index;
                    true
                }
            }
        }
    });
}
