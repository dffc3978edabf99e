//! Mirror-image code generation.
//!
//! Rotations and subtree extremes come in left and right flavors that differ
//! only in which link they follow. Each pair is written once here and stamped
//! out inside `impl RBTree` blocks.

/// Generates `rotate_<dir>(x)`: the `<opp>` child of `x` is lifted into `x`'s
/// place and `x` becomes its `<dir>` child.
macro_rules! rotation {
    ($dir:ident, $opp:ident) => {
        paste::paste! {
            pub(crate) fn [<rotate_ $dir>](&mut self, x: NodeId) {
                let y = self.nodes[x].$opp;
                debug_assert_ne!(y, NIL, "rotation lifts a real child");
                let parent = self.nodes[x].parent;
                let inner = self.nodes[y].$dir;

                self.nodes[x].$opp = inner;
                if inner != NIL {
                    self.nodes[inner].parent = x;
                }
                self.nodes[y].$dir = x;
                self.nodes[x].parent = y;
                self.nodes[y].parent = parent;
                self.replace_child(parent, x, y);
            }
        }
    };
}

/// Generates `subtree_<name>(id)`: follows `<link>` from `id` down to the last
/// real node. Returns `NIL` for an empty subtree.
macro_rules! subtree_extreme {
    ($name:ident, $link:ident) => {
        paste::paste! {
            pub(crate) fn [<subtree_ $name>](&self, mut id: NodeId) -> NodeId {
                while self.nodes[id].$link != NIL {
                    id = self.nodes[id].$link;
                }
                id
            }
        }
    };
}
