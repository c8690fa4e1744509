use crate::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// Single-pass top-down splay: descend towards `key`, detaching each visited node onto a
// "less than" or "greater than or equal" partial tree, and reassemble with the last visited
// node as the root. Terminates at the matching node, or at the node closest to `key` if the
// key is absent.
fn splay<T, V>(node: &mut Box<Node<T>>, key: &V)
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut less_subtree: Tree<T> = None;
    let mut greater_subtree: Tree<T> = None;
    {
        let mut less = &mut less_subtree;
        let mut greater = &mut greater_subtree;
        loop {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    let child = match node.left.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *greater = Some(mem::replace(node, child));
                    greater = &mut { greater }
                        .as_mut()
                        .expect("Expected non-empty link.")
                        .left;
                },
                Ordering::Greater => {
                    let child = match node.right.take() {
                        Some(child) => child,
                        None => break,
                    };
                    *less = Some(mem::replace(node, child));
                    less = &mut { less }
                        .as_mut()
                        .expect("Expected non-empty link.")
                        .right;
                },
                Ordering::Equal => break,
            }
        }

        // The remaining children of the final node belong at the open hooks of the partial
        // trees, which are vacated links and therefore empty.
        mem::swap(less, &mut node.left);
        mem::swap(greater, &mut node.right);
    }

    node.left = less_subtree;
    node.right = greater_subtree;
}

// The same partitioning walk as `splay`, but it runs until it falls off the tree instead of
// stopping at a match, so an equal key already in the tree is descended past rather than
// replaced. Equal keys are kept on the "greater than or equal" side so that the left subtree
// of every node stays strictly less than the node.
pub fn insert<T>(tree: &mut Tree<T>, key: T)
where
    T: Ord,
{
    let mut less_subtree: Tree<T> = None;
    let mut greater_subtree: Tree<T> = None;
    {
        let mut less = &mut less_subtree;
        let mut greater = &mut greater_subtree;
        let mut walk = tree.take();
        while let Some(mut node) = walk {
            if key <= node.key {
                walk = node.left.take();
                *greater = Some(node);
                greater = &mut { greater }
                    .as_mut()
                    .expect("Expected non-empty link.")
                    .left;
            } else {
                walk = node.right.take();
                *less = Some(node);
                less = &mut { less }
                    .as_mut()
                    .expect("Expected non-empty link.")
                    .right;
            }
        }
    }

    let mut new_node = Node::new(key);
    new_node.left = less_subtree;
    new_node.right = greater_subtree;
    *tree = Some(Box::new(new_node));
}

fn find<T, V>(tree: &Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let mut walk = tree;
    while let Some(ref node) = walk {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => walk = &node.left,
            Ordering::Greater => walk = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

// Splays only on a hit. A non-destructive search decides presence first so that a miss leaves
// the tree completely untouched.
pub fn contains<T, V>(tree: &mut Tree<T>, key: &V) -> bool
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    if !find(tree, key) {
        return false;
    }
    let node = tree.as_mut().expect("Expected non-empty tree.");
    splay(node, key);
    true
}

pub fn remove<T, V>(tree: &mut Tree<T>, key: &V) -> Option<T>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    // Walking the links themselves doubles as parent tracking; the root needs no special case
    // because `tree` is just another link.
    let mut slot = tree;
    loop {
        let ordering = match slot {
            Some(ref node) => key.cmp(node.key.borrow()),
            None => return None,
        };
        slot = match ordering {
            Ordering::Less => {
                &mut { slot }
                    .as_mut()
                    .expect("Expected non-empty link.")
                    .left
            },
            Ordering::Greater => {
                &mut { slot }
                    .as_mut()
                    .expect("Expected non-empty link.")
                    .right
            },
            Ordering::Equal => break,
        };
    }

    let mut node = slot.take().expect("Expected non-empty link.");
    match (node.left.take(), node.right.take()) {
        (None, child) | (child, None) => {
            *slot = child;
            Some(node.key)
        },
        (left, mut right) => {
            // Two children: the in-order successor is the minimum of the right subtree and has
            // at most a right child. Move its key into the target node so the target keeps its
            // position, and unlink the successor instead.
            let successor = detach_min(&mut right).expect("Expected non-empty right subtree.");
            let removed_key = mem::replace(&mut node.key, successor.key);
            node.left = left;
            node.right = right;
            *slot = Some(node);
            Some(removed_key)
        },
    }
}

fn detach_min<T>(tree: &mut Tree<T>) -> Tree<T> {
    let mut slot = tree;
    loop {
        let has_left = match slot {
            Some(ref node) => node.left.is_some(),
            None => return None,
        };
        if !has_left {
            break;
        }
        slot = &mut { slot }
            .as_mut()
            .expect("Expected non-empty link.")
            .left;
    }

    slot.take().map(|mut node| {
        *slot = node.right.take();
        node
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.key)
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.key)
    })
}
