use super::*;

use crate::move_::Direction;

/// Stable handle to a node inside a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A board reached at path cost `g`, with heuristic estimate `h`.
///
/// Nodes are never mutated once they are in the tree; `f` is always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub board: Board,
    pub parent: Option<NodeId>,
    /// The slide that produced this node from its parent (`None` at the root).
    pub direction: Option<Direction>,
    pub g: u32,
    pub h: u32,
}

impl SearchNode {
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Arena holding every node generated during one search.
///
/// Children refer to their parent by [`NodeId`], so any node's path back to
/// the root stays walkable until the tree is dropped.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Start a new tree rooted at `board`.
    pub fn insert_root(&mut self, board: Board, h: u32) -> NodeId {
        self.insert(SearchNode {
            board,
            parent: None,
            direction: None,
            g: 0,
            h,
        })
    }

    /// Add the child of `parent` reached by sliding the blank `direction`.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        board: Board,
        direction: Direction,
        h: u32,
    ) -> NodeId {
        let g = self.nodes[parent.index()].g + 1;
        self.insert(SearchNode {
            board,
            parent: Some(parent),
            direction: Some(direction),
            g,
            h,
        })
    }

    fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes from `id` up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Slides from the root to `id`, in order.
    pub fn directions(&self, id: NodeId) -> Vec<Direction> {
        let mut directions: Vec<Direction> =
            self.ancestors(id).filter_map(|node| node.direction).collect();
        directions.reverse();
        directions
    }
}

pub struct Ancestors<'a> {
    tree: &'a SearchTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.get(self.next?);
        self.next = node.parent;
        Some(node)
    }
}

/// Boards from the root to `goal`, in order. Empty when there is no goal.
pub fn reconstruct(tree: &SearchTree, goal: Option<NodeId>) -> Vec<Board> {
    let Some(goal) = goal else {
        return Vec::new();
    };
    let mut path: Vec<Board> = tree.ancestors(goal).map(|node| node.board).collect();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> (SearchTree, NodeId) {
        let start = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let mid = start.slide(Direction::Down).unwrap();
        let end = mid.slide(Direction::Right).unwrap();

        let mut tree = SearchTree::new();
        let root = tree.insert_root(start, 2);
        let a = tree.insert_child(root, mid, Direction::Down, 1);
        let b = tree.insert_child(a, end, Direction::Right, 0);
        (tree, b)
    }

    #[test]
    fn test_child_costs() {
        let (tree, goal) = chain();
        let node = tree.get(goal);
        assert_eq!(node.g, 2);
        assert_eq!(node.f(), 2);
        assert!(node.board.is_goal());
        assert!(tree.get(NodeId(0)).is_root());
        assert_eq!(tree.get(NodeId(0)).f(), 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_reconstruct() {
        let (tree, goal) = chain();
        let path = reconstruct(&tree, Some(goal));
        assert_eq!(path.len(), tree.get(goal).g as usize + 1);
        assert_eq!(path[0].tiles(), &[1, 2, 3, 4, 0, 6, 7, 5, 8]);
        assert!(path[2].is_goal());
        assert_eq!(
            tree.directions(goal),
            vec![Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn test_reconstruct_without_goal() {
        let (tree, _) = chain();
        assert!(reconstruct(&tree, None).is_empty());
    }

    #[test]
    fn test_reconstruct_root_only() {
        let mut tree = SearchTree::new();
        let root = tree.insert_root(Board::GOAL, 0);
        assert_eq!(reconstruct(&tree, Some(root)), vec![Board::GOAL]);
        assert!(tree.directions(root).is_empty());
    }
}
