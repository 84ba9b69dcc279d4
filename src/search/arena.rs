//! Owned store of every state generated during a search run.
//!
//! Parent links are `StateId` handles into the arena rather than references,
//! so path reconstruction only ever walks indices. Nodes are never released
//! individually; the whole arena is cleared at session reset.

use crate::board::Board;

/// Stable handle to a node in a `StateArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board plus its provenance within the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub board: Board,
    /// The state this one was generated from; `None` for the start.
    pub parent: Option<StateId>,
    /// Moves from the start (G).
    pub move_depth: u32,
}

/// Growable arena of search nodes.
#[derive(Debug, Default)]
pub struct StateArena {
    nodes: Vec<Node>,
}

impl StateArena {
    pub fn new() -> Self {
        StateArena { nodes: Vec::new() }
    }

    /// Stores the root of a run: no parent, depth zero.
    pub fn insert_root(&mut self, board: Board) -> StateId {
        self.push(Node {
            board,
            parent: None,
            move_depth: 0,
        })
    }

    /// Stores `board` as a child of `parent`, one move deeper.
    pub fn insert_child(&mut self, parent: StateId, board: Board) -> StateId {
        let move_depth = self.nodes[parent.index()].move_depth + 1;
        self.push(Node {
            board,
            parent: Some(parent),
            move_depth,
        })
    }

    fn push(&mut self, node: Node) -> StateId {
        let id = StateId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn get(&self, id: StateId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn board(&self, id: StateId) -> &Board {
        &self.nodes[id.index()].board
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Walks parent links from `id` back to the root and returns the boards
    /// in forward order, root first.
    pub fn path_to(&self, id: StateId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.get(id).move_depth as usize + 1);
        let mut cursor = Some(id);
        while let Some(cur) = cursor {
            let node = self.get(cur);
            path.push(node.board);
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
