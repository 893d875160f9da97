//! Tree driver: owns a root node and its context, ticks once per frame.

use crate::{Blackboard, Node, NodeState, TreeContext};

/// A behavior tree instance.
///
/// The tree owns its root and the context (typically a [`TreeContext`] with
/// the instance's blackboard). The root is awoken once, on construction,
/// before any tick.
///
/// # Example
///
/// ```rust
/// use behavior_tree::builder::*;
/// use behavior_tree::{BehaviorTree, NodeState, TreeContext};
///
/// let mut tree = BehaviorTree::new(wait(1.0), TreeContext::default());
/// assert_eq!(tree.update(0.5), NodeState::Running);
/// assert_eq!(tree.update(0.5), NodeState::Success);
/// ```
#[derive(Debug)]
pub struct BehaviorTree<C> {
    root: Node<C>,
    context: C,
    ticks: u64,
}

impl<C> BehaviorTree<C> {
    /// Creates a tree over `root` and awakes every node once.
    pub fn new(mut root: Node<C>, context: C) -> Self {
        root.awake();
        Self {
            root,
            context,
            ticks: 0,
        }
    }

    /// Advances the whole tree by one frame.
    pub fn tick(&mut self) -> NodeState {
        self.ticks += 1;
        let state = self.root.tick(&mut self.context);
        tracing::trace!(tick = self.ticks, root = self.root.name(), %state, "tree ticked");
        state
    }

    /// Interrupts every running node, leaving them in `Failure`.
    pub fn interrupt(&mut self) {
        self.root.interrupt(&mut self.context);
    }

    /// Resets every node to `Ready`. Returns `false` if the tree was idle.
    pub fn abort(&mut self) -> bool {
        let aborted = self.root.abort(&mut self.context);
        if aborted {
            tracing::debug!(root = self.root.name(), ticks = self.ticks, "tree aborted");
        }
        aborted
    }

    /// Aborts and clears the tick counter; the next tick starts from scratch.
    pub fn restart(&mut self) {
        self.abort();
        self.ticks = 0;
    }

    /// State of the root after the last tick.
    pub fn state(&self) -> NodeState {
        self.root.state()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C> BehaviorTree<C>
where
    C: AsRef<Blackboard> + AsMut<Blackboard>,
{
    pub fn blackboard(&self) -> &Blackboard {
        self.context.as_ref()
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        self.context.as_mut()
    }
}

impl BehaviorTree<TreeContext> {
    /// Starts a frame of `delta` seconds and ticks the tree.
    pub fn update(&mut self, delta: f32) -> NodeState {
        self.context.advance(delta);
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::*;
    use crate::{BlackboardKey, SetBlackboardFloat};

    const ALERT: BlackboardKey<f32> = BlackboardKey::new("alert");

    #[test]
    fn counts_ticks_and_restarts() {
        let mut tree = BehaviorTree::new(wait(10.0), TreeContext::default());
        tree.update(1.0);
        tree.update(1.0);
        assert_eq!(tree.ticks(), 2);
        assert!(tree.state().is_running());

        tree.restart();
        assert_eq!(tree.ticks(), 0);
        assert_eq!(tree.state(), NodeState::Ready);
        assert!(!tree.abort());
    }

    #[test]
    fn nodes_share_the_tree_blackboard() {
        let mut tree = BehaviorTree::new(
            Node::new(SetBlackboardFloat::new(ALERT, 1.0)),
            TreeContext::default(),
        );
        assert_eq!(tree.tick(), NodeState::Failure);

        tree.blackboard_mut().insert(&ALERT, 0.0).unwrap();
        assert_eq!(tree.tick(), NodeState::Success);
        assert_eq!(*tree.blackboard().get(&ALERT).unwrap(), 1.0);
    }

    #[test]
    fn interrupt_stops_running_root() {
        let mut tree = BehaviorTree::new(sequence(vec![wait(5.0)]), TreeContext::default());
        tree.update(0.1);

        tree.interrupt();
        assert_eq!(tree.state(), NodeState::Failure);
        assert_eq!(tree.root().children()[0].state(), NodeState::Failure);
    }
}
