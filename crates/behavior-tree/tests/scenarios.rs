use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU32, Ordering};

use behavior_tree::builder::*;
use behavior_tree::{
    Action, Behavior, BehaviorTree, BlackboardKey, CompareBlackboardFloat, ComparisonMode,
    ConditionalCheck, InterruptionMode, Node, NodeState, Parallel, ParallelType, Timeout,
    TreeContext,
};

const THREAT: BlackboardKey<f32> = BlackboardKey::new("threat");

/// Leaf that runs forever and counts its hook calls.
#[derive(Clone, Default)]
struct Counters {
    starts: Arc<AtomicU32>,
    updates: Arc<AtomicU32>,
    exits: Arc<AtomicU32>,
}

impl Counters {
    fn get(counter: &AtomicU32) -> u32 {
        counter.load(Ordering::SeqCst)
    }
}

struct Probe {
    counters: Counters,
    running: bool,
}

impl Behavior<TreeContext> for Probe {
    fn on_start(&mut self, _ctx: &mut TreeContext) -> NodeState {
        assert!(!self.running, "started twice in one activation");
        self.running = true;
        self.counters.starts.fetch_add(1, Ordering::SeqCst);
        NodeState::Running
    }

    fn on_update(&mut self, _ctx: &mut TreeContext) -> NodeState {
        assert!(self.running, "updated outside of an activation");
        self.counters.updates.fetch_add(1, Ordering::SeqCst);
        NodeState::Running
    }

    fn on_exit(&mut self, _ctx: &mut TreeContext) {
        self.running = false;
        self.counters.exits.fetch_add(1, Ordering::SeqCst);
    }
}

fn probe() -> (Node<TreeContext>, Counters) {
    let counters = Counters::default();
    let node = Node::new(Probe {
        counters: counters.clone(),
        running: false,
    })
    .named("probe");
    (node, counters)
}

fn threat_context(value: f32) -> TreeContext {
    let mut ctx = TreeContext::default();
    ctx.blackboard.insert(&THREAT, value).unwrap();
    ctx
}

fn guarded_probe(mode: InterruptionMode) -> (BehaviorTree<TreeContext>, Counters) {
    let (child, counters) = probe();
    let root = Node::new(
        ConditionalCheck::new(
            CompareBlackboardFloat::new(THREAT, ComparisonMode::GreaterThan, 3.0),
            child,
        )
        .with_mode(mode),
    );
    (BehaviorTree::new(root, threat_context(5.0)), counters)
}

#[test]
fn latched_condition_ignores_later_changes() {
    let (mut tree, counters) = guarded_probe(InterruptionMode::Latched);

    assert_eq!(tree.update(0.1), NodeState::Running);
    tree.blackboard_mut().set(&THREAT, 1.0).unwrap();

    assert_eq!(tree.update(0.1), NodeState::Running);
    assert_eq!(Counters::get(&counters.updates), 2);
    assert_eq!(Counters::get(&counters.exits), 0);
}

#[test]
fn reactive_condition_interrupts_on_next_update() {
    let (mut tree, counters) = guarded_probe(InterruptionMode::Reactive);

    assert_eq!(tree.update(0.1), NodeState::Running);
    tree.blackboard_mut().set(&THREAT, 1.0).unwrap();

    assert_eq!(tree.update(0.1), NodeState::Failure);
    assert_eq!(Counters::get(&counters.updates), 1);
    assert_eq!(Counters::get(&counters.exits), 1);
    assert_eq!(tree.root().children()[0].state(), NodeState::Failure);
}

#[test]
fn missing_condition_key_breaks_the_gate() {
    let (child, counters) = probe();
    let root = Node::new(ConditionalCheck::new(
        CompareBlackboardFloat::new(THREAT, ComparisonMode::Equals, 0.0),
        child,
    ));
    let mut tree = BehaviorTree::new(root, TreeContext::default());

    assert_eq!(tree.update(0.1), NodeState::Failure);
    assert_eq!(Counters::get(&counters.starts), 0);
}

fn timed_probe(mode: InterruptionMode) -> BehaviorTree<TreeContext> {
    let (child, _) = probe();
    BehaviorTree::new(
        Node::new(Timeout::new(1.0, child).with_mode(mode)),
        TreeContext::default(),
    )
}

#[test]
fn reactive_timeout_forwards_running_child() {
    let mut tree = timed_probe(InterruptionMode::Reactive);

    assert_eq!(tree.update(0.5), NodeState::Running); // t = 0.5
    assert_eq!(tree.update(0.5), NodeState::Running); // t = 1.0
    // Timed out, but the child is still running.
    assert_eq!(tree.update(0.5), NodeState::Running);
    assert!(tree.root().children()[0].is_running());
}

#[test]
fn latched_timeout_forces_success() {
    let mut tree = timed_probe(InterruptionMode::Latched);

    assert_eq!(tree.update(0.5), NodeState::Running);
    assert_eq!(tree.update(0.5), NodeState::Running);
    assert_eq!(tree.update(0.5), NodeState::Success);
}

#[test]
fn parallel_detects_trigger_one_tick_late() {
    let failing_tick = 2;
    let ticks = Arc::new(AtomicU32::new(0));
    let seen = ticks.clone();
    let first = Node::new(Action::from_fn(move |_: &mut TreeContext| {
        if seen.fetch_add(1, Ordering::SeqCst) + 1 == failing_tick {
            NodeState::Failure
        } else {
            NodeState::Running
        }
    }));
    let (second, counters) = probe();

    let root = Node::new(
        Parallel::new(ParallelType::OneTriggeredChild, vec![first, second])
            .returning(NodeState::Success),
    );
    let mut tree = BehaviorTree::new(root, TreeContext::default());

    assert_eq!(tree.tick(), NodeState::Running);
    // Tick N: first child fails during its own tick.
    assert_eq!(tree.tick(), NodeState::Running);
    assert_eq!(tree.root().children()[0].state(), NodeState::Failure);
    // Tick N + 1: detected, everything interrupted.
    assert_eq!(tree.tick(), NodeState::Success);
    assert_eq!(tree.root().children()[1].state(), NodeState::Failure);
    assert_eq!(Counters::get(&counters.exits), 1);
    assert_eq!(ticks.load(Ordering::SeqCst), 2);
}

#[test]
fn parallel_all_triggered_needs_every_child() {
    let (running, _) = probe();
    let mut tree = BehaviorTree::new(
        Node::new(
            Parallel::new(
                ParallelType::AllTriggeredChildren,
                vec![action(|_: &mut TreeContext| NodeState::Success), running],
            )
            .trigger_on(NodeState::Success),
        ),
        TreeContext::default(),
    );

    for _ in 0..3 {
        assert_eq!(tree.tick(), NodeState::Running);
    }
}

#[test]
fn abort_cascades_exactly_once() {
    let (left, left_counters) = probe();
    let (right, right_counters) = probe();
    let mut tree = BehaviorTree::new(
        parallel(ParallelType::OneTriggeredChild, vec![left, right]),
        TreeContext::default(),
    );

    assert!(!tree.abort());
    assert_eq!(Counters::get(&left_counters.exits), 0);

    tree.tick();
    assert!(tree.abort());
    assert!(!tree.abort());
    assert_eq!(Counters::get(&left_counters.exits), 1);
    assert_eq!(Counters::get(&right_counters.exits), 1);
    assert_eq!(tree.state(), NodeState::Ready);
}

#[test]
fn add_and_set_floats_drive_a_condition() {
    let root = sequence(vec![
        Node::new(behavior_tree::SetBlackboardFloat::new(THREAT, 1.0)),
        Node::new(behavior_tree::AddBlackboardFloat::new(THREAT, 3.0)),
        conditional(
            CompareBlackboardFloat::new(THREAT, ComparisonMode::Equals, 4.0),
            InterruptionMode::Latched,
            action(|_: &mut TreeContext| NodeState::Success),
        ),
    ]);
    let mut tree = BehaviorTree::new(root, threat_context(0.0));

    assert_eq!(tree.tick(), NodeState::Success);
    assert_eq!(*tree.blackboard().get(&THREAT).unwrap(), 4.0);
}

/// Leaf that runs forever and logs its exits by name.
struct ExitLogger {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl Behavior<TreeContext> for ExitLogger {
    fn on_update(&mut self, _ctx: &mut TreeContext) -> NodeState {
        NodeState::Running
    }

    fn on_exit(&mut self, _ctx: &mut TreeContext) {
        self.log.lock().unwrap().push(self.name);
    }
}

#[test]
fn interrupt_and_abort_reach_children_in_index_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let children = ["first", "second", "third"]
        .into_iter()
        .map(|name| {
            Node::new(ExitLogger {
                name,
                log: Arc::clone(&log),
            })
        })
        .collect();
    let mut tree = BehaviorTree::new(
        Node::new(Parallel::new(ParallelType::OneTriggeredChild, children)),
        TreeContext::default(),
    );

    assert_eq!(tree.tick(), NodeState::Running);
    tree.interrupt();
    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);

    log.lock().unwrap().clear();
    assert_eq!(tree.tick(), NodeState::Running);
    assert!(tree.abort());
    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
}
