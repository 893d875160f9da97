//! Tick the demo ghost tree and print one line per frame.
//!
//! The ghost haunts the lodge, growing more afraid with every scare. Once
//! fear passes the threshold it flees for a while, then calms down.

use anyhow::{Result, ensure};
use behavior_tree::builder::{action, selector, sequence, wait};
use behavior_tree::{
    AddBlackboardFloat, BehaviorTree, Blackboard, BlackboardKey, CompareBlackboardFloat,
    ComparisonMode, ConditionalCheck, InterruptionMode, Node, NodeState, SetBlackboardFloat,
    Timeout, TreeContext,
};
use clap::Parser;
use console::style;

const FEAR: BlackboardKey<f32> = BlackboardKey::new("fear");

/// Tick the demo ghost behavior tree
#[derive(Parser)]
pub struct Simulate {
    /// Number of frames to run
    #[arg(short, long, default_value_t = 40)]
    frames: u32,

    /// Unscaled seconds per frame
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Time scale applied to the scaled clock
    #[arg(long, default_value_t = 1.0)]
    time_scale: f32,

    /// Fear level above which the ghost flees
    #[arg(long, default_value_t = 5.0)]
    threshold: f32,

    /// Seconds spent fleeing
    #[arg(long, default_value_t = 1.0)]
    flee_for: f32,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        ensure!(self.dt >= 0.0, "--dt must not be negative");

        let mut blackboard = Blackboard::new();
        blackboard.insert(&FEAR, 0.0)?;

        let mut context = TreeContext::new(blackboard);
        context.set_time_scale(self.time_scale);

        let mut tree = BehaviorTree::new(ghost_tree(self.threshold, self.flee_for), context);

        let header = format!("{:>5}  {:>7}  {:<8}  {}", "frame", "time", "state", "fear");
        println!("{}", style(header).bold());

        let mut elapsed = 0.0;
        for frame in 1..=self.frames {
            elapsed += self.dt;
            let state = tree.update(self.dt);
            let fear = tree.blackboard().get(&FEAR).copied()?;
            println!(
                "{frame:>5}  {elapsed:>7.2}  {}  {fear:.1}",
                styled_state(state)
            );
        }

        tracing::info!(ticks = tree.ticks(), "Simulation finished");
        Ok(())
    }
}

/// Flee while fear is above the threshold, otherwise keep haunting.
fn ghost_tree(threshold: f32, flee_for: f32) -> Node<TreeContext> {
    let flee = sequence(vec![
        Node::new(
            Timeout::new(flee_for, action(|_: &mut TreeContext| NodeState::Running))
                .with_mode(InterruptionMode::Latched),
        )
        .named("Flee"),
        Node::new(SetBlackboardFloat::new(FEAR, 0.0)).named("Calm down"),
    ]);

    let scared = Node::new(
        ConditionalCheck::new(
            CompareBlackboardFloat::new(FEAR, ComparisonMode::GreaterThan, threshold),
            flee,
        )
        .with_mode(InterruptionMode::Reactive),
    )
    .named("Scared");

    let haunt = sequence(vec![
        Node::new(AddBlackboardFloat::new(FEAR, 1.5)).named("Scare guest"),
        wait(0.3),
    ]);

    selector(vec![scared, haunt])
}

fn styled_state(state: NodeState) -> String {
    let text = format!("{:<8}", state.to_string());
    match state {
        NodeState::Running => style(text).cyan().to_string(),
        NodeState::Success => style(text).green().to_string(),
        NodeState::Failure => style(text).red().to_string(),
        NodeState::Ready => style(text).dim().to_string(),
    }
}
