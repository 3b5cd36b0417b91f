// Train the tabular agent on the corridor environment until the score
// window crosses the target, then roll the greedy policy for 100
// episodes. Mirrors the usual train-then-eval driver script.
use dqn_driver::agent::TabularAgent;
use dqn_driver::env::{CorridorEnv, Env};
use dqn_driver::train::{self, TrainConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut env = CorridorEnv::new(9);
    let brain = env.brain().clone();
    println!(
        "brain '{}': {} states, {} actions",
        brain.name, brain.state_size, brain.action_size
    );

    let mut agent = TabularAgent::new(brain.state_size, brain.action_size, 7);

    let cfg = TrainConfig {
        max_episodes: 5_000,
        eps_decay: 0.99,
        window: 50,
        target_score: Some(0.9),
        checkpoint_path: Some("checkpoints/corridor.json".into()),
        ..TrainConfig::default()
    };
    let report = train::run(&mut env, &mut agent, cfg).await?;
    println!(
        "train: {} episodes, window mean {:.3}, solved: {}",
        report.total_episodes,
        report.final_window_mean.unwrap_or(0.0),
        report.solved.is_some()
    );

    let eval = train::run(&mut env, &mut agent, TrainConfig::eval(100)).await?;
    println!(
        "eval: {} episodes, window mean {:.3}",
        eval.total_episodes,
        eval.final_window_mean.unwrap_or(0.0)
    );

    env.close().await?;
    Ok(())
}
