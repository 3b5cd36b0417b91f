use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use crate::agent::{Agent, Transition};
use crate::env::Env;
use crate::window::ScoreWindow;

use super::config::TrainConfig;
use super::errors::TrainError;
use super::report::{Solved, TrainingReport};

/// Run the episodic loop until solved, exhausted, or errored.
///
/// Train mode feeds every transition to the agent and decays epsilon once
/// per episode; eval mode rolls the greedy policy and leaves the agent
/// untouched. The solve check runs after every episode against the mean
/// of whatever the score window currently holds.
pub async fn run<E, A>(
    env: &mut E,
    agent: &mut A,
    cfg: TrainConfig,
) -> Result<TrainingReport, TrainError>
where
    E: Env,
    A: Agent<Obs = E::Obs, Act = E::Act>,
{
    let run_id = Uuid::new_v4();
    let started = Instant::now();
    let train = cfg.mode.is_train();
    let window_len = cfg.window.max(1) as u64;

    let mut schedule = cfg.schedule();
    let mut window = ScoreWindow::new(cfg.window);
    let mut scores = Vec::new();
    let mut total_steps: u64 = 0;
    let mut episodes_run: u64 = 0;
    let mut solved: Option<Solved> = None;

    info!(
        %run_id,
        mode = ?cfg.mode,
        max_episodes = cfg.max_episodes,
        "starting run"
    );

    for episode in 1..=cfg.max_episodes {
        episodes_run = episode;
        let mut obs = env.reset(train).await?;
        let mut score = 0.0_f32;

        for _ in 0..cfg.max_steps {
            let epsilon = if train { schedule.value() } else { 0.0 };
            let act = agent.act(&obs, epsilon).await?;
            let outcome = env.step(act.clone()).await?;
            total_steps += 1;

            if train {
                agent
                    .step(Transition {
                        obs: obs.clone(),
                        act,
                        reward: outcome.reward,
                        next_obs: outcome.next_obs.clone(),
                        done: outcome.done,
                    })
                    .await?;
            }

            obs = outcome.next_obs;
            score += outcome.reward;
            if outcome.done {
                break;
            }
        }

        window.push(score);
        scores.push(score);
        if train {
            schedule.advance();
        }

        // The window was just pushed, so it is never empty here.
        let mean = window.mean().unwrap_or(score);
        debug!(
            episode,
            score,
            mean,
            epsilon = schedule.value(),
            "episode finished"
        );
        if episode % window_len == 0 {
            info!(episode, mean, "window summary");
        }

        if train {
            if let Some(target) = cfg.target_score {
                if mean >= target {
                    let reported = episode.saturating_sub(window_len);
                    info!(episode, reported, mean, "environment solved");
                    if let Some(path) = &cfg.checkpoint_path {
                        if let Some(parent) = path.parent() {
                            if !parent.as_os_str().is_empty() {
                                tokio::fs::create_dir_all(parent).await?;
                            }
                        }
                        agent.save(path).await?;
                    }
                    solved = Some(Solved {
                        episode,
                        reported_episode: reported,
                        window_mean: mean,
                        checkpoint: cfg.checkpoint_path.clone(),
                    });
                    break;
                }
            }
        }
    }

    Ok(TrainingReport {
        run_id,
        mode: cfg.mode,
        total_episodes: episodes_run,
        total_steps,
        scores,
        final_window_mean: window.mean(),
        final_epsilon: if train { schedule.value() } else { 0.0 },
        solved,
        elapsed: started.elapsed(),
    })
}
