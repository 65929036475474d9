//! 自动驾驶 - 绑定编排器生命周期的固定间隔轮询
//!
//! 电平触发：每个tick检查一次条件（启用中且无运行在途）再触发发现
//! 运行。不是调度器，没有退避和抖动，也不跨会话保留。

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::pipeline::orchestrator::PipelineOrchestrator;

/// 启动轮询任务
///
/// 运行本身放在独立任务里：取消定时器不会中断在途运行。
pub(crate) fn spawn_poll_task(
    orchestrator: PipelineOrchestrator,
    interval_seconds: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_seconds.max(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // interval的首个tick立即完成，先消耗掉
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if !orchestrator.context.autopilot_enabled().await {
                break;
            }
            if orchestrator.context.is_busy().await {
                continue;
            }

            let category = orchestrator.context.category().await;
            let runner = orchestrator.clone();
            tokio::spawn(async move {
                if let Err(e) = runner.start_discovery(category).await {
                    eprintln!("⚠️ 自动驾驶发现运行失败: {}", e);
                }
            });
        }
    })
}
