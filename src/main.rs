// ==========================================
// 喷雾药液混配计算系统 - CLI 主入口
// ==========================================
// 用法: spray-mix-planner <配方JSON文件>
// 输出: 混配方案报表 (JSON, stdout)
// 说明: 交互式输入与页面渲染由外部展示层负责
// ==========================================

use anyhow::{bail, Context, Result};
use spray_mix_planner::api::PlanApi;
use spray_mix_planner::logging;
use std::path::Path;

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", spray_mix_planner::APP_NAME);
    tracing::info!("系统版本: {}", spray_mix_planner::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        bail!("用法: spray-mix-planner <配方JSON文件>");
    }

    let recipe_path = Path::new(&args[1]);
    tracing::info!("读取配方文件: {}", recipe_path.display());

    let api = PlanApi::new();
    let report = api
        .plan_from_json_file(recipe_path)
        .with_context(|| format!("配方计算失败: {}", recipe_path.display()))?;

    tracing::info!(
        total_volume_l = report.total_volume_l,
        full_batches = report.full_batches,
        remainder_volume_l = report.remainder_volume_l,
        "混配方案计算完成"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
