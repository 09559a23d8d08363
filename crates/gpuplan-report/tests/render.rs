use gpuplan_core::models::plan::PlanRequest;
use gpuplan_core::pricing::Pricing;
use gpuplan_report::format::format_amount;
use gpuplan_report::render::render_template;
use gpuplan_report::summary::{render_assumptions, render_summary, render_sweep};
use gpuplan_solver::plan::{plan, sweep};

fn plan_for(model_id: &str, users: i64) -> gpuplan_core::models::plan::CostPlan {
    let request = PlanRequest {
        model_id: model_id.to_string(),
        concurrent_users: users,
    };
    plan(&Pricing::builtin(), &request).unwrap()
}

#[test]
fn amounts_get_thousands_separators() {
    assert_eq!(format_amount(0.0, 0), "0");
    assert_eq!(format_amount(999.0, 0), "999");
    assert_eq!(format_amount(100_000.0, 0), "100,000");
    assert_eq!(format_amount(1_234_567.891, 0), "1,234,568");
    assert_eq!(format_amount(2060.0, 2), "2,060.00");
    assert_eq!(format_amount(-5300.5, 1), "-5,300.5");
    assert_eq!(format_amount(-0.001, 0), "0");
}

#[test]
fn summary_lists_costs_and_configuration() {
    let text = render_summary(&plan_for("t-lite", 500)).unwrap();
    assert!(text.starts_with("T-lite (8B) on A100 40GB, 500 concurrent users"));
    assert!(text.contains("1 × 4-GPU server, 1 × 1-GPU server"));
    assert!(text.contains("380,000 RUB/month"));
    assert!(text.contains("650,000 RUB/month (5 × 130,000)"));
    assert!(text.contains("TOTAL                 1,030,000 RUB/month"));
    assert!(text.contains("2,060.00 RUB/month"));
}

#[test]
fn summary_without_gpus_omits_license_breakdown() {
    let text = render_summary(&plan_for("t-pro", 0)).unwrap();
    assert!(text.contains("no GPUs needed"));
    assert!(text.contains("License cost          0 RUB/month\n"));
}

#[test]
fn assumptions_mention_model_figures() {
    let pricing = Pricing::builtin();
    let model = pricing.model("t-pro").unwrap();
    let text = render_assumptions(&pricing, model).unwrap();
    assert!(text.contains("Average input: 2048 tokens."));
    assert!(text.contains("One A100 80GB GPU running T-pro (32B) sustains 1,931 output tokens/s."));
    assert!(text.contains("(1, 2, 4, 8 GPUs)"));
    assert!(text.contains("5+ GPUs 130,000 RUB/month each"));
}

#[test]
fn sweep_renders_one_line_per_plan() {
    let plans = sweep(&Pricing::builtin(), "t-lite", 50, 150, 50).unwrap();
    let text = render_sweep(&plans).unwrap();
    let rows: Vec<&str> = text.lines().filter(|l| l.contains(" users | ")).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("50 users | 1 GPUs"));
    assert_eq!(render_sweep(&[]).unwrap(), "");
}

#[test]
fn bad_template_is_a_parse_error() {
    let err = render_template("broken", "{% if %}", &serde_json::json!({})).unwrap_err();
    assert!(err.to_string().contains("template parse error"));
}
