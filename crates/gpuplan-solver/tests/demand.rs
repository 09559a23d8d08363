use gpuplan_core::models::profile::Workload;
use gpuplan_solver::bundle::MAX_REQUIRED_GPUS;
use gpuplan_solver::demand::{estimate_demand, parse_users};
use gpuplan_solver::error::SolverError;

const T_LITE_TPS: f64 = 5727.0;
const T_PRO_TPS: f64 = 1931.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn fifty_users_fit_on_one_gpu() {
    let demand = estimate_demand(50, &Workload::default(), T_LITE_TPS).unwrap();
    assert!(approx(demand.requests_per_second_per_gpu, 11.454));
    assert!(approx(demand.total_requests_per_second, 5.0));
    assert_eq!(demand.gpus_needed, 1);
}

#[test]
fn single_user_is_clamped_to_one_gpu() {
    let demand = estimate_demand(1, &Workload::default(), T_LITE_TPS).unwrap();
    assert_eq!(demand.gpus_needed, 1);
}

#[test]
fn zero_users_need_no_gpus() {
    let demand = estimate_demand(0, &Workload::default(), T_LITE_TPS).unwrap();
    assert_eq!(demand.gpus_needed, 0);
    assert_eq!(demand.total_requests_per_second, 0.0);
}

#[test]
fn demand_rounds_up() {
    // 50 rps / 11.454 rps per GPU = 4.37
    let lite = estimate_demand(500, &Workload::default(), T_LITE_TPS).unwrap();
    assert_eq!(lite.gpus_needed, 5);

    // 50 rps / 3.862 rps per GPU = 12.95
    let pro = estimate_demand(500, &Workload::default(), T_PRO_TPS).unwrap();
    assert_eq!(pro.gpus_needed, 13);
}

#[test]
fn demand_grows_with_users() {
    let workload = Workload::default();
    let gpus: Vec<u32> = (0..=1000)
        .map(|users| estimate_demand(users, &workload, T_PRO_TPS).unwrap().gpus_needed)
        .collect();
    assert!(gpus.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn demand_above_planning_limit_is_rejected() {
    // About 4.4e11 users would need u32::MAX GPUs on t-lite.
    let err = estimate_demand(440_000_000_000, &Workload::default(), T_LITE_TPS).unwrap_err();
    assert!(matches!(err, SolverError::InvalidArgument(msg) if msg.contains("planning limit")));

    // 1_145_300 rps / 11.454 rps per GPU = 99_991.3, just inside the limit.
    let demand = estimate_demand(11_453_000, &Workload::default(), T_LITE_TPS).unwrap();
    assert_eq!(demand.gpus_needed, 99_992);
    assert!(demand.gpus_needed <= MAX_REQUIRED_GPUS);
}

#[test]
fn non_positive_throughput_fails_fast() {
    for tps in [0.0, -10.0, f64::NAN] {
        let err = estimate_demand(50, &Workload::default(), tps).unwrap_err();
        assert!(matches!(err, SolverError::Configuration(_)), "tps = {tps}");
    }
}

#[test]
fn invalid_workload_fails_fast() {
    let workload = Workload {
        output_tokens_per_request: 0,
        ..Workload::default()
    };
    assert!(matches!(
        estimate_demand(50, &workload, T_LITE_TPS),
        Err(SolverError::Configuration(_))
    ));
}

#[test]
fn negative_users_are_rejected() {
    assert!(matches!(parse_users(-3), Err(SolverError::InvalidArgument(_))));
    assert_eq!(parse_users(0).unwrap(), 0);
    assert_eq!(parse_users(42).unwrap(), 42);
}
