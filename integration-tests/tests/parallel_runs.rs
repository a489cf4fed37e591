use std::thread;

use epistep_models::seihrd::{CompartmentState, ModelParameters, Trajectory, integrate};
use epistep_solvers::transient::fixed_step::Method;

fn sweep() -> Vec<(f64, Method)> {
    [0.1, 0.2, 0.3, 0.5, 0.8]
        .into_iter()
        .flat_map(|beta| Method::ALL.into_iter().map(move |method| (beta, method)))
        .collect()
}

fn run(beta: f64, method: Method) -> Trajectory {
    let initial = CompartmentState::initial(9_990.0, 10.0);
    let params = ModelParameters::from_initial(beta, 0.05, 9_990.0, 10.0);
    let (_, trajectory) = integrate(initial, 0.0, 120.0, 0.1, method, &params).unwrap();
    trajectory
}

#[test]
fn independent_runs_on_threads_match_sequential_runs() {
    let cases = sweep();
    let sequential: Vec<_> = cases.iter().map(|&(beta, method)| run(beta, method)).collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = cases
            .iter()
            .map(|&(beta, method)| scope.spawn(move || run(beta, method)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
