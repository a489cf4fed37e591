use epistep_models::seihrd::{Compartment, Trajectory};
use epistep_observers::{PlotObserver, ShowConfig};
use epistep_solvers::transient::TimeGrid;

pub const TITLE: &str = "SIR Epidemic Model";
pub const X_LABEL: &str = "Time (days)";
pub const Y_LABEL: &str = "Population";

/// Builds a chart with one trace per compartment, in state order.
pub fn chart(grid: &TimeGrid, trajectory: &Trajectory) -> PlotObserver<{ Compartment::COUNT }> {
    let series = trajectory.all_series();
    PlotObserver::from_series(
        grid.points(),
        std::array::from_fn(|i| (series[i].0.name(), series[i].1.as_slice())),
    )
}

/// Title, axis labels, and legend for the epidemic chart.
#[must_use]
pub fn show_config() -> ShowConfig {
    ShowConfig::new()
        .title(TITLE)
        .x_label(X_LABEL)
        .y_label(Y_LABEL)
        .legend()
}
