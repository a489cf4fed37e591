//! Time-chart observer for solver runs.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use epistep_core::Observer;
use epistep_solvers::transient::fixed_step;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// All fields are independent with sensible defaults.
///
/// # Example
///
/// ```ignore
/// obs.show(
///     ShowConfig::new()
///         .title("SIR Epidemic Model")
///         .x_label("Time (days)")
///         .y_label("Population")
///         .legend(),
/// )?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no axis labels,
    /// no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window and chart title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on your event type to use [`PlotObserver`] directly as a
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the event
/// entirely; return `None` in a trace slot to skip that trace for the event.
///
/// Fixed-step events already implement it for any state that exposes its
/// values as `[f64; N]`, plotting every component against time.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl<S, const N: usize> Plottable<N> for fixed_step::Event<'_, S>
where
    S: AsRef<[f64; N]>,
{
    fn x(&self) -> Option<f64> {
        Some(self.time)
    }

    fn traces(&self) -> [Option<f64>; N] {
        self.state.as_ref().map(Some)
    }
}

/// An observer that collects named traces and displays them as a chart.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Fill it by either:
///
/// - **Observer path** — pass `&mut PlotObserver` as the solver observer. Works
///   for any event implementing [`Plottable<N>`][Plottable].
/// - **Closure path** — wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] manually.
/// - **Finished run** — build it from a time vector and finished series with
///   [`from_series`][PlotObserver::from_series].
///
/// With the `plot` feature, call [`show`][PlotObserver::show] with a
/// [`ShowConfig`] to render the result.
///
/// # Example — observer path
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Position", "Velocity"]);
/// fixed_step::solve(&model, initial, &grid, Method::RungeKutta4, &mut obs)?;
/// obs.show(ShowConfig::new().title("Oscillator").legend())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Creates a `PlotObserver` from finished series aligned with `x`.
    ///
    /// Each series is paired point by point with `x`; a series shorter than
    /// `x` simply ends early.
    pub fn from_series(x: &[f64], series: [(&str, &[f64]); N]) -> Self {
        let names = series.map(|(name, _)| name);
        let mut obs = Self::new(names);
        for (slot, (_, values)) in obs.data.iter_mut().zip(series) {
            slot.extend(x.iter().zip(values).map(|(&x, &y)| [x, y]));
        }
        obs
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the trace names in order.
    #[must_use]
    pub fn names(&self) -> &[String; N] {
        &self.names
    }

    /// Returns the recorded `[x, y]` points of one trace.
    #[must_use]
    pub fn points(&self, trace: usize) -> &[[f64; 2]] {
        &self.data[trace]
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(feature = "plot")]
mod window {
    use eframe::egui;
    use egui_plot::{Legend, Line, Plot, PlotPoints};

    use super::{PlotObserver, ShowConfig};

    impl<const N: usize> PlotObserver<N> {
        /// Opens a blocking egui window displaying all collected traces.
        ///
        /// Blocks until the window is closed by the user.
        ///
        /// # Errors
        ///
        /// Returns an error if the native window cannot be created.
        pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
            let options = eframe::NativeOptions::default();
            let title = config.title.clone().unwrap_or_default();
            let traces: Vec<(String, Vec<[f64; 2]>)> =
                self.names.into_iter().zip(self.data).collect();

            eframe::run_native(
                &title,
                options,
                Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
            )
        }
    }

    /// The egui [`eframe::App`] that renders collected traces.
    struct PlotApp {
        traces: Vec<(String, Vec<[f64; 2]>)>,
        config: ShowConfig,
    }

    impl eframe::App for PlotApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(title) = &self.config.title {
                    ui.heading(title.as_str());
                }

                let mut plot = Plot::new("plot_observer");
                if self.config.legend {
                    plot = plot.legend(Legend::default());
                }
                if let Some(label) = &self.config.x_label {
                    plot = plot.x_axis_label(label.as_str());
                }
                match (&self.config.y_label, self.config.log_y) {
                    (Some(label), true) => plot = plot.y_axis_label(format!("log₁₀ {label}")),
                    (Some(label), false) => plot = plot.y_axis_label(label.as_str()),
                    (None, true) => plot = plot.y_axis_label("log₁₀"),
                    (None, false) => {}
                }

                let log_y = self.config.log_y;
                plot.show(ui, |plot_ui| {
                    for (name, points) in &self.traces {
                        let plot_points: PlotPoints = if log_y {
                            points
                                .iter()
                                .filter(|p| p[1] > 0.0)
                                .map(|p| [p[0], p[1].log10()])
                                .collect()
                        } else {
                            points.iter().copied().collect()
                        };
                        plot_ui.line(Line::new(plot_points).name(name));
                    }
                });
            });
        }
    }
}
