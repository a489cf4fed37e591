use std::{fs::File, io, path::Path};

use epistep_models::seihrd::{Compartment, Trajectory};
use epistep_solvers::transient::TimeGrid;

/// Writes one CSV row per grid point: time followed by every compartment.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: io::Write>(
    writer: W,
    grid: &TimeGrid,
    trajectory: &Trajectory,
) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["time"];
    header.extend(Compartment::ALL.map(Compartment::name));
    csv.write_record(&header)?;

    for (time, state) in grid.iter().zip(trajectory) {
        let mut row = Vec::with_capacity(Compartment::COUNT + 1);
        row.push(time.to_string());
        row.extend(state.values().map(|v| v.to_string()));
        csv.write_record(&row)?;
    }

    csv.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the trajectory to it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_csv_file(
    path: &Path,
    grid: &TimeGrid,
    trajectory: &Trajectory,
) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_csv(file, grid, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    use epistep_models::seihrd::CompartmentState;

    fn sample() -> (TimeGrid, Trajectory) {
        let grid = TimeGrid::new(0.0, 1.0, 0.5).unwrap();
        let trajectory = Trajectory::new(vec![
            CompartmentState::initial(99.0, 1.0),
            CompartmentState::new(98.5, 0.5, 0.9, 0.0, 0.1, 0.03),
            CompartmentState::new(98.0, 0.9, 0.9, 0.01, 0.2, 0.06),
        ]);
        (grid, trajectory)
    }

    #[test]
    fn writes_header_and_one_row_per_point() {
        let (grid, trajectory) = sample();
        let mut buffer = Vec::new();

        write_csv(&mut buffer, &grid, &trajectory).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "time,Susceptible,Exposed,Infectious,Hospitalized,Recovered,Dead"
        );
        assert_eq!(lines.len(), grid.len() + 1);
        assert_eq!(lines[1], "0,99,0,1,0,0,0");
        assert_eq!(lines[2], "0.5,98.5,0.5,0.9,0,0.1,0.03");
    }

    #[test]
    fn values_read_back_exactly() {
        let (grid, trajectory) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");

        write_csv_file(&path, &grid, &trajectory).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<Vec<f64>> = reader
            .records()
            .map(|record| {
                record
                    .unwrap()
                    .iter()
                    .map(|field| field.parse().unwrap())
                    .collect()
            })
            .collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], grid[2]);
        assert_eq!(&rows[2][1..], &trajectory[2].values()[..]);
    }
}
