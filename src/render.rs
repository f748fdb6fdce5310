//! MATLAB/Octave script output for plotting a tour.

use crate::error::Result;
use crate::models::{Cities, Tour};
use std::io::Write;

/// Writes a script that scatters the cities, draws the tour through them and
/// labels each city with its 1-based index.
///
/// # Examples
///
/// ```
/// use tsp_anneal::models::{Cities, Tour};
/// use tsp_anneal::render::write_matlab_script;
///
/// let cities = Cities::from_coords(&[(0, 0), (3, 4), (6, 0)]);
/// let mut out = Vec::new();
/// write_matlab_script(&mut out, &cities, &Tour::identity(3)).unwrap();
/// let script = String::from_utf8(out).unwrap();
/// assert!(script.starts_with("cities=[0 0;3 4;6 0;];\nbest=[ 1 2 3 1 ];\n"));
/// ```
pub fn write_matlab_script<W: Write>(mut out: W, cities: &Cities, tour: &Tour) -> Result<()> {
    writeln!(out, "cities={cities};")?;
    writeln!(out, "best={tour};")?;
    writeln!(out, "scatter(cities(:,1),cities(:,2))")?;
    writeln!(out, "hold on")?;
    writeln!(out, "plot(cities(best,1),cities(best,2))")?;
    writeln!(
        out,
        "text(cities(:,1)+1,cities(:,2)+1,cellstr(num2str([1:length(cities)]')))"
    )?;
    writeln!(out, "hold off")?;
    out.flush()?;
    Ok(())
}
