use std::fmt::{Display, Write};

use itertools::Itertools;

use crate::{Grid, SimulationState};

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            let line = row.iter().map(|&alive| if alive { '1' } else { '0' }).join(" ");
            f.write_str(&line)?;
        }
        Ok(())
    }
}

/// Console frame for one generation: a label, the grid, then a blank line.
pub struct Generation<'a>(&'a SimulationState);

impl SimulationState {
    pub fn display(&self) -> Generation<'_> {
        Generation(self)
    }
}

impl Display for Generation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cells grid at generation: {}", self.0.generation())?;
        writeln!(f, "{}", self.0.grid())?;
        writeln!(f)
    }
}
