pub const DEFAULT_COLUMNS: u16 = 80;

/// Column width of the output device, read once per banner render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    columns: u16,
}

impl TerminalGeometry {
    /// Zero columns is what detached or unusual devices report, so it is read as 80.
    pub fn new(columns: u16) -> TerminalGeometry {
        if columns == 0 {
            return TerminalGeometry::default();
        }

        return TerminalGeometry { columns };
    }

    pub fn columns(&self) -> usize {
        return usize::from(self.columns);
    }
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        return TerminalGeometry {
            columns: DEFAULT_COLUMNS,
        };
    }
}
