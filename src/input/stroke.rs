use crate::application::Session;
use crate::error::Result;
use std::collections::HashSet;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeMode {
    Paint,
    Erase,
}

/// One continuous mouse drag in edit mode.
///
/// The first cell decides the mode: pressing on a live cell erases, on a
/// dead cell paints. Each cell is touched at most once per stroke.
#[derive(Debug, Default)]
pub struct BrushStroke {
    mode: Option<StrokeMode>,
    edited: HashSet<(usize, usize)>,
}

impl BrushStroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode of the stroke in progress, if any.
    pub fn mode(&self) -> Option<StrokeMode> {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    /// Start a stroke on (column, row).
    pub fn press(&mut self, session: &mut Session, column: usize, row: usize) -> Result<()> {
        self.edited.clear();
        let alive = session
            .grid()
            .cell(column, row)
            .is_some_and(|cell| cell.is_alive());
        let mode = if alive { StrokeMode::Erase } else { StrokeMode::Paint };
        session.paint(column, row, mode == StrokeMode::Paint)?;
        self.mode = Some(mode);
        self.edited.insert((column, row));
        trace!(?mode, column, row, "stroke started");
        Ok(())
    }

    /// Extend the stroke; cells already edited in this stroke are skipped.
    pub fn drag(&mut self, session: &mut Session, column: usize, row: usize) -> Result<()> {
        if self.mode.is_none() || self.edited.contains(&(column, row)) {
            return Ok(());
        }
        self.apply(session, column, row)
    }

    pub fn release(&mut self) {
        if self.mode.take().is_some() {
            trace!(cells = self.edited.len(), "stroke finished");
        }
        self.edited.clear();
    }

    fn apply(&mut self, session: &mut Session, column: usize, row: usize) -> Result<()> {
        let alive = matches!(self.mode, Some(StrokeMode::Paint));
        session.paint(column, row, alive)?;
        self.edited.insert((column, row));
        Ok(())
    }
}
