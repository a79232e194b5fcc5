//! Focus grid: a 2D layout of panels and the current position in it.
//!
//! A move succeeds only when the target cell exists; otherwise the position
//! is unchanged. The same panel may occupy several cells (e.g. a panel
//! spanning two columns).

/// A cell position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Direction of a focus move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A grid of focusable cells with a current position.
#[derive(Debug, Clone)]
pub struct NavigationGrid<T> {
    cells: Vec<Vec<T>>,
    position: Position,
}

impl<T: Copy + PartialEq> NavigationGrid<T> {
    /// Create a grid; the initial position is `(0, 0)`.
    pub fn new(cells: Vec<Vec<T>>) -> Self {
        Self {
            cells,
            position: Position::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The cell at the current position, if the grid is non-empty.
    pub fn current(&self) -> Option<T> {
        self.get(self.position)
    }

    fn get(&self, position: Position) -> Option<T> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Move one cell in `direction`. Returns whether the position changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let (dr, dc) = direction.delta();

        let target = match (
            self.position.row.checked_add_signed(dr),
            self.position.col.checked_add_signed(dc),
        ) {
            (Some(row), Some(col)) => Position { row, col },
            _ => return false,
        };

        if self.get(target).is_none() {
            return false;
        }

        self.position = target;
        true
    }

    /// Jump to the first cell holding `item`. Returns whether it was found.
    pub fn focus(&mut self, item: T) -> bool {
        for (row, cells) in self.cells.iter().enumerate() {
            if let Some(col) = cells.iter().position(|c| *c == item) {
                self.position = Position { row, col };
                return true;
            }
        }
        false
    }

    /// Distinct items in row-major order.
    pub fn items(&self) -> Vec<T> {
        let mut items: Vec<T> = Vec::new();
        for item in self.cells.iter().flatten() {
            if !items.contains(item) {
                items.push(*item);
            }
        }
        items
    }
}
