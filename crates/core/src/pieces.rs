//! Pieces module - shape matrices and the template catalog
//!
//! A [`Shape`] is a small rectangular boolean matrix (at most 4x4) stored by
//! value, so rotating a piece never touches the catalog it was drawn from.
//! Rotation is a plain transpose-and-reverse; there is no kick table.

use crate::error::ConfigError;
use crate::types::{Rgb, MAX_SHAPE_DIM};

/// Occupied-cell offset inside a shape's bounding box: (col, row)
pub type CellOffset = (i32, i32);

/// Rectangular occupancy matrix, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from its rows.
    ///
    /// Rejects empty matrices, jagged rows, matrices larger than
    /// [`MAX_SHAPE_DIM`] and matrices with no occupied cell.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyShape);
        }

        for (row, cells) in rows.iter().enumerate() {
            let found = cells.as_ref().len();
            if found != width {
                return Err(ConfigError::JaggedShape {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        if height > MAX_SHAPE_DIM || width > MAX_SHAPE_DIM {
            return Err(ConfigError::ShapeTooLarge {
                rows: height,
                cols: width,
            });
        }

        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, cells) in rows.iter().enumerate() {
            bits[r][..width].copy_from_slice(cells.as_ref());
        }

        let shape = Self {
            rows: height as u8,
            cols: width as u8,
            bits,
        };
        if shape.cell_count() == 0 {
            return Err(ConfigError::EmptyShape);
        }
        Ok(shape)
    }

    /// Parse a compact pattern like `"110/011"` (`1` = filled).
    ///
    /// Only used for the built-in catalog, where the patterns are known good.
    const fn from_pattern(pattern: &[&[u8]]) -> Self {
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < pattern.len() {
            let mut c = 0;
            while c < pattern[r].len() {
                bits[r][c] = pattern[r][c] == 1;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: pattern.len() as u8,
            cols: pattern[0].len() as u8,
            bits,
        }
    }

    /// Bounding box height
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Bounding box width
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the cell at (row, col) is occupied; false outside the box
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Occupied offsets in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.bits[r][c])
                .map(move |c| (c as i32, r as i32))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Rotate 90 degrees clockwise: reverse the row order, then transpose.
    ///
    /// The result is `cols x rows`, with `new[r][c] = old[rows - 1 - c][r]`.
    pub fn rotated(&self) -> Self {
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let old_rows = self.rows();
        for (r, row) in bits.iter_mut().enumerate().take(self.cols()) {
            for (c, cell) in row.iter_mut().enumerate().take(old_rows) {
                *cell = self.bits[old_rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

/// The seven standard polyominoes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    Z,
    S,
    T,
    L,
    J,
    O,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
    ];

    /// Spawn-orientation shape
    pub fn shape(self) -> Shape {
        match self {
            PieceKind::I => Shape::from_pattern(&[&[1, 1, 1, 1]]),
            PieceKind::Z => Shape::from_pattern(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::S => Shape::from_pattern(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::T => Shape::from_pattern(&[&[1, 1, 1], &[0, 1, 0]]),
            PieceKind::L => Shape::from_pattern(&[&[1, 1, 1], &[1, 0, 0]]),
            PieceKind::J => Shape::from_pattern(&[&[1, 1, 1], &[0, 0, 1]]),
            PieceKind::O => Shape::from_pattern(&[&[1, 1], &[1, 1]]),
        }
    }

    /// Display color paired with the shape
    pub fn color(self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::Z => Rgb::new(255, 0, 0),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::T => Rgb::new(255, 165, 0),
            PieceKind::L => Rgb::new(0, 0, 255),
            PieceKind::J => Rgb::new(128, 0, 128),
            PieceKind::O => Rgb::new(255, 255, 0),
        }
    }

    /// Position in the standard catalog
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::Z => 1,
            PieceKind::S => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::O => 6,
        }
    }

    pub fn template(self) -> Template {
        Template {
            shape: self.shape(),
            color: self.color(),
        }
    }
}

/// Immutable catalog entry: a spawn shape and its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Template {
    pub shape: Shape,
    pub color: Rgb,
}

/// The set of templates new pieces are drawn from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    pub fn new(templates: Vec<Template>) -> Result<Self, ConfigError> {
        if templates.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        Ok(Self { templates })
    }

    /// I, Z, S, T, L, J, O with their fixed palette
    pub fn standard() -> Self {
        Self {
            templates: PieceKind::ALL.iter().map(|k| k.template()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
