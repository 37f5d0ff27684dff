//! Tabular input: typed attributes and rows, converted to numeric vectors.
//!
//! Clustering only ever sees `Vec<f64>` rows. [`Dataset`] is the seam where
//! a table is turned into those rows for a chosen set of attributes.

use crate::error::{Error, Result};

/// A table of rows and attributes that can be converted to numeric vectors.
pub trait Dataset {
    /// `(n_attributes, n_rows)`.
    fn size(&self) -> (usize, usize);

    /// One numeric vector per row, in row order, built from the attributes
    /// at `attributes`. An empty selection means every attribute.
    ///
    /// # Errors
    ///
    /// A conversion error (see [`Error::is_conversion`]) if a selected
    /// attribute does not exist, is not numeric, or has a missing value.
    fn to_vectors(&self, attributes: &[usize]) -> Result<Vec<Vec<f64>>>;
}

/// Kind of values an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Float,
    Categorical,
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn float(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Float,
        }
    }

    pub fn categorical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Categorical,
        }
    }
}

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Category(String),
    Missing,
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Category(s.to_string())
    }
}

/// In-memory [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataGrid {
    attributes: Vec<Attribute>,
    rows: Vec<Vec<Value>>,
}

impl DataGrid {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            rows: Vec::new(),
        }
    }

    /// A grid of float attributes named `x0`, `x1`, ... from numeric rows.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the rows are ragged.
    pub fn from_floats(rows: &[Vec<f64>]) -> Result<Self> {
        let dim = rows.first().map_or(0, Vec::len);
        let attributes = (0..dim).map(|i| Attribute::float(format!("x{i}"))).collect();
        let mut grid = Self::new(attributes);
        for row in rows {
            grid.push_row(row.iter().copied().map(Value::Float).collect())?;
        }
        Ok(grid)
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the row does not have one value per
    /// attribute.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.attributes.len() {
            return Err(Error::DimensionMismatch {
                row: self.rows.len(),
                expected: self.attributes.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
}

impl Dataset for DataGrid {
    fn size(&self) -> (usize, usize) {
        (self.attributes.len(), self.rows.len())
    }

    fn to_vectors(&self, attributes: &[usize]) -> Result<Vec<Vec<f64>>> {
        let selected: Vec<usize> = if attributes.is_empty() {
            (0..self.attributes.len()).collect()
        } else {
            attributes.to_vec()
        };

        for &index in &selected {
            let attr = self.attributes.get(index).ok_or(Error::UnknownAttribute {
                index,
                n_attributes: self.attributes.len(),
            })?;
            if attr.kind != AttributeKind::Float {
                return Err(Error::NonNumericAttribute {
                    name: attr.name.clone(),
                });
            }
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                selected
                    .iter()
                    .map(|&index| match values[index] {
                        Value::Float(x) => Ok(x),
                        _ => Err(Error::MissingValue {
                            row,
                            attribute: self.attributes[index].name.clone(),
                        }),
                    })
                    .collect::<Result<Vec<f64>>>()
            })
            .collect()
    }
}
