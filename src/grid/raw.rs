use super::Grid;
use crate::GridError;
use tracing::*;

/// Decoded fields of a [`Grid`] before the shape is checked.
#[derive(serde::Deserialize)]
pub struct RawGrid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        let RawGrid {
            rows,
            columns,
            cells,
        } = raw;
        if rows.checked_mul(columns) != Some(cells.len()) {
            error!(
                "Decoded grid has {} cells for rows={} columns={}",
                cells.len(),
                rows,
                columns
            );
            return Err(GridError::InvalidShape {
                len: cells.len(),
                rows: Some(rows),
                columns,
            });
        }
        Ok(Grid {
            rows,
            columns,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_serialize_snapshot() {
        let grid = Grid::from_data(vec![Some(1), None, Some(3), Some(4)], 2).unwrap();
        assert_yaml_snapshot!(grid, @r###"
        rows: 2
        columns: 2
        cells:
          - 1
          - ~
          - 3
          - 4
        "###);
    }

    #[test]
    fn test_json_round_trip() {
        let grid = Grid::from_data(vec![Some("a".to_string()), None, Some("c".to_string())], 3)
            .unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"rows":1,"columns":3,"cells":["a",null,"c"]}"#);
        let decoded: Grid<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, grid);
    }

    #[test]
    fn test_decode_keeps_zero_column_rows() {
        let decoded: Grid<u8> = serde_json::from_str(r#"{"rows":4,"columns":0,"cells":[]}"#).unwrap();
        assert_eq!(decoded, Grid::new(4, 0));
    }

    #[test_case(r#"{"rows":2,"columns":2,"cells":[1,2,3]}"#; "short store")]
    #[test_case(r#"{"rows":1,"columns":2,"cells":[1,2,3,4]}"#; "long store")]
    #[test_case(r#"{"rows":0,"columns":0,"cells":[1]}"#; "zero columns with cells")]
    #[test_case(r#"{"rows":18446744073709551615,"columns":2,"cells":[]}"#; "overflowing shape")]
    fn test_decode_rejects_mismatched_shape(payload: &str) {
        let err = serde_json::from_str::<Grid<u8>>(payload).unwrap_err();
        assert!(err.to_string().starts_with("Invalid shape"), "{err}");
    }

    #[test]
    fn test_decode_error_names_given_rows() {
        let raw = RawGrid {
            rows: 1,
            columns: 2,
            cells: vec![Some(1), Some(2), Some(3), Some(4)],
        };
        let err = Grid::try_from(raw).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidShape {
                len: 4,
                rows: Some(1),
                columns: 2
            }
        );
        assert_eq!(err.to_string(), "Invalid shape: 4 cells cannot back a 1x2 grid");
    }

    #[test]
    fn test_try_from_raw() {
        let raw = RawGrid {
            rows: 1,
            columns: 2,
            cells: vec![Some(1), Some(2)],
        };
        assert_eq!(
            Grid::try_from(raw),
            Grid::from_values(vec![1, 2], 2)
        );
    }
}
